use async_trait::async_trait;
use avs_relay_types::audio::AUDIO_MPEG;
use avs_relay_types::{AudioAnswer, Part};
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;

use crate::error::{BoxError, Error, Result};

/// Measures how long an encoded audio buffer plays, in milliseconds.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DurationProbe: Send + Sync {
    async fn probe(&self, audio: Bytes) -> Result<u64, BoxError>;
}

/// Keeps the `audio/mpeg` parts and pairs each with its duration.
///
/// Probes run concurrently but answers come back in the order of `parts`.
/// If any probe fails the whole extraction fails.
pub async fn extract<P>(parts: Vec<Part>, probe: &P) -> Result<Vec<AudioAnswer>>
where
    P: DurationProbe + ?Sized,
{
    let audio: Vec<Part> = parts
        .into_iter()
        .filter(|part| part.is_media_type(AUDIO_MPEG))
        .collect();
    tracing::debug!(parts = audio.len(), "probing audio parts");

    let durations = futures::future::try_join_all(audio.iter().enumerate().map(
        |(index, part)| async move {
            probe
                .probe(part.body().clone())
                .await
                .map_err(|source| Error::ProbeFailed { index, source })
        },
    ))
    .await?;

    Ok(audio
        .into_iter()
        .zip(durations)
        .map(|(part, duration)| AudioAnswer::new(part, duration))
        .collect())
}
