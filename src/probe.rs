use async_trait::async_trait;
use bytes::Bytes;

use crate::answers::DurationProbe;
use crate::error::BoxError;

/// Probes durations by writing each buffer to a scoped temporary file and
/// reading its container with symphonia.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDurationProbe;

#[async_trait]
impl DurationProbe for FileDurationProbe {
    async fn probe(&self, audio: Bytes) -> Result<u64, BoxError> {
        Ok(avs_relay_utils::audio::buffer_duration(audio).await?)
    }
}
