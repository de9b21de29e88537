//! Follows the service's navigation tokens until a playlist is exhausted.

use async_trait::async_trait;
use avs_relay_types::audio::APPLICATION_JSON;
use avs_relay_types::events::AUDIO_PLAYER_NAMESPACE;
use avs_relay_types::{ContinuationRequest, ControlMessage, Part};
#[cfg(test)]
use mockall::automock;

use crate::error::{BoxError, Error, Result};

/// Performs one round trip for a continuation and returns the decoded reply.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContinuationSender: Send + Sync {
    async fn send(&self, request: ContinuationRequest) -> Result<Vec<Part>, BoxError>;
}

/// Returns `initial` followed by every part of every follow-up reply.
///
/// Requests are issued one at a time, each built from the token found in the
/// previous reply. A failed hop fails the whole chain.
pub async fn exhaust<S>(initial: Vec<Part>, sender: &S) -> Result<Vec<Part>>
where
    S: ContinuationSender + ?Sized,
{
    let mut accumulated = Vec::new();
    let mut current = initial;
    let mut hop = 0;

    loop {
        let token = navigation_token(&current)?;
        accumulated.append(&mut current);

        let Some(token) = token else {
            tracing::debug!(
                hops = hop,
                parts = accumulated.len(),
                "continuation chain exhausted"
            );
            return Ok(accumulated);
        };

        hop += 1;
        tracing::debug!(hop, "requesting continuation");
        current = sender
            .send(ContinuationRequest::new(&token))
            .await
            .map_err(|source| Error::ContinuationRequestFailed { hop, source })?;
    }
}

/// Extracts the continuation token from the first JSON part of `parts`.
///
/// A top-level `navigationToken` wins over directive payloads; among
/// `AudioPlayer` directives the first one carrying a token is used.
pub fn navigation_token(parts: &[Part]) -> Result<Option<String>> {
    let Some(control) = parts.iter().find(|part| part.is_media_type(APPLICATION_JSON)) else {
        return Ok(None);
    };
    let message: ControlMessage =
        serde_json::from_slice(control.body()).map_err(Error::InvalidControlPart)?;
    let Some(body) = message.message_body() else {
        return Ok(None);
    };

    let token = body.navigation_token().or_else(|| {
        body.directives()
            .iter()
            .filter(|directive| directive.namespace() == AUDIO_PLAYER_NAMESPACE)
            .find_map(|directive| directive.navigation_token())
    });
    Ok(token.map(str::to_string))
}
