use crate::audio::L16_MONO_16K;
use crate::events::control::AUDIO_PLAYER_NAMESPACE;

/// Body of a follow-up request asking for the next item of a playlist.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationRequest {
    message_header: serde_json::Map<String, serde_json::Value>,
    message_body: NavigationBody,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct NavigationBody {
    navigation_token: String,
}

impl ContinuationRequest {
    pub fn new(navigation_token: &str) -> Self {
        Self {
            message_header: serde_json::Map::new(),
            message_body: NavigationBody {
                navigation_token: navigation_token.to_string(),
            },
        }
    }

    pub fn navigation_token(&self) -> &str {
        &self.message_body.navigation_token
    }
}

/// Metadata sent alongside the audio of a recognize request.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeRequest {
    message_header: RecognizeHeader,
    message_body: RecognizeBody,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeHeader {
    device_context: Vec<DeviceContext>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DeviceContext {
    name: String,
    namespace: String,
    payload: PlaybackState,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    stream_id: String,
    offset_in_milliseconds: u64,
    player_activity: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecognizeBody {
    profile: String,
    locale: String,
    format: String,
}

impl Default for RecognizeRequest {
    fn default() -> Self {
        Self {
            message_header: RecognizeHeader {
                device_context: vec![DeviceContext {
                    name: "playbackState".to_string(),
                    namespace: AUDIO_PLAYER_NAMESPACE.to_string(),
                    payload: PlaybackState {
                        stream_id: String::new(),
                        offset_in_milliseconds: 0,
                        player_activity: "IDLE".to_string(),
                    },
                }],
            },
            message_body: RecognizeBody {
                profile: "alexa-close-talk".to_string(),
                locale: "en-us".to_string(),
                format: L16_MONO_16K.to_string(),
            },
        }
    }
}

impl RecognizeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: &str) -> Self {
        self.message_body.profile = profile.to_string();
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.message_body.locale = locale.to_string();
        self
    }

    pub fn profile(&self) -> &str {
        &self.message_body.profile
    }

    pub fn locale(&self) -> &str {
        &self.message_body.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_continuation() {
        let request = ContinuationRequest::new("token-A");
        let json = serde_json::to_string(&request).unwrap();
        let expected = r#"{"messageHeader":{},"messageBody":{"navigationToken":"token-A"}}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_serialize_recognize_defaults() {
        let value = serde_json::to_value(RecognizeRequest::new().with_locale("en-gb")).unwrap();
        assert_eq!(
            value["messageHeader"]["deviceContext"][0]["payload"]["playerActivity"],
            "IDLE"
        );
        assert_eq!(
            value["messageHeader"]["deviceContext"][0]["namespace"],
            "AudioPlayer"
        );
        assert_eq!(value["messageBody"]["profile"], "alexa-close-talk");
        assert_eq!(value["messageBody"]["locale"], "en-gb");
        assert_eq!(
            value["messageBody"]["format"],
            "audio/L16; rate=16000; channels=1"
        );
    }
}
