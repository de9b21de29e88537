use avs_relay_types::audio::L16_MONO_16K;
use avs_relay_types::{Headers, RecognizeRequest};
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};

use crate::client::config::Config;
use crate::client::consts::REQUEST_CONTENT_TYPE;
use crate::error::Result;

/// Builds the two-field form of a recognize request: JSON metadata and audio.
pub fn build_recognize_form(config: &Config, audio: Vec<u8>) -> Result<Form> {
    let mut request = RecognizeRequest::new();
    if let Some(profile) = config.profile() {
        request = request.with_profile(profile);
    }
    if let Some(locale) = config.locale() {
        request = request.with_locale(locale);
    }

    let metadata = Part::text(serde_json::to_string(&request)?).mime_str(REQUEST_CONTENT_TYPE)?;
    let audio = Part::bytes(audio).mime_str(L16_MONO_16K)?;
    Ok(Form::new().part("request", metadata).part("audio", audio))
}

/// Copies the response headers, skipping values that are not valid text.
pub fn to_headers(map: &HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| Some((name.as_str(), value.to_str().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    #[test]
    fn test_to_headers() {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static("multipart/related; boundary=x"));
        map.insert("x-binary", HeaderValue::from_bytes(b"\xff\xfe").unwrap());

        let headers = to_headers(&map);
        assert_eq!(headers.content_type(), Some("multipart/related; boundary=x"));
        assert_eq!(headers.get("x-binary"), None);
        assert_eq!(headers.len(), 1);
    }
}
