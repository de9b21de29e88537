use bytes::Bytes;

use crate::content::headers::Headers;

/// One section of a decoded response: its own header block and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    headers: Headers,
    body: Bytes,
}

impl Part {
    pub fn new(headers: Headers, body: impl Into<Bytes>) -> Self {
        Self {
            headers,
            body: body.into(),
        }
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.content_type()
    }

    /// The content type without its parameters, e.g. `application/json` for
    /// `application/json; charset=UTF-8`.
    pub fn media_type(&self) -> Option<&str> {
        self.content_type()
            .map(|value| value.split(';').next().unwrap_or(value).trim())
    }

    pub fn is_media_type(&self, media_type: &str) -> bool {
        self.media_type()
            .is_some_and(|value| value.eq_ignore_ascii_case(media_type))
    }

    pub fn into_inner(self) -> (Headers, Bytes) {
        (self.headers, self.body)
    }
}
