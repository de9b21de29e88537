use bytes::Bytes;

use crate::content::headers::Headers;
use crate::content::parts::Part;

pub const AUDIO_MPEG: &str = "audio/mpeg";
pub const APPLICATION_JSON: &str = "application/json";

/// Format of the audio the recognizer expects as input.
pub const L16_MONO_16K: &str = "audio/L16; rate=16000; channels=1";

/// A spoken answer ready for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAnswer {
    buffer: Bytes,
    /// Playback length in milliseconds.
    duration: u64,
    headers: Headers,
}

impl AudioAnswer {
    pub fn new(part: Part, duration: u64) -> Self {
        let (headers, buffer) = part.into_inner();
        Self {
            buffer,
            duration,
            headers,
        }
    }

    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}
