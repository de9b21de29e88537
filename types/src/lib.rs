pub mod audio;
pub mod events;
mod content;

pub use audio::AudioAnswer;
pub use content::headers::Headers;
pub use content::parts::Part;
pub use events::{ContinuationRequest, ControlMessage, RecognizeRequest};
