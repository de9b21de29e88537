mod control;
mod request;

pub use control::{ControlMessage, Directive, MessageBody, AUDIO_PLAYER_NAMESPACE};
pub use request::{
    ContinuationRequest, DeviceContext, PlaybackState, RecognizeBody, RecognizeHeader,
    RecognizeRequest,
};
