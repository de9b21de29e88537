pub mod answers;
pub mod client;
pub mod continuation;
pub mod error;
pub mod multipart;
#[cfg(feature = "utils")]
mod probe;

pub use avs_relay_types as types;
pub use answers::{extract, DurationProbe};
pub use client::{Client, Config, ConfigBuilder, Stats};
pub use continuation::{exhaust, ContinuationSender};
pub use error::{BoxError, DecodeError, Error, Result};
pub use multipart::{decode, decode_response};

#[cfg(feature = "utils")]
pub use avs_relay_utils as utils;
#[cfg(feature = "utils")]
pub use probe::FileDurationProbe;
