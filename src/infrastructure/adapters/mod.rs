//! Infrastructure Adapters

pub mod lang;
pub mod speech;

pub use lang::StaticLocalizer;
pub use speech::{HttpSpeechClient, HttpSpeechClientConfig, RecordingSpeechClient};
