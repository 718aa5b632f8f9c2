//! Speech 适配器

mod http_speech_client;
mod recording_speech_client;

pub use http_speech_client::{HttpSpeechClient, HttpSpeechClientConfig};
pub use recording_speech_client::RecordingSpeechClient;
