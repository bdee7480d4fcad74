mod service;

pub use service::{ConsoleSpeaker, SpeechBackend, SpeechService, VoiceSettings};
