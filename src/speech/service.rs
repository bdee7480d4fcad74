use std::io::Write;

use tracing::debug;

/// Voice used for every utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSettings {
    pub language: String,
    pub rate: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            language: "es-MX".to_string(),
            rate: 0.5,
        }
    }
}

/// Platform text-to-speech engine.
pub trait SpeechBackend {
    fn speak(&mut self, text: &str, voice: &VoiceSettings);
    fn stop(&mut self);
}

/// The single speech session of the app.
///
/// Passed by reference to whatever needs to read aloud. Starting a new
/// utterance cancels the current one; asking again for the utterance that
/// is already playing stops it.
pub struct SpeechService<B: SpeechBackend> {
    backend: B,
    voice: VoiceSettings,
    current_id: Option<String>,
}

impl<B: SpeechBackend> SpeechService<B> {
    pub fn new(backend: B) -> Self {
        Self::with_voice(backend, VoiceSettings::default())
    }

    pub fn with_voice(backend: B, voice: VoiceSettings) -> Self {
        Self {
            backend,
            voice,
            current_id: None,
        }
    }

    /// Read `text` aloud under `id`, or stop if `id` is already playing.
    pub fn speak(&mut self, text: &str, id: &str) {
        if self.current_id.as_deref() == Some(id) {
            self.stop();
            return;
        }

        self.stop();
        debug!(id, language = %self.voice.language, "speaking");
        self.current_id = Some(id.to_string());
        self.backend.speak(text, &self.voice);
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.current_id.take() {
            debug!(id = %id, "speech stopped");
            self.backend.stop();
        }
    }

    /// Backend callback: the utterance ended on its own.
    pub fn finished(&mut self) {
        self.current_id = None;
    }

    pub fn is_speaking(&self) -> bool {
        self.current_id.is_some()
    }

    /// Id of the utterance currently playing.
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Writes utterances to a text sink instead of an audio device.
pub struct ConsoleSpeaker<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSpeaker<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleSpeaker<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> SpeechBackend for ConsoleSpeaker<W> {
    fn speak(&mut self, text: &str, voice: &VoiceSettings) {
        // Console output is best-effort, a failed write just drops the line
        let _ = writeln!(self.out, "[{} x{:.1}] {}", voice.language, voice.rate, text);
    }

    fn stop(&mut self) {
        let _ = self.out.flush();
    }
}
