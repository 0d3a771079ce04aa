//! Read-aloud dispatch.
//!
//! Speaking is one-way: the session hands over an `Utterance` and never
//! learns whether it was played, queued, cut short or failed.

use std::process::{Command, Stdio};
use std::sync::{Mutex, PoisonError};

use flashcard_core::model::Locale;

/// Text to speak and the voice locale to speak it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub locale: Locale,
}

impl Utterance {
    #[must_use]
    pub fn new(text: impl Into<String>, locale: Locale) -> Self {
        Self {
            text: text.into(),
            locale,
        }
    }
}

/// External text-to-speech capability.
///
/// Implementations must return without waiting for playback. Overlapping
/// requests are governed by the implementation, not the caller.
pub trait SpeechService {
    fn speak(&self, utterance: Utterance);
}

//
// ─── COMMAND ───────────────────────────────────────────────────────────────────
//

/// Speaks by spawning an external synthesizer, e.g. `espeak-ng`.
///
/// Argument templates may contain `{text}`, `{locale}` and `{lang}`; if none
/// mentions `{text}` the text is appended after a `--` so card text starting
/// with `-` is never parsed as a synthesizer option.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
}

impl CommandSpeech {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `espeak-ng -v <lang> -- <text>`
    #[must_use]
    pub fn espeak() -> Self {
        Self::new("espeak-ng", vec!["-v".into(), "{lang}".into()])
    }

    /// Parse a whitespace-separated command line such as `say -v Alice`.
    ///
    /// Returns `None` for a blank line.
    #[must_use]
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_owned);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn render_args(&self, utterance: &Utterance) -> Vec<String> {
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| {
                arg.replace("{locale}", utterance.locale.as_str())
                    .replace("{lang}", utterance.locale.language())
                    .replace("{text}", &utterance.text)
            })
            .collect();
        if !self.args.iter().any(|arg| arg.contains("{text}")) {
            args.push("--".to_owned());
            args.push(utterance.text.clone());
        }
        args
    }
}

impl SpeechService for CommandSpeech {
    fn speak(&self, utterance: Utterance) {
        let args = self.render_args(&utterance);
        let spawned = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(err) => {
                tracing::warn!(program = %self.program, %err, "failed to start speech synthesizer");
                return;
            }
        };

        tracing::debug!(program = %self.program, pid = child.id(), locale = %utterance.locale, "speech dispatched");

        let reaper = std::thread::Builder::new()
            .name("speech-reaper".into())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    tracing::warn!(%status, "speech synthesizer exited with failure");
                }
                Ok(_) => {}
                Err(err) => tracing::warn!(%err, "failed to wait for speech synthesizer"),
            });
        if let Err(err) = reaper {
            tracing::warn!(%err, "failed to start speech reaper thread");
        }
    }
}

//
// ─── LOGGING ───────────────────────────────────────────────────────────────────
//

/// Stand-in used when no synthesizer is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSpeech;

impl SpeechService for LoggingSpeech {
    fn speak(&self, utterance: Utterance) {
        tracing::info!(locale = %utterance.locale, text = %utterance.text, "speak");
    }
}

//
// ─── RECORDING ─────────────────────────────────────────────────────────────────
//

/// Keeps every utterance in memory, for testing and prototyping.
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    spoken: Mutex<Vec<Utterance>>,
}

impl RecordingSpeech {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Utterances received so far, oldest first.
    #[must_use]
    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SpeechService for RecordingSpeech {
    fn speak(&self, utterance: Utterance) {
        self.spoken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(utterance);
    }
}
