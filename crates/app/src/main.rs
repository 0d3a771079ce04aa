use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use services::{
    BundleDirectory, CardSession, CommandSpeech, DEFAULT_DECK_RESOURCE, DeckLoad, DeckLoader,
    EmbeddedResources, LoadStatus, LoggingSpeech, SessionIntent, SpeechService,
};
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, prelude::*};

/// Sample deck compiled into the binary, used when no bundle directory is given.
const EMBEDDED_DECK: &[u8] = include_bytes!("../assets/questions.json");

const COMMANDS_HELP: &str = "f flip | n next | p previous | r read | rf/rb read front/back | q quit";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    EmptyValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} cannot be empty"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bundle <dir>] [--deck <name>] [--speech-cmd <command>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --deck {DEFAULT_DECK_RESOURCE}");
    eprintln!("  without --bundle the built-in sample deck is shown");
    eprintln!("  without --speech-cmd read-aloud requests are only logged");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLASHCARDS_BUNDLE, FLASHCARDS_DECK, FLASHCARDS_SPEECH_CMD, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    bundle: Option<PathBuf>,
    deck: String,
    speech_cmd: Option<String>,
}

impl Args {
    /// Returns `Ok(None)` when help was requested.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let non_blank = |key: &str| env(key).filter(|value| !value.trim().is_empty());
        let mut bundle = non_blank("FLASHCARDS_BUNDLE").map(PathBuf::from);
        let mut deck =
            non_blank("FLASHCARDS_DECK").unwrap_or_else(|| DEFAULT_DECK_RESOURCE.to_string());
        let mut speech_cmd = non_blank("FLASHCARDS_SPEECH_CMD");

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bundle" => bundle = Some(PathBuf::from(require_value(args, "--bundle")?)),
                "--deck" => deck = require_value(args, "--deck")?,
                "--speech-cmd" => speech_cmd = Some(require_value(args, "--speech-cmd")?),
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            bundle,
            deck,
            speech_cmd,
        }))
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stderr keeps log lines out of the card display on stdout.
    tracing_subscriber::registry()
        .with(tracing_fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_deck(args: &Args) -> DeckLoad {
    match &args.bundle {
        Some(root) => {
            tracing::info!(bundle = %root.display(), deck = %args.deck, "loading deck from bundle");
            DeckLoader::load_resource(&BundleDirectory::new(root), &args.deck)
        }
        None => {
            let embedded = EmbeddedResources::new().with(DEFAULT_DECK_RESOURCE, EMBEDDED_DECK);
            DeckLoader::load_resource(&embedded, &args.deck)
        }
    }
}

fn build_speech(args: &Args) -> Box<dyn SpeechService> {
    match args.speech_cmd.as_deref().and_then(CommandSpeech::from_command_line) {
        Some(command) => {
            tracing::info!(program = command.program(), "speech via external command");
            Box::new(command)
        }
        None => Box::new(LoggingSpeech),
    }
}

fn empty_deck_notice(status: &LoadStatus) -> String {
    match status {
        LoadStatus::Loaded => "This deck has no cards.".to_string(),
        LoadStatus::Missing => "No deck found; nothing to show.".to_string(),
        LoadStatus::Failed(err) => format!("The deck could not be read ({err}); nothing to show."),
    }
}

fn render(session: &CardSession, out: &mut impl Write) -> io::Result<()> {
    let Some(face) = session.view() else {
        return writeln!(out, "No cards to show.");
    };

    writeln!(out)?;
    writeln!(out, "[{}] {}", face.side.label(), face.counter())?;
    writeln!(out, "  {}", face.text)?;
    if !face.emojis.is_empty() {
        writeln!(out, "  {}", face.emoji_line())?;
    }
    let previous = if face.can_go_previous { "< p" } else { "   " };
    let next = if face.can_go_next { "n >" } else { "   " };
    writeln!(out, "{previous}    f flip · r read    {next}")
}

/// Drive a session from line-based commands until `q` or end of input.
fn run_viewer(
    session: &mut CardSession,
    speech: &dyn SpeechService,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    render(session, out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if matches!(command, "q" | "quit") {
            break;
        }

        match SessionIntent::from_command(command) {
            Some(intent) => match session.apply(intent, speech) {
                Ok(true) => render(session, out)?,
                Ok(false) => {}
                Err(err) => writeln!(out, "{err}")?,
            },
            None => writeln!(out, "unknown command `{command}` ({COMMANDS_HELP})")?,
        }
    }

    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |key| std::env::var(key).ok()) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing();

    let DeckLoad { deck, status } = load_deck(&parsed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if deck.is_empty() {
        writeln!(out, "{}", empty_deck_notice(&status))?;
        return Ok(());
    }

    let speech = build_speech(&parsed);
    let mut session = CardSession::new(deck);
    writeln!(out, "{COMMANDS_HELP}")?;
    run_viewer(&mut session, speech.as_ref(), io::stdin().lock(), &mut out)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{DeckLoadError, RecordingSpeech};
    use std::io::Cursor;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Option<Args>, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Args::parse(&mut iter, |key| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn args_default_to_embedded_deck() {
        let args = parse(&[], &[]).unwrap().unwrap();
        assert_eq!(
            args,
            Args {
                bundle: None,
                deck: DEFAULT_DECK_RESOURCE.to_string(),
                speech_cmd: None,
            }
        );
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--deck", "verbi.json", "--speech-cmd", "say -v Alice"],
            &[("FLASHCARDS_DECK", "nomi.json"), ("FLASHCARDS_BUNDLE", "/srv/bundle")],
        )
        .unwrap()
        .unwrap();
        assert_eq!(args.deck, "verbi.json");
        assert_eq!(args.bundle, Some(PathBuf::from("/srv/bundle")));
        assert_eq!(args.speech_cmd.as_deref(), Some("say -v Alice"));
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let args = parse(&[], &[("FLASHCARDS_DECK", "  ")]).unwrap().unwrap();
        assert_eq!(args.deck, DEFAULT_DECK_RESOURCE);
    }

    #[test]
    fn bad_args_are_rejected() {
        assert_eq!(
            parse(&["--deck"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--deck" }
        );
        assert_eq!(
            parse(&["--bundle", " "], &[]).unwrap_err(),
            ArgsError::EmptyValue { flag: "--bundle" }
        );
        assert_eq!(
            parse(&["--verbose"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--verbose".into())
        );
        assert_eq!(parse(&["-h"], &[]).unwrap(), None);
    }

    #[test]
    fn embedded_deck_loads() {
        let args = parse(&[], &[]).unwrap().unwrap();
        let load = load_deck(&args);
        assert!(matches!(load.status, LoadStatus::Loaded));
        assert_eq!(load.deck.len(), 4);
    }

    #[test]
    fn unknown_embedded_name_is_missing() {
        let args = parse(&["--deck", "other.json"], &[]).unwrap().unwrap();
        let load = load_deck(&args);
        assert!(matches!(load.status, LoadStatus::Missing));
        assert_eq!(empty_deck_notice(&load.status), "No deck found; nothing to show.");
    }

    #[test]
    fn failed_load_notice_names_the_error() {
        let notice = empty_deck_notice(&LoadStatus::Failed(DeckLoadError::Empty));
        assert!(notice.contains("deck document is empty"));
    }

    #[test]
    fn every_load_status_has_its_own_notice() {
        let notices = [
            empty_deck_notice(&LoadStatus::Loaded),
            empty_deck_notice(&LoadStatus::Missing),
            empty_deck_notice(&LoadStatus::Failed(DeckLoadError::Empty)),
        ];
        assert_eq!(notices[0], "This deck has no cards.");
        assert_ne!(notices[0], notices[1]);
        assert_ne!(notices[1], notices[2]);
        assert_ne!(notices[0], notices[2]);
    }

    #[test]
    fn viewer_applies_commands_and_reads_aloud() {
        let deck = DeckLoader::embedded(EMBEDDED_DECK);
        let mut session = CardSession::new(deck);
        let speech = RecordingSpeech::new();
        let input = Cursor::new("f\nr\n\nn\nrb\nxyz\nq\nn\n");
        let mut out = Vec::new();

        run_viewer(&mut session, &speech, input, &mut out).unwrap();

        assert_eq!(session.current_index(), 1);
        assert!(!session.is_flipped());

        let texts: Vec<_> = speech.spoken().into_iter().map(|u| u.text).collect();
        assert_eq!(
            texts,
            ["Dove dorme il gatto?", "Che cosa beve Marco ogni mattina?"]
        );

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("[front] 1 / 4"));
        assert!(printed.contains("[back] 1 / 4"));
        assert!(printed.contains("[front] 2 / 4"));
        assert!(printed.contains("unknown command `xyz`"));
    }

    #[test]
    fn viewer_on_empty_deck_reports_errors() {
        let mut session = CardSession::new(services::DeckLoader::load(None));
        let speech = RecordingSpeech::new();
        let mut out = Vec::new();

        run_viewer(&mut session, &speech, Cursor::new("r\n"), &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("No cards to show."));
        assert!(printed.contains("no cards available for session"));
        assert!(speech.spoken().is_empty());
    }
}
