/*!
# Emotion Diary

Command-line front end: classifies notes, confirms the detected emotion, and
manages the diary file.

## Usage

```
emotion-diary [OPTIONS] <COMMAND>

Commands:
  status   Shows whether the model is loaded and how many entries the diary holds
  analyze  Detects the emotion of a note without saving it
  write    Analyzes a note, confirms the emotion, and saves it to the diary
  list     Lists diary entries, most recent first
  edit     Changes the text or emotion of an entry
  delete   Deletes an entry
  export   Writes the whole diary to a plain text file, most recent first
  labels   Lists the emotions a note can be filed under

Options:
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
```

## Configuration

- `EMOTION_DIARY_DIR`: data directory (defaults to "~/Documents/emotion-diary")
- `EMOTION_DIARY_MODEL` / `EMOTION_DIARY_MAPPING`: model artifact overrides
- `RUST_LOG`: log filter (overrides `--verbose`)
*/

use clap::Parser;
use emotion_diary::classifier::Classifier;
use emotion_diary::cli::{CliArgs, Command};
use emotion_diary::config::{self, Config};
use emotion_diary::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use emotion_diary::diary::{DiaryLock, DiaryStore};
use emotion_diary::errors::AppResult;
use emotion_diary::ops::{self, Confirmation};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info_span};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose, &args.log_format);

    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        invocation_id = %Uuid::new_v4()
    );
    let _guard = span.enter();
    debug!("CLI arguments: {:?}", args);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Command failed: {:?}", e);
            let _ = writeln!(io::stderr(), "Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool, log_format: &str) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(io::stderr);

    if log_format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(command: Command) -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);
    config::ensure_data_directory_exists(&config.data_dir)?;

    let classifier = Classifier::load(&config.model_file, &config.mapping_file);

    // Held until the command returns.
    let _lock = if command.mutates_diary() {
        Some(DiaryLock::acquire(&config.diary_file)?)
    } else {
        None
    };
    let mut store = DiaryStore::open(&config.diary_file, classifier.labels().cloned());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match command {
        Command::Status => ops::show_status(&classifier, &store, &mut output),
        Command::Analyze { text } => {
            let emotion = ops::analyze_text(&classifier, &text)?;
            writeln!(output, "Detected Emotion: {}", emotion)?;
            Ok(())
        }
        Command::Write { text, emotion, yes } => {
            let confirmation = if yes {
                Confirmation::AssumeYes
            } else {
                Confirmation::Ask
            };
            ops::write_entry(
                &classifier,
                &mut store,
                &text,
                emotion.as_deref(),
                confirmation,
                &mut input,
                &mut output,
            )
            .map(|_| ())
        }
        Command::List => ops::list_entries(&store, &mut output),
        Command::Edit {
            index,
            text,
            emotion,
        } => ops::edit_entry(
            &mut store,
            index,
            text.as_deref(),
            emotion.as_deref(),
            &mut output,
        ),
        Command::Delete { index, yes } => {
            ops::delete_entry(&mut store, index, yes, &mut input, &mut output).map(|_| ())
        }
        Command::Export { output: target } => {
            let target = target.unwrap_or_else(|| config.export_file.clone());
            ops::export_diary(&store, &target, &mut output)
        }
        Command::Labels => ops::show_labels(&classifier, &mut output),
    }
}
