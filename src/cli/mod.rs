use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::builder::PossibleValuesParser;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Classify the emotion of your notes and keep them in a diary
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(
        long,
        global = true,
        default_value = LOG_FORMAT_TEXT,
        value_parser = PossibleValuesParser::new([LOG_FORMAT_TEXT, LOG_FORMAT_JSON])
    )]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Shows whether the model is loaded and how many entries the diary holds
    Status,

    /// Detects the emotion of a note without saving it
    Analyze {
        /// The note to analyze
        text: String,
    },

    /// Analyzes a note, confirms the emotion, and saves it to the diary
    Write {
        /// The note to save
        text: String,

        /// Save under this emotion instead of the detected one
        #[clap(short = 'e', long)]
        emotion: Option<String>,

        /// Accept the detected emotion without asking
        #[clap(short = 'y', long)]
        yes: bool,
    },

    /// Lists diary entries, most recent first
    List,

    /// Changes the text or emotion of an entry
    #[clap(group(ArgGroup::new("changes").required(true).multiple(true).args(&["text", "emotion"])))]
    Edit {
        /// Index of the entry, as shown by `list`
        index: usize,

        /// New text
        #[clap(short = 't', long)]
        text: Option<String>,

        /// New emotion
        #[clap(short = 'e', long)]
        emotion: Option<String>,
    },

    /// Deletes an entry
    Delete {
        /// Index of the entry, as shown by `list`
        index: usize,

        /// Delete without asking for confirmation
        #[clap(short = 'y', long)]
        yes: bool,
    },

    /// Writes the whole diary to a plain text file, most recent first
    Export {
        /// Target file (defaults to my_diary.txt in the data directory)
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Lists the emotions a note can be filed under
    Labels,
}

impl Command {
    /// Whether the command rewrites the diary file.
    pub fn mutates_diary(&self) -> bool {
        matches!(
            self,
            Command::Write { .. } | Command::Edit { .. } | Command::Delete { .. }
        )
    }
}
