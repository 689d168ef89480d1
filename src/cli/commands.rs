//! CLI command definitions

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diary")]
#[command(about = "Terminal diary with starred entries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry
    New {
        /// Entry title
        title: String,

        /// Entry text
        #[arg(default_value = "")]
        body: String,

        /// Entry date (now, yesterday, YYYY-MM-DD or RFC 3339; default: now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Only show starred entries
        #[arg(short, long)]
        starred: bool,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry in full
    Show {
        /// Entry id or unique id prefix
        id: String,
    },

    /// Change the title and/or text of an entry
    #[command(group(ArgGroup::new("changes").required(true).multiple(true).args(["title", "body"])))]
    Edit {
        /// Entry id or unique id prefix
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New text
        #[arg(short, long)]
        body: Option<String>,
    },

    /// Star an entry
    Star {
        /// Entry id or unique id prefix
        id: String,
    },

    /// Remove the star from an entry
    Unstar {
        /// Entry id or unique id prefix
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id or unique id prefix
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_edit_requires_a_change() {
        assert!(Cli::try_parse_from(["diary", "edit", "abc"]).is_err());
        assert!(Cli::try_parse_from(["diary", "edit", "abc", "--body", "x"]).is_ok());
    }

    #[test]
    fn test_new_body_defaults_to_empty() {
        let cli = Cli::try_parse_from(["diary", "new", "Title"]).unwrap();
        match cli.command {
            Some(Commands::New { title, body, date }) => {
                assert_eq!(title, "Title");
                assert_eq!(body, "");
                assert!(date.is_none());
            }
            other => panic!("Expected New, got {:?}", other),
        }
    }
}
