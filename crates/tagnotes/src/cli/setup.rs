use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tagnotes",
    bin_name = "tagnotes",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Notes with reusable tags, filtered by title and tag", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes.json and tags.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (defaults to tagnotes.toml in the OS config directory)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, optionally filtered by title and tags
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Case-insensitive title substring
        #[arg(short, long, default_value = "")]
        title: String,

        /// Only notes carrying this tag (id or label); repeat to require several
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Show one note
    #[command(alias = "v", display_order = 2)]
    View {
        /// Note id
        id: String,
    },

    /// Create a note
    #[command(alias = "n", display_order = 3)]
    Create {
        /// Note title
        title: String,

        /// Note content
        #[arg(short, long, default_value = "")]
        content: String,

        /// Tag to attach (id or label); repeatable
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Manage tags
    #[command(display_order = 4)]
    Tags {
        #[command(subcommand)]
        action: Option<TagCommands>,
    },

    /// Report notes referencing deleted tags
    #[command(display_order = 5)]
    Doctor,

    /// Show the effective configuration
    #[command(display_order = 6)]
    Config,
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// List all tags
    #[command(alias = "ls")]
    List,

    /// Create a tag
    Create {
        /// Tag label
        label: String,
    },

    /// Rename a tag
    #[command(alias = "mv")]
    Rename {
        /// Tag id or label
        tag: String,
        /// New label
        label: String,
    },

    /// Delete a tag (notes keep no visible trace of it)
    #[command(alias = "rm")]
    Delete {
        /// Tag id or label
        tag: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tagnotes").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn list_with_repeated_tags() {
        match parse(&["list", "--title", "wo", "--tag", "home", "--tag", "b"]).command {
            Some(Commands::List { title, tags }) => {
                assert_eq!(title, "wo");
                assert_eq!(tags, vec!["home", "b"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn list_title_defaults_to_empty() {
        match parse(&["ls"]).command {
            Some(Commands::List { title, tags }) => {
                assert_eq!(title, "");
                assert!(tags.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn tag_rename_takes_ref_and_label() {
        match parse(&["tags", "rename", "work", "office"]).command {
            Some(Commands::Tags {
                action: Some(TagCommands::Rename { tag, label }),
            }) => {
                assert_eq!(tag, "work");
                assert_eq!(label, "office");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["doctor", "--json", "-vv", "--data-dir", "/tmp/x"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}
