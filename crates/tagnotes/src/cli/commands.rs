//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Sets up logging
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap, see `setup.rs`
//! 2. **Context Setup**: configuration, data directory and the API over a `FileStore`
//! 3. **Dispatch**: one `NotesApi` call per command
//! 4. **Output**: `render.rs` for people, `serde_json` for `--json`

use super::render;
use super::setup::{Cli, Commands, TagCommands};
use anyhow::Context;
use clap::Parser;
use tagnotesapp::api::{CmdMessage, NotesApi};
use tagnotesapp::commands::CmdResult;
use tagnotesapp::config::NotesConfig;
use tagnotesapp::error::NotesError;
use tagnotesapp::store::fs::FileStore;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => NotesConfig::load_from(path),
        None => NotesConfig::load(),
    }
    .context("Failed to load configuration")?;
    if !config.color {
        console::set_colors_enabled(false);
    }

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    log::debug!("Using data directory {}", data_dir.display());

    let mut api = NotesApi::new(FileStore::new(data_dir));

    let (result, output) = match cli.command {
        None => (api.list_notes::<&str>("", &[])?, Output::Notes),
        Some(Commands::List { title, tags }) => (api.list_notes(&title, &tags)?, Output::Notes),
        Some(Commands::View { id }) => view_or_list(&api, &id)?,
        Some(Commands::Create {
            title,
            content,
            tags,
        }) => (api.create_note(title, content, &tags)?, Output::Messages),
        Some(Commands::Tags { action }) => match action.unwrap_or(TagCommands::List) {
            TagCommands::List => (api.list_tags()?, Output::Tags),
            TagCommands::Create { label } => (api.create_tag(&label)?, Output::Messages),
            TagCommands::Rename { tag, label } => (api.rename_tag(&tag, &label)?, Output::Messages),
            TagCommands::Delete { tag } => (api.delete_tag(&tag)?, Output::Messages),
        },
        Some(Commands::Doctor) => (api.doctor()?, Output::Dangling),
        Some(Commands::Config) => return print_config(&config, &api, cli.json),
    };

    print_result(&result, output, cli.json)
}

/// Which part of a `CmdResult` a command shows above its messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Notes,
    Detail,
    Tags,
    Dangling,
    Messages,
}

/// Logging goes to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// A note that can't be found sends the user back to the full list.
fn view_or_list(
    api: &NotesApi<FileStore>,
    note_ref: &str,
) -> anyhow::Result<(CmdResult, Output)> {
    match api.view_note(note_ref) {
        Ok(result) => Ok((result, Output::Detail)),
        Err(NotesError::NoteNotFound(id)) => {
            log::info!("Note {} not found, falling back to the list", id);
            let mut result = api.list_notes::<&str>("", &[])?;
            result
                .messages
                .insert(0, CmdMessage::warning(format!("Note '{}' not found", id)));
            Ok((result, Output::Notes))
        }
        Err(e) => Err(e.into()),
    }
}

fn print_result(result: &CmdResult, output: Output, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let mut out = match output {
        Output::Notes => render::render_notes(&result.listed_notes),
        Output::Detail => result
            .viewed_notes
            .iter()
            .map(render::render_note_detail)
            .collect(),
        Output::Tags => render::render_tags(&result.listed_tags),
        Output::Dangling => render::render_dangling(&result.dangling),
        Output::Messages => String::new(),
    };
    out.push_str(&render::render_messages(&result.messages));
    print!("{}", out);
    Ok(())
}

fn print_config(
    config: &NotesConfig,
    api: &NotesApi<FileStore>,
    json: bool,
) -> anyhow::Result<()> {
    let data_dir = api.store().root();
    if json {
        let value = serde_json::json!({
            "data_dir": data_dir,
            "color": config.color,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("data_dir = {}", data_dir.display());
        println!("color = {}", config.color);
    }
    Ok(())
}
