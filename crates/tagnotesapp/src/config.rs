//! # Configuration
//!
//! Configuration is loaded with [`confique`], layered in priority order:
//! 1. **Environment variables**: `TAGNOTES_DATA_DIR`, `TAGNOTES_COLOR`.
//! 2. **Config file**: `tagnotes.toml` in the OS config directory (via `directories`),
//!    or an explicit path.
//! 3. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where `notes.json` and `tags.json` live |
//! | `color` | `true` | Colored terminal output |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "tagnotes.toml";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Directory holding notes.json and tags.json.
    #[config(env = "TAGNOTES_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Colored terminal output.
    #[config(env = "TAGNOTES_COLOR", default = true)]
    pub color: bool,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            color: true,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "tagnotes", "tagnotes")
}

impl NotesConfig {
    /// Loads env vars layered over `tagnotes.toml` in the OS config directory.
    pub fn load() -> Result<Self> {
        match project_dirs() {
            Some(dirs) => Self::load_from(&dirs.config_dir().join(CONFIG_FILE)),
            None => Ok(Self::builder().env().load()?),
        }
    }

    /// Loads env vars layered over the given file. A missing file is fine.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self::builder().env().file(path).load()?)
    }

    /// The configured data directory, falling back to the OS data directory,
    /// then to `.tagnotes` in the working directory.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        project_dirs()
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".tagnotes"))
    }
}
