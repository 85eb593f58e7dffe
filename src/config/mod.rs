use crate::config::cli::Args;
use clap::Parser;
use std::path::{Component, Path, PathBuf};
use tracing::Level;

pub(crate) mod cli;

pub const GAMES_DIR: &str = "games";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub args: Args,
    pub games_dir: PathBuf,
    pub output: PathBuf,
    /// Forward-slash path of the games directory relative to the root,
    /// prepended to every entry path in the manifest.
    pub entry_prefix: String,
}

impl Config {
    pub fn new() -> Self {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Self {
        let games_dir = args
            .games_dir
            .clone()
            .unwrap_or_else(|| args.root.join(GAMES_DIR));
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| args.root.join(MANIFEST_FILE));

        let relative = games_dir.strip_prefix(&args.root).unwrap_or(&games_dir);
        let entry_prefix = to_slash_path(relative);

        Self {
            args,
            games_dir,
            output,
            entry_prefix,
        }
    }

    pub fn log_level(&self) -> Level {
        self.args.log_level.parse().unwrap_or(Level::WARN)
    }
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::CurDir => None,
            Component::RootDir => Some(String::new()),
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}
