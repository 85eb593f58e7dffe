use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Repository root the manifest is written to
    #[arg(long, default_value = env!("CARGO_MANIFEST_DIR"))]
    pub root: PathBuf,

    /// Directory holding one subfolder per game (defaults to <root>/games)
    #[arg(long)]
    pub games_dir: Option<PathBuf>,

    /// Manifest output file (defaults to <root>/manifest.json)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
