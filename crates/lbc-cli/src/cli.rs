use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lbc",
    about = "Locale Bundle Checker: detect key drift between a reference locale and its translations",
    version,
)]
pub struct Cli {
    /// Bundle directory holding the reference and candidate locale files
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Filename of the reference locale inside the bundle directory
    #[arg(long, default_value = "en-us.json")]
    pub reference: String,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
