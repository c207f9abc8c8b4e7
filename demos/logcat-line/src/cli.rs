use androidlog::Priority;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(arg_required_else_help = true)]
pub struct Args {
    /// Tag attached to the line
    #[clap(short, long)]
    pub tag: String,

    /// Priority to log at (verbose, debug, info, warn, error, fatal)
    #[clap(short, long, default_value = "info")]
    pub priority: Priority,

    /// Package whose databases/log.db mirrors the line
    #[clap(long, value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Directory holding per-package data directories
    #[clap(long, value_name = "PATH", default_value = androidlog::store::DEFAULT_DATA_ROOT)]
    pub data_root: std::path::PathBuf,

    /// Enable verbose informational messages.
    #[clap(long)]
    pub verbose: bool,

    /// Message to log
    #[clap(required = true)]
    pub message: Vec<String>,
}

impl Args {
    pub fn package(&self) -> &str {
        self.package.as_deref().unwrap_or_default()
    }

    pub fn message(&self) -> String {
        self.message.join(" ")
    }
}
