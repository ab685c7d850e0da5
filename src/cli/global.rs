use clap::Args;
use log::LevelFilter;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Log level (off, error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,

    /// Print size statistics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "104857600")]
    pub max_size: usize,

    /// Process input exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}
