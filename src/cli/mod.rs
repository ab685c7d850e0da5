mod args;
mod config;
mod global;
mod handlers;
mod input;
mod text;

use basex::BasexConfig;
use clap::{Parser, Subcommand};

use args::{DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "basex")]
#[command(version)]
#[command(about = "Encode and decode binary data as Base32, Base64, Base85, Base91 or Base122", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode binary data to text
    Encode(EncodeArgs),
    /// Decode text back to binary data
    Decode(DecodeArgs),
    /// List available codecs
    Codecs,
    /// Show detected CPU features
    CpuInfo,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let configurable_log_level = config::init_logger(cli.global.log_level);

    // Load configuration with user overrides
    let config = BasexConfig::load_with_overrides()?;
    if configurable_log_level {
        config::apply_config_log_level(&config)?;
    }

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Command::Codecs => handlers::info::list_codecs(),
        Command::CpuInfo => handlers::info::cpu_info(),
    }
}
