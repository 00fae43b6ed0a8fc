use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use tgdc_bridge::infrastructure::adapters::telegram;
use tgdc_bridge::infrastructure::config::Config;
use tgdc_bridge::{BotIdentity, BridgeError, MessageConverter};

#[derive(Parser)]
#[command(name = "tgdc-bridge")]
#[command(about = "Convert Telegram messages into Discord messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Telegram bot id (overrides config)
    #[arg(short, long)]
    bot_id: Option<i64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one Telegram message (JSON) and print the result
    Convert {
        /// Input file, stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Bridge to convert for, the first configured one when omitted
        #[arg(long)]
        bridge: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Convert { input, bridge } => {
            convert(&cli.config, cli.bot_id, input.as_deref(), bridge.as_deref())
        }
        Commands::Version => {
            println!("tgdc-bridge v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = outcome {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Config {
    if Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

fn convert(
    config_path: &str,
    bot_id_override: Option<i64>,
    input: Option<&Path>,
    bridge_name: Option<&str>,
) -> Result<(), BridgeError> {
    let config = load_config(config_path);

    let bot = match bot_id_override {
        Some(id) => BotIdentity::new(id),
        None => config.bot_identity()?,
    };
    let bridge = config.bridge(bridge_name)?;

    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };

    let message = telegram::parse_message(&raw)?;
    let target = config.discord_target();
    tracing::info!(
        bridge = %bridge.name,
        members = target.members().len(),
        "Converting message {}",
        message.id
    );

    let result = MessageConverter::new(bot, config.settings(), &target).convert(&message, bridge);
    let json = serde_json::to_string_pretty(&result).map_err(|e| BridgeError::Serialization(e.to_string()))?;
    println!("{}", json);

    Ok(())
}

fn init_config() -> Result<(), BridgeError> {
    print!("{}", Config::sample().to_yaml()?);
    Ok(())
}
