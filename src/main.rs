//! payloadqr - turn form input into QR code payloads

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{
    CommandExecutor, ContactCommand, EmailCommand, ImageCommand, InfoCommand, PhoneCommand,
    ScanCommand, SmsCommand, TextCommand, UrlCommand, WifiCommand,
};

/// payloadqr - QR codes for Wi-Fi, links, phone numbers, mail, SMS, contacts and text
///
/// Each subcommand takes the fields for one payload type, encodes them into
/// the standard text format scanners understand, and renders a QR code.
#[derive(Parser)]
#[command(name = "payloadqr")]
#[command(version)]
#[command(about = "Generate QR codes for Wi-Fi, links, phone numbers, mail, SMS, contacts and text")]
#[command(long_about = None)]
struct Cli {
    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wi-Fi credentials (WIFI: payload)
    Wifi(WifiCommand),

    /// Website or social profile link
    Url(UrlCommand),

    /// Phone number (tel: payload)
    Phone(PhoneCommand),

    /// Email address with optional subject and body (mailto: payload)
    Email(EmailCommand),

    /// Text message (smsto: payload)
    Sms(SmsCommand),

    /// Contact card (vCard 3.0)
    Contact(ContactCommand),

    /// Link to an image
    Image(ImageCommand),

    /// Plain text
    Text(TextCommand),

    /// Read a QR code image and print its payload
    Scan(ScanCommand),

    /// Show QR capacity info for a payload
    Info(InfoCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Wifi(cmd) => cmd,
            Commands::Url(cmd) => cmd,
            Commands::Phone(cmd) => cmd,
            Commands::Email(cmd) => cmd,
            Commands::Sms(cmd) => cmd,
            Commands::Contact(cmd) => cmd,
            Commands::Image(cmd) => cmd,
            Commands::Text(cmd) => cmd,
            Commands::Scan(cmd) => cmd,
            Commands::Info(cmd) => cmd,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        warn!("Tracing already initialized: {}", err);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    cli.command.executor().execute()
}
