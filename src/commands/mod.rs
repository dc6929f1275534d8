//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.
//! Payload commands share their rendering flags through [`RenderArgs`].

mod contact;
mod email;
mod info;
mod phone;
mod picture;
mod render;
mod scan;
mod sms;
mod text;
mod url;
mod wifi;

pub use contact::ContactCommand;
pub use email::EmailCommand;
pub use info::InfoCommand;
pub use phone::PhoneCommand;
pub use picture::ImageCommand;
pub use render::RenderArgs;
pub use scan::ScanCommand;
pub use sms::SmsCommand;
pub use text::TextCommand;
pub use url::UrlCommand;
pub use wifi::WifiCommand;

use anyhow::Result;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}
