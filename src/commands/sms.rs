//! Text message command.

use anyhow::Result;
use clap::Args;

use payloadqr::payload::{MessageFields, PayloadRequest};

use super::{CommandExecutor, RenderArgs};

/// Generate a QR code that starts a text message.
#[derive(Args, Debug)]
pub struct SmsCommand {
    /// Recipient phone number
    #[arg(short, long)]
    pub number: String,

    /// Message text
    #[arg(short, long, default_value = "")]
    pub message: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl CommandExecutor for SmsCommand {
    fn execute(&self) -> Result<()> {
        let fields = MessageFields::new(self.number.as_str(), self.message.as_str());
        self.render.emit(&PayloadRequest::Message(fields))
    }
}
