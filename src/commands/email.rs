//! Email command.

use anyhow::Result;
use clap::Args;

use payloadqr::payload::{MailFields, PayloadRequest};

use super::{CommandExecutor, RenderArgs};

/// Generate a QR code that opens a pre-filled email.
#[derive(Args, Debug)]
pub struct EmailCommand {
    /// Recipient address
    #[arg(short, long)]
    pub address: String,

    /// Subject line
    #[arg(short, long, default_value = "")]
    pub subject: String,

    /// Message body
    #[arg(short, long, default_value = "")]
    pub body: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl CommandExecutor for EmailCommand {
    fn execute(&self) -> Result<()> {
        let fields = MailFields::new(self.address.as_str())
            .with_subject(self.subject.as_str())
            .with_body(self.body.as_str());

        self.render.emit(&PayloadRequest::Mail(fields))
    }
}
