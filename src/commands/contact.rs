//! Contact card command.

use anyhow::Result;
use clap::Args;

use payloadqr::payload::{ContactFields, PayloadRequest};

use super::{CommandExecutor, RenderArgs};

/// Generate a QR code holding a vCard.
#[derive(Args, Debug)]
pub struct ContactCommand {
    /// Full name
    #[arg(short, long)]
    pub name: String,

    /// Phone number
    #[arg(short, long, default_value = "")]
    pub phone: String,

    /// Email address
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Organization
    #[arg(long, default_value = "")]
    pub org: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl CommandExecutor for ContactCommand {
    fn execute(&self) -> Result<()> {
        let fields = ContactFields::new(self.name.as_str())
            .with_number(self.phone.as_str())
            .with_address(self.email.as_str())
            .with_organization(self.org.as_str());

        self.render.emit(&PayloadRequest::Contact(fields))
    }
}
