//! Phone number command.

use anyhow::Result;
use clap::Args;

use payloadqr::payload::{PayloadRequest, PhoneFields};

use super::{CommandExecutor, RenderArgs};

/// Generate a QR code that dials a phone number.
#[derive(Args, Debug)]
pub struct PhoneCommand {
    /// Phone number, e.g. +1234567890
    pub number: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl CommandExecutor for PhoneCommand {
    fn execute(&self) -> Result<()> {
        let request = PayloadRequest::Phone(PhoneFields::new(self.number.as_str()));
        self.render.emit(&request)
    }
}
