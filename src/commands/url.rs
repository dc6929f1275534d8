//! Link command.

use anyhow::Result;
use clap::Args;

use payloadqr::payload::{LinkFields, PayloadRequest};

use super::{CommandExecutor, RenderArgs};

/// Generate a QR code for a website, Facebook page, Instagram profile, etc.
#[derive(Args, Debug)]
pub struct UrlCommand {
    /// URL (https:// is added when no scheme is given)
    pub url: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl CommandExecutor for UrlCommand {
    fn execute(&self) -> Result<()> {
        let request = PayloadRequest::Link(LinkFields::new(self.url.as_str()));
        self.render.emit(&request)
    }
}
