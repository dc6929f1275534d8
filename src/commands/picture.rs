//! Image link command.

use anyhow::Result;
use clap::Args;

use payloadqr::payload::{PayloadRequest, PictureFields};

use super::{CommandExecutor, RenderArgs};

/// Generate a QR code pointing at an image.
#[derive(Args, Debug)]
pub struct ImageCommand {
    /// Image URL
    pub url: String,

    /// Alternative text (kept out of the code to keep it small)
    #[arg(long, default_value = "")]
    pub alt: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl CommandExecutor for ImageCommand {
    fn execute(&self) -> Result<()> {
        let fields = PictureFields::new(self.url.as_str()).with_alt_text(self.alt.as_str());
        self.render.emit(&PayloadRequest::Picture(fields))
    }
}
