//! Plain text command.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use payloadqr::PayloadRequest;

use super::{CommandExecutor, RenderArgs};

/// Generate a QR code holding plain text.
#[derive(Args, Debug)]
pub struct TextCommand {
    /// Text to encode - reads from stdin if not provided
    pub text: Option<String>,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl CommandExecutor for TextCommand {
    fn execute(&self) -> Result<()> {
        let text = match &self.text {
            Some(t) => t.clone(),
            None => {
                eprintln!("Reading text from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read text from stdin")?;
                buffer
            }
        };

        self.render.emit(&PayloadRequest::PlainText(text))
    }
}
