//! Wi-Fi credentials command.

use anyhow::Result;
use clap::Args;

use payloadqr::payload::{AuthType, NetworkFields, PayloadRequest};

use super::{CommandExecutor, RenderArgs};

/// Generate a QR code that joins a Wi-Fi network.
#[derive(Args, Debug)]
pub struct WifiCommand {
    /// Network name
    #[arg(short, long)]
    pub ssid: String,

    /// Authentication type: WPA (default), WEP, or NONE
    #[arg(short, long, default_value = "WPA")]
    pub auth: String,

    /// Network password (ignored for open networks)
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// The network does not broadcast its SSID
    #[arg(long)]
    pub hidden: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl WifiCommand {
    fn request(&self) -> PayloadRequest {
        let fields = NetworkFields::new(
            self.ssid.as_str(),
            AuthType::from(self.auth.as_str()),
            self.password.as_str(),
        )
        .hidden(self.hidden);

        PayloadRequest::Network(fields)
    }
}

impl CommandExecutor for WifiCommand {
    fn execute(&self) -> Result<()> {
        self.render.emit(&self.request())
    }
}
