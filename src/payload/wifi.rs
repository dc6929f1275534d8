//! Network provisioning payloads (`WIFI:` URIs).

use std::fmt;

use super::escape::escape_wifi_value;
use super::{required, ValidationError};

/// Authentication scheme advertised in a `WIFI:` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthType {
    /// Open network, emitted as `nopass`.
    None,
    /// Legacy WEP.
    Wep,
    /// WPA/WPA2/WPA3 personal (default).
    #[default]
    Wpa,
}

impl AuthType {
    /// Token used in the `T:` field.
    pub fn as_token(&self) -> &'static str {
        match self {
            AuthType::None => "nopass",
            AuthType::Wep => "WEP",
            AuthType::Wpa => "WPA",
        }
    }

    /// Returns true if the payload carries a `P:` field for this scheme.
    pub fn has_password(&self) -> bool {
        !matches!(self, AuthType::None)
    }
}

impl From<&str> for AuthType {
    /// Parses a user-supplied auth label.
    ///
    /// Matching is case-insensitive. Empty, `none` and `nopass` select an open
    /// network; `wep` selects WEP; everything else (including `no`) falls back
    /// to WPA.
    fn from(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "" | "NONE" | "NOPASS" => AuthType::None,
            "WEP" => AuthType::Wep,
            _ => AuthType::Wpa,
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Input for a network credentials payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkFields {
    pub ssid: String,
    pub auth: AuthType,
    /// Used verbatim; surrounding whitespace is significant in a passphrase.
    pub password: String,
    pub hidden: bool,
}

impl NetworkFields {
    pub fn new(ssid: impl Into<String>, auth: AuthType, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            auth,
            password: password.into(),
            hidden: false,
        }
    }

    /// Marks the network as not broadcasting its SSID.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Builds `WIFI:T:<auth>;S:<ssid>;[P:<password>;]H:<hidden>;;`.
///
/// Open networks omit the `P:` field entirely.
pub(crate) fn encode_network(fields: &NetworkFields) -> Result<String, ValidationError> {
    let ssid = escape_wifi_value(required(&fields.ssid, "ssid")?);

    let payload = if fields.auth.has_password() {
        format!(
            "WIFI:T:{};S:{};P:{};H:{};;",
            fields.auth,
            ssid,
            escape_wifi_value(&fields.password),
            fields.hidden
        )
    } else {
        format!("WIFI:T:{};S:{};H:{};;", fields.auth, ssid, fields.hidden)
    };

    Ok(payload)
}
