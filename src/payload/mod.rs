//! Payload encoding: typed form input to barcode-ready text.
//!
//! Each [`PayloadRequest`] variant maps to one standards-defined text shape:
//!
//! | Variant     | Output                                   |
//! |-------------|------------------------------------------|
//! | `Network`   | `WIFI:T:..;S:..;P:..;H:..;;`             |
//! | `Link`      | URL with `https://` added if missing     |
//! | `Phone`     | `tel:<number>`                           |
//! | `Mail`      | `mailto:<address>?subject=..&body=..`    |
//! | `Message`   | `smsto:<number>:<body>`                  |
//! | `Contact`   | vCard 3.0 record                         |
//! | `Picture`   | image URL (alt text dropped)             |
//! | `PlainText` | text as-is                               |
//!
//! Encoding is pure: the same request always yields the same bytes.

mod error;
mod escape;
mod link;
mod mail;
mod phone;
mod vcard;
mod wifi;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

pub use error::ValidationError;
pub use escape::{escape_wifi_value, unescape_wifi_value};
pub use link::{ensure_scheme, LinkFields, PictureFields};
pub use mail::{encode_uri_component, MailFields};
pub use phone::{clean_phone_number, MessageFields, PhoneFields};
pub use vcard::ContactFields;
pub use wifi::{AuthType, NetworkFields};

/// A single encode request. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadRequest {
    Network(NetworkFields),
    Link(LinkFields),
    Phone(PhoneFields),
    Mail(MailFields),
    Message(MessageFields),
    Contact(ContactFields),
    Picture(PictureFields),
    PlainText(String),
}

impl PayloadRequest {
    /// Encodes this request. See [`encode`].
    pub fn encode(&self) -> Result<String, ValidationError> {
        encode(self)
    }

    /// Returns which payload shape this request produces.
    pub fn kind(&self) -> PayloadKind {
        match self {
            PayloadRequest::Network(_) => PayloadKind::Network,
            PayloadRequest::Link(_) => PayloadKind::Link,
            PayloadRequest::Phone(_) => PayloadKind::Phone,
            PayloadRequest::Mail(_) => PayloadKind::Mail,
            PayloadRequest::Message(_) => PayloadKind::Message,
            PayloadRequest::Contact(_) => PayloadKind::Contact,
            PayloadRequest::Picture(_) => PayloadKind::Picture,
            PayloadRequest::PlainText(_) => PayloadKind::PlainText,
        }
    }

    /// Fields that can end up in the payload, by name.
    ///
    /// Picture alt text and the password of an open network are never
    /// written, so they are left out.
    fn emitted_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            PayloadRequest::Network(f) => {
                let mut fields = vec![("ssid", f.ssid.as_str())];
                if f.auth.has_password() {
                    fields.push(("password", f.password.as_str()));
                }
                fields
            }
            PayloadRequest::Link(f) => vec![("url", f.url.as_str())],
            PayloadRequest::Phone(f) => vec![("number", f.number.as_str())],
            PayloadRequest::Mail(f) => vec![
                ("address", f.address.as_str()),
                ("subject", f.subject.as_str()),
                ("body", f.body.as_str()),
            ],
            PayloadRequest::Message(f) => {
                vec![("number", f.number.as_str()), ("body", f.body.as_str())]
            }
            PayloadRequest::Contact(f) => vec![
                ("name", f.name.as_str()),
                ("number", f.number.as_str()),
                ("address", f.address.as_str()),
                ("organization", f.organization.as_str()),
            ],
            PayloadRequest::Picture(f) => vec![("url", f.url.as_str())],
            PayloadRequest::PlainText(text) => vec![("text", text.as_str())],
        }
    }
}

/// Encodes a request into its canonical text payload.
///
/// Returns a [`ValidationError`] and no partial output if a required field is
/// missing or malformed.
pub fn encode(request: &PayloadRequest) -> Result<String, ValidationError> {
    if let Some((field, _)) = request
        .emitted_fields()
        .into_iter()
        .find(|(_, value)| value.contains('\0'))
    {
        return Err(ValidationError::InvalidField(field));
    }

    let payload = match request {
        PayloadRequest::Network(fields) => wifi::encode_network(fields),
        PayloadRequest::Link(fields) => link::encode_link(fields),
        PayloadRequest::Phone(fields) => phone::encode_phone(fields),
        PayloadRequest::Mail(fields) => mail::encode_mail(fields),
        PayloadRequest::Message(fields) => phone::encode_message(fields),
        PayloadRequest::Contact(fields) => vcard::encode_contact(fields),
        PayloadRequest::Picture(fields) => link::encode_picture(fields),
        PayloadRequest::PlainText(text) => required(text, "text").map(str::to_string),
    }?;

    debug!(kind = %request.kind(), bytes = payload.len(), "encoded payload");
    Ok(payload)
}

/// Tag identifying a payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Network,
    Link,
    Phone,
    Mail,
    Message,
    Contact,
    Picture,
    PlainText,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 8] = [
        PayloadKind::Network,
        PayloadKind::Link,
        PayloadKind::Phone,
        PayloadKind::Mail,
        PayloadKind::Message,
        PayloadKind::Contact,
        PayloadKind::Picture,
        PayloadKind::PlainText,
    ];

    /// Short tag used on the command line and in file names.
    pub fn tag(&self) -> &'static str {
        match self {
            PayloadKind::Network => "wifi",
            PayloadKind::Link => "url",
            PayloadKind::Phone => "phone",
            PayloadKind::Mail => "email",
            PayloadKind::Message => "sms",
            PayloadKind::Contact => "contact",
            PayloadKind::Picture => "image",
            PayloadKind::PlainText => "text",
        }
    }

    /// Default output file name without extension, e.g. `wifi_qr`.
    pub fn file_stem(&self) -> String {
        format!("{}_qr", self.tag())
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PayloadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        PayloadKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| format!("Unknown payload type: {}", s))
    }
}

/// Trims `value` and fails with `MissingField(field)` if nothing is left.
pub(crate) fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    optional(value).ok_or(ValidationError::MissingField(field))
}

/// Trims `value`, mapping blank input to `None`.
pub(crate) fn optional(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_each_variant() {
        let cases = [
            (
                PayloadRequest::Network(NetworkFields::new("Net", AuthType::Wpa, "pw")),
                "WIFI:T:WPA;S:Net;P:pw;H:false;;",
            ),
            (
                PayloadRequest::Link(LinkFields::new("example.com")),
                "https://example.com",
            ),
            (PayloadRequest::Phone(PhoneFields::new("555")), "tel:555"),
            (
                PayloadRequest::Mail(MailFields::new("a@b.com")),
                "mailto:a@b.com",
            ),
            (
                PayloadRequest::Message(MessageFields::new("555", "")),
                "smsto:555",
            ),
            (
                PayloadRequest::Contact(ContactFields::new("Jo")),
                "BEGIN:VCARD\nVERSION:3.0\nFN:Jo\nEND:VCARD",
            ),
            (
                PayloadRequest::Picture(PictureFields::new("http://x.io/a.png")),
                "http://x.io/a.png",
            ),
            (
                PayloadRequest::PlainText("  hello world ".to_string()),
                "hello world",
            ),
        ];

        for (request, expected) in cases {
            assert_eq!(request.encode().unwrap(), expected, "{:?}", request.kind());
        }
    }

    #[test]
    fn test_required_fields_rejected() {
        let cases = [
            (PayloadRequest::Network(NetworkFields::default()), "ssid"),
            (PayloadRequest::Link(LinkFields::default()), "url"),
            (PayloadRequest::Phone(PhoneFields::new("\t")), "number"),
            (PayloadRequest::Message(MessageFields::default()), "number"),
            (PayloadRequest::Contact(ContactFields::default()), "name"),
            (PayloadRequest::Picture(PictureFields::default()), "url"),
            (PayloadRequest::PlainText(" \n ".to_string()), "text"),
        ];

        for (request, field) in cases {
            assert_eq!(encode(&request), Err(ValidationError::MissingField(field)));
        }

        assert_eq!(
            encode(&PayloadRequest::Mail(MailFields::default())),
            Err(ValidationError::InvalidField("address"))
        );
    }

    #[test]
    fn test_nul_rejected_before_encoding() {
        let cases = [
            (PayloadRequest::PlainText("a\0b".to_string()), "text"),
            (PayloadRequest::Contact(ContactFields::new("Jo\0")), "name"),
            (
                PayloadRequest::Contact(ContactFields::new("Jo").with_organization("Ac\0me")),
                "organization",
            ),
            (
                PayloadRequest::Network(NetworkFields::new("Net\0", AuthType::Wpa, "pw")),
                "ssid",
            ),
            (
                PayloadRequest::Network(NetworkFields::new("Net", AuthType::Wep, "p\0w")),
                "password",
            ),
            (PayloadRequest::Link(LinkFields::new("example.com/\0")), "url"),
            (
                PayloadRequest::Mail(MailFields::new("a@b.com").with_body("\0")),
                "body",
            ),
        ];

        for (request, field) in cases {
            assert_eq!(encode(&request), Err(ValidationError::InvalidField(field)));
        }
    }

    #[test]
    fn test_unused_fields_may_hold_nul() {
        let open = PayloadRequest::Network(NetworkFields::new("Cafe", AuthType::None, "\0"));
        assert_eq!(encode(&open).unwrap(), "WIFI:T:nopass;S:Cafe;H:false;;");

        let picture =
            PayloadRequest::Picture(PictureFields::new("x.io/a.png").with_alt_text("\0"));
        assert_eq!(encode(&picture).unwrap(), "https://x.io/a.png");
    }

    #[test]
    fn test_encoding_is_stable() {
        let request = PayloadRequest::Mail(
            MailFields::new("team@example.com")
                .with_subject("Stand-up")
                .with_body("10:00 in room 4"),
        );
        assert_eq!(encode(&request), encode(&request.clone()));
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(
            PayloadRequest::Picture(PictureFields::default()).kind(),
            PayloadKind::Picture
        );
        assert_eq!(PayloadKind::Network.file_stem(), "wifi_qr");
        assert_eq!(PayloadKind::Message.to_string(), "sms");
        assert_eq!("EMAIL".parse::<PayloadKind>(), Ok(PayloadKind::Mail));
        assert!("fax".parse::<PayloadKind>().is_err());

        for kind in PayloadKind::ALL {
            assert_eq!(kind.tag().parse::<PayloadKind>(), Ok(kind));
        }
    }
}
