//! Mail (`mailto:`) payloads and URI component encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{optional, ValidationError};

/// Everything except the URI component unreserved set `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a URI query component. Non-ASCII text is encoded as UTF-8.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Input for a mail payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailFields {
    pub address: String,
    pub subject: String,
    pub body: String,
}

impl MailFields {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Builds `mailto:<address>[?subject=..][&body=..]`.
///
/// The address is only checked for an `@`; it is emitted unencoded.
pub(crate) fn encode_mail(fields: &MailFields) -> Result<String, ValidationError> {
    let address = fields.address.trim();
    if address.is_empty() || !address.contains('@') {
        return Err(ValidationError::InvalidField("address"));
    }

    let mut payload = format!("mailto:{address}");
    let mut separator = '?';

    if let Some(subject) = optional(&fields.subject) {
        payload.push(separator);
        payload.push_str("subject=");
        payload.push_str(&encode_uri_component(subject));
        separator = '&';
    }

    if let Some(body) = optional(&fields.body) {
        payload.push(separator);
        payload.push_str("body=");
        payload.push_str(&encode_uri_component(body));
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_only() {
        let fields = MailFields::new("a@b.com");
        assert_eq!(encode_mail(&fields).unwrap(), "mailto:a@b.com");
    }

    #[test]
    fn test_subject_and_body() {
        let fields = MailFields::new("a@b.com").with_subject("Hi").with_body("Yo");
        assert_eq!(
            encode_mail(&fields).unwrap(),
            "mailto:a@b.com?subject=Hi&body=Yo"
        );
    }

    #[test]
    fn test_subject_only() {
        let fields = MailFields::new("a@b.com").with_subject("Quarterly report");
        assert_eq!(
            encode_mail(&fields).unwrap(),
            "mailto:a@b.com?subject=Quarterly%20report"
        );
    }

    #[test]
    fn test_body_only() {
        let fields = MailFields::new("a@b.com").with_body("see you at 5 & bring snacks");
        assert_eq!(
            encode_mail(&fields).unwrap(),
            "mailto:a@b.com?body=see%20you%20at%205%20%26%20bring%20snacks"
        );
    }

    #[test]
    fn test_blank_optionals_ignored() {
        let fields = MailFields::new(" a@b.com ").with_subject("  ").with_body("\t");
        assert_eq!(encode_mail(&fields).unwrap(), "mailto:a@b.com");
    }

    #[test]
    fn test_address_validation() {
        assert_eq!(
            encode_mail(&MailFields::new("")),
            Err(ValidationError::InvalidField("address"))
        );
        assert_eq!(
            encode_mail(&MailFields::new("not-an-address")),
            Err(ValidationError::InvalidField("address"))
        );
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a+b=c/d"), "a%2Bb%3Dc%2Fd");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
    }
}
