//! Telephone (`tel:`) and text message (`smsto:`) payloads.

use super::mail::encode_uri_component;
use super::{optional, required, ValidationError};

/// Input for a phone payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneFields {
    pub number: String,
}

impl PhoneFields {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

/// Input for a text message payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFields {
    pub number: String,
    pub body: String,
}

impl MessageFields {
    pub fn new(number: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            body: body.into(),
        }
    }
}

/// Keeps only digits, `+`, `-`, `(` and `)`.
pub fn clean_phone_number(number: &str) -> String {
    number
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')'))
        .collect()
}

/// Cleans a required number; nothing dialable left counts as missing.
fn required_number(number: &str) -> Result<String, ValidationError> {
    let cleaned = clean_phone_number(required(number, "number")?);
    if cleaned.is_empty() {
        return Err(ValidationError::MissingField("number"));
    }
    Ok(cleaned)
}

pub(crate) fn encode_phone(fields: &PhoneFields) -> Result<String, ValidationError> {
    Ok(format!("tel:{}", required_number(&fields.number)?))
}

/// Builds `smsto:<number>[:<body>]` with the body percent-encoded.
pub(crate) fn encode_message(fields: &MessageFields) -> Result<String, ValidationError> {
    let number = required_number(&fields.number)?;

    match optional(&fields.body) {
        Some(body) => Ok(format!("smsto:{}:{}", number, encode_uri_component(body))),
        None => Ok(format!("smsto:{number}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_phone_number() {
        assert_eq!(clean_phone_number("+1 (555) 123-4567"), "+1(555)123-4567");
        assert_eq!(clean_phone_number("call 555.0100 ext"), "5550100");
        assert_eq!(clean_phone_number("٣٤٥"), "");
    }

    #[test]
    fn test_phone() {
        let fields = PhoneFields::new(" +1 234 567 890 ");
        assert_eq!(encode_phone(&fields).unwrap(), "tel:+1234567890");
    }

    #[test]
    fn test_phone_required() {
        assert_eq!(
            encode_phone(&PhoneFields::new("")),
            Err(ValidationError::MissingField("number"))
        );
    }

    #[test]
    fn test_number_without_digits_rejected() {
        assert_eq!(
            encode_phone(&PhoneFields::new("call me")),
            Err(ValidationError::MissingField("number"))
        );
        assert_eq!(
            encode_message(&MessageFields::new("abc", "hi")),
            Err(ValidationError::MissingField("number"))
        );
    }

    #[test]
    fn test_message_with_body() {
        let fields = MessageFields::new("555-1234", "hi there");
        assert_eq!(encode_message(&fields).unwrap(), "smsto:555-1234:hi%20there");
    }

    #[test]
    fn test_message_without_body() {
        let fields = MessageFields::new("555 1234", "   ");
        assert_eq!(encode_message(&fields).unwrap(), "smsto:5551234");
    }

    #[test]
    fn test_message_body_reserved_characters() {
        let fields = MessageFields::new("1", "a:b&c?");
        assert_eq!(encode_message(&fields).unwrap(), "smsto:1:a%3Ab%26c%3F");
    }

    #[test]
    fn test_message_number_required() {
        let fields = MessageFields::new("  ", "orphan body");
        assert_eq!(
            encode_message(&fields),
            Err(ValidationError::MissingField("number"))
        );
    }
}
