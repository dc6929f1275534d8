//! Contact card payloads (vCard 3.0).

use super::phone::clean_phone_number;
use super::{optional, required, ValidationError};

/// Input for a contact card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub number: String,
    /// Email address.
    pub address: String,
    pub organization: String,
}

impl ContactFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }
}

pub(crate) fn encode_contact(fields: &ContactFields) -> Result<String, ValidationError> {
    let name = required(&fields.name, "name")?;

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{name}"),
    ];

    let number = clean_phone_number(&fields.number);
    if !number.is_empty() {
        lines.push(format!("TEL:{number}"));
    }
    if let Some(address) = optional(&fields.address) {
        lines.push(format!("EMAIL:{address}"));
    }
    if let Some(organization) = optional(&fields.organization) {
        lines.push(format!("ORG:{organization}"));
    }

    lines.push("END:VCARD".to_string());
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only() {
        let fields = ContactFields::new("Jo");
        assert_eq!(
            encode_contact(&fields).unwrap(),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Jo\nEND:VCARD"
        );
    }

    #[test]
    fn test_all_fields_in_order() {
        let fields = ContactFields::new("Ada Lovelace")
            .with_organization("Analytical Engines")
            .with_address("ada@example.com")
            .with_number("+44 (20) 7946-0000");
        assert_eq!(
            encode_contact(&fields).unwrap(),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nTEL:+44(20)7946-0000\n\
             EMAIL:ada@example.com\nORG:Analytical Engines\nEND:VCARD"
        );
    }

    #[test]
    fn test_skips_blank_optionals() {
        let fields = ContactFields::new("Jo").with_number("  ").with_organization("Acme");
        assert_eq!(
            encode_contact(&fields).unwrap(),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Jo\nORG:Acme\nEND:VCARD"
        );
    }

    #[test]
    fn test_undialable_number_skipped() {
        let fields = ContactFields::new("Jo").with_number("call me");
        assert_eq!(
            encode_contact(&fields).unwrap(),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Jo\nEND:VCARD"
        );
    }

    #[test]
    fn test_name_required() {
        let fields = ContactFields::new(" ").with_number("555");
        assert_eq!(
            encode_contact(&fields),
            Err(ValidationError::MissingField("name"))
        );
    }
}
