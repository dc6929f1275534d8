//! Link and picture payloads.

use super::{required, ValidationError};

const DEFAULT_SCHEME: &str = "https://";

/// Input for a link payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFields {
    pub url: String,
}

impl LinkFields {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Input for a picture payload.
///
/// `alt_text` is accepted for form parity but is never written into the
/// payload, which keeps the barcode small.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PictureFields {
    pub url: String,
    pub alt_text: String,
}

impl PictureFields {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: String::new(),
        }
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = alt_text.into();
        self
    }
}

/// Prefixes `https://` unless the URL already starts with `http://` or `https://`.
///
/// Idempotent: applying it to its own output is a no-op.
pub fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{url}")
    }
}

pub(crate) fn encode_link(fields: &LinkFields) -> Result<String, ValidationError> {
    Ok(ensure_scheme(required(&fields.url, "url")?))
}

pub(crate) fn encode_picture(fields: &PictureFields) -> Result<String, ValidationError> {
    Ok(ensure_scheme(required(&fields.url, "url")?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_added_once() {
        assert_eq!(ensure_scheme("example.com"), "https://example.com");
        assert_eq!(
            ensure_scheme(&ensure_scheme("example.com")),
            "https://example.com"
        );
    }

    #[test]
    fn test_existing_scheme_kept() {
        assert_eq!(ensure_scheme("http://example.com/a"), "http://example.com/a");
        assert_eq!(ensure_scheme("https://example.com/b"), "https://example.com/b");
    }

    #[test]
    fn test_other_schemes_are_prefixed() {
        // Only http and https count as a scheme
        assert_eq!(ensure_scheme("ftp://host"), "https://ftp://host");
    }

    #[test]
    fn test_link_trimmed() {
        let fields = LinkFields::new("  facebook.com/page  ");
        assert_eq!(encode_link(&fields).unwrap(), "https://facebook.com/page");
    }

    #[test]
    fn test_link_required() {
        assert_eq!(
            encode_link(&LinkFields::new(" ")),
            Err(ValidationError::MissingField("url"))
        );
    }

    #[test]
    fn test_picture_drops_alt_text() {
        let fields = PictureFields::new("img.example.com/cat.png").with_alt_text("A cat");
        assert_eq!(
            encode_picture(&fields).unwrap(),
            "https://img.example.com/cat.png"
        );
    }

    #[test]
    fn test_picture_required() {
        let fields = PictureFields::new("").with_alt_text("orphan alt text");
        assert_eq!(
            encode_picture(&fields),
            Err(ValidationError::MissingField("url"))
        );
    }
}
