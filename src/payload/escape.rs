//! Escaping for the `WIFI:` network provisioning format.
//!
//! Backslash, semicolon, comma, colon and double quote are special in the
//! `WIFI:` grammar and must be prefixed with a backslash inside a value.

/// Characters that need a backslash prefix inside a `WIFI:` field value.
const SPECIAL: [char; 5] = ['\\', ';', ',', ':', '"'];

/// Escapes a single field value for interpolation into a `WIFI:` payload.
///
/// The input is scanned once, so a backslash introduced by escaping is never
/// escaped again.
pub fn escape_wifi_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Reverses [`escape_wifi_value`].
///
/// A backslash followed by any character yields that character. A trailing
/// lone backslash is kept as-is.
pub fn unescape_wifi_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => unescaped.push(next),
                None => unescaped.push('\\'),
            }
        } else {
            unescaped.push(c);
        }
    }
    unescaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(escape_wifi_value("HomeNetwork 5G"), "HomeNetwork 5G");
    }

    #[test]
    fn test_each_special_character() {
        assert_eq!(escape_wifi_value(r"\"), r"\\");
        assert_eq!(escape_wifi_value(";"), r"\;");
        assert_eq!(escape_wifi_value(","), r"\,");
        assert_eq!(escape_wifi_value(":"), r"\:");
        assert_eq!(escape_wifi_value("\""), r#"\""#);
    }

    #[test]
    fn test_backslash_not_double_escaped() {
        assert_eq!(escape_wifi_value(r"a\;b"), r"a\\\;b");
    }

    #[test]
    fn test_unescape_recovers_original() {
        let samples = [
            "",
            "plain",
            "semi;colon",
            "c:o,m\"b\\o",
            r#"\\;;,,::"""#,
            "ünï;cödé",
        ];
        for sample in samples {
            assert_eq!(unescape_wifi_value(&escape_wifi_value(sample)), sample);
        }
    }

    #[test]
    fn test_unescape_trailing_backslash() {
        assert_eq!(unescape_wifi_value(r"abc\"), r"abc\");
    }
}
