use std::fmt;

use crate::error::ClassifyError;

/// Precedence tier governing clause evaluation order: exact codes are
/// tested before range wildcards, and `default` is tested last. The
/// ordering is total and fixed regardless of input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
    Exact,
    Range,
    Default,
}

/// A response key from the closed pattern space: an exact 3-digit status
/// code (`"200"`), a one-digit range wildcard (`"2XX"`), or the literal
/// `"default"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResponseKey {
    Exact(u16),
    Range(u8),
    Default,
}

impl ResponseKey {
    /// Parse a raw response-map key. Any other shape is a structural error
    /// in the document, not a pattern to guess at.
    pub fn parse(raw: &str) -> Result<Self, ClassifyError> {
        if raw == "default" {
            return Ok(ResponseKey::Default);
        }
        if let Some(digit) = raw.strip_suffix("XX") {
            if digit.len() == 1 && matches!(digit.as_bytes()[0], b'1'..=b'5') {
                return Ok(ResponseKey::Range(digit.as_bytes()[0] - b'0'));
            }
            return Err(ClassifyError::InvalidResponseKey(raw.to_string()));
        }
        if raw.len() == 3 && raw.bytes().all(|b| b.is_ascii_digit()) {
            let code = raw
                .bytes()
                .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
            return Ok(ResponseKey::Exact(code));
        }
        Err(ClassifyError::InvalidResponseKey(raw.to_string()))
    }

    pub fn specificity(&self) -> Specificity {
        match self {
            ResponseKey::Exact(_) => Specificity::Exact,
            ResponseKey::Range(_) => Specificity::Range,
            ResponseKey::Default => Specificity::Default,
        }
    }

    /// Boolean Go expression testing whether `var` satisfies this key.
    /// `default` matches unconditionally, so its clause must come last in
    /// any generated sequence.
    pub fn match_expression(&self, var: &str) -> String {
        match self {
            ResponseKey::Default => "true".to_string(),
            ResponseKey::Range(digit) => format!("{var} / 100 == {digit}"),
            ResponseKey::Exact(code) => format!("{var} == {code}"),
        }
    }

    /// Suffix of the envelope field this key decodes into: `200` → `200`,
    /// `2XX` → `2XX`, `default` → `Default`.
    pub fn field_suffix(&self) -> String {
        match self {
            ResponseKey::Default => "Default".to_string(),
            ResponseKey::Range(digit) => format!("{digit}XX"),
            ResponseKey::Exact(code) => format!("{code:03}"),
        }
    }
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseKey::Default => write!(f, "default"),
            ResponseKey::Range(digit) => write!(f, "{digit}XX"),
            ResponseKey::Exact(code) => write!(f, "{code:03}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_parse_exact() {
        assert_eq!(ResponseKey::parse("200").unwrap(), ResponseKey::Exact(200));
        assert_eq!(ResponseKey::parse("404").unwrap(), ResponseKey::Exact(404));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(ResponseKey::parse("2XX").unwrap(), ResponseKey::Range(2));
        assert_eq!(ResponseKey::parse("5XX").unwrap(), ResponseKey::Range(5));
    }

    #[test]
    fn test_parse_default() {
        assert_eq!(ResponseKey::parse("default").unwrap(), ResponseKey::Default);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for raw in ["2xx", "20X", "6XX", "0XX", "20", "2000", "ok", ""] {
            assert!(
                ResponseKey::parse(raw).is_err(),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn test_specificity_order() {
        assert!(Specificity::Exact < Specificity::Range);
        assert!(Specificity::Range < Specificity::Default);
    }

    #[test]
    fn test_match_expression() {
        assert_snapshot!(
            ResponseKey::Exact(200).match_expression("rsp.StatusCode"),
            @"rsp.StatusCode == 200"
        );
        assert_snapshot!(
            ResponseKey::Range(4).match_expression("rsp.StatusCode"),
            @"rsp.StatusCode / 100 == 4"
        );
        assert_snapshot!(
            ResponseKey::Default.match_expression("rsp.StatusCode"),
            @"true"
        );
    }

    #[test]
    fn test_field_suffix() {
        assert_eq!(ResponseKey::Exact(204).field_suffix(), "204");
        assert_eq!(ResponseKey::Range(2).field_suffix(), "2XX");
        assert_eq!(ResponseKey::Default.field_suffix(), "Default");
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["200", "404", "2XX", "5XX", "default"] {
            assert_eq!(ResponseKey::parse(raw).unwrap().to_string(), raw);
        }
    }
}
