use serde::Deserialize;

/// Closed classification of a MIME content-type string. Every content type
/// falls into exactly one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentFamily {
    Json,
    Yaml,
    Xml,
    Unsupported,
}

impl ContentFamily {
    /// Canonical substring tested against the Content-Type header in
    /// generated conditions. Doubles as the Go package selector of the
    /// family's `Unmarshal`. `None` for families without a decoder.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            ContentFamily::Json => Some("json"),
            ContentFamily::Yaml => Some("yaml"),
            ContentFamily::Xml => Some("xml"),
            ContentFamily::Unsupported => None,
        }
    }

    /// Envelope field prefix (`JSON` in `JSON200`).
    pub fn field_prefix(&self) -> Option<&'static str> {
        match self {
            ContentFamily::Json => Some("JSON"),
            ContentFamily::Yaml => Some("YAML"),
            ContentFamily::Xml => Some("XML"),
            ContentFamily::Unsupported => None,
        }
    }

    /// Import path of the Go package providing `Unmarshal` for this family.
    pub fn go_import(&self) -> Option<&'static str> {
        match self {
            ContentFamily::Json => Some("encoding/json"),
            ContentFamily::Yaml => Some("gopkg.in/yaml.v2"),
            ContentFamily::Xml => Some("encoding/xml"),
            ContentFamily::Unsupported => None,
        }
    }
}

/// Membership tables mapping content-type strings to families.
///
/// These are contract surface, not an implementation detail: changing
/// membership changes the conditions emitted into generated code, so the
/// built-in lists carry a version that is bumped on every membership
/// change. Overridable from project configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentTypeTables {
    pub json: Vec<String>,
    pub yaml: Vec<String>,
    pub xml: Vec<String>,
}

impl ContentTypeTables {
    /// Version of the built-in membership lists.
    pub const VERSION: u32 = 1;

    /// Classify a content-type string into exactly one family. Plain list
    /// membership — MIME parameters are not parsed.
    pub fn classify(&self, content_type: &str) -> ContentFamily {
        if self.json.iter().any(|c| c == content_type) {
            ContentFamily::Json
        } else if self.yaml.iter().any(|c| c == content_type) {
            ContentFamily::Yaml
        } else if self.xml.iter().any(|c| c == content_type) {
            ContentFamily::Xml
        } else {
            ContentFamily::Unsupported
        }
    }
}

impl Default for ContentTypeTables {
    fn default() -> Self {
        Self {
            json: vec!["application/json".to_string(), "text/x-json".to_string()],
            yaml: vec![
                "application/yaml".to_string(),
                "application/x-yaml".to_string(),
                "text/yaml".to_string(),
                "text/x-yaml".to_string(),
            ],
            xml: vec!["application/xml".to_string(), "text/xml".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_membership() {
        let tables = ContentTypeTables::default();
        assert_eq!(tables.classify("application/json"), ContentFamily::Json);
        assert_eq!(tables.classify("text/x-json"), ContentFamily::Json);
        assert_eq!(tables.classify("application/yaml"), ContentFamily::Yaml);
        assert_eq!(tables.classify("text/x-yaml"), ContentFamily::Yaml);
        assert_eq!(tables.classify("application/xml"), ContentFamily::Xml);
        assert_eq!(tables.classify("text/xml"), ContentFamily::Xml);
        assert_eq!(
            tables.classify("application/octet-stream"),
            ContentFamily::Unsupported
        );
    }

    #[test]
    fn test_no_substring_matching() {
        let tables = ContentTypeTables::default();
        // Parameters and suffixes are not stripped; membership is exact.
        assert_eq!(
            tables.classify("application/json; charset=utf-8"),
            ContentFamily::Unsupported
        );
        assert_eq!(
            tables.classify("application/problem+json"),
            ContentFamily::Unsupported
        );
    }

    #[test]
    fn test_builtin_tables_version() {
        // Bump VERSION whenever the Default membership below changes;
        // generated-code behavior follows these lists.
        assert_eq!(ContentTypeTables::VERSION, 1);
        let tables = ContentTypeTables::default();
        assert_eq!(tables.json.len(), 2);
        assert_eq!(tables.yaml.len(), 4);
        assert_eq!(tables.xml.len(), 2);
    }

    #[test]
    fn test_tables_deserialize() {
        let tables: ContentTypeTables =
            serde_json::from_value(serde_json::json!({ "json": ["application/vnd.api+json"] }))
                .unwrap();
        assert_eq!(
            tables.classify("application/vnd.api+json"),
            ContentFamily::Json
        );
        // Unlisted sections fall back to the built-in membership.
        assert_eq!(tables.classify("application/yaml"), ContentFamily::Yaml);
        assert_eq!(tables.classify("application/json"), ContentFamily::Unsupported);
    }
}
