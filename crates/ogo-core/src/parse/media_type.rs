use serde::{Deserialize, Serialize};

use super::schema::SchemaOrRef;

/// A media type object. A missing schema is legal and means the body shape
/// is unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}
