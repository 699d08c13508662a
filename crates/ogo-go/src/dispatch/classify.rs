use ogo_core::model::OperationDefinition;

use super::content_type::{ContentFamily, ContentTypeTables};
use super::status::ResponseKey;
use crate::error::ClassifyError;
use crate::type_mapper::{self, OPEN_TYPE};

/// A flattened dispatch record: one per usable (response key × content
/// type) combination the operation declares.
#[derive(Debug, Clone)]
pub struct ResponseTypeDefinition {
    pub key: ResponseKey,
    pub content_type: String,
    pub family: ContentFamily,
    /// Go type the body decodes into; `interface{}` when no concrete
    /// decoder can be generated.
    pub type_name: String,
}

impl ResponseTypeDefinition {
    /// `true` when the target type is the open sentinel: the record still
    /// claims its status pattern, but no decode step can be generated.
    pub fn is_untyped(&self) -> bool {
        self.type_name == OPEN_TYPE
    }

    /// A record is handled when its family has a decoder, its own content
    /// type re-classifies to that family, and a concrete target type
    /// exists. Class and decodability must agree or the record is not
    /// handled.
    pub fn is_handled(&self, tables: &ContentTypeTables) -> bool {
        self.family.token().is_some()
            && tables.classify(&self.content_type) == self.family
            && !self.is_untyped()
    }

    /// Envelope field this record decodes into (`JSON200`, `XMLDefault`).
    /// `None` for families without a decoder.
    pub fn envelope_field(&self) -> Option<String> {
        self.family
            .field_prefix()
            .map(|prefix| format!("{prefix}{}", self.key.field_suffix()))
    }
}

/// One classified response: either a flattened dispatch record or the
/// no-content marker for a bodiless response (e.g. 204).
#[derive(Debug, Clone)]
pub enum ClassifiedResponse {
    Typed(ResponseTypeDefinition),
    NoContent { key: ResponseKey },
}

impl ClassifiedResponse {
    pub fn key(&self) -> &ResponseKey {
        match self {
            ClassifiedResponse::Typed(td) => &td.key,
            ClassifiedResponse::NoContent { key } => key,
        }
    }
}

/// Reduce an operation's response set to the exhaustive list of records
/// requiring dispatch logic.
///
/// Deterministic: response keys keep their declaration order, content
/// types are visited lexicographically within a key. Pure — nothing is
/// retained across calls, and a failure leaves no partial classification
/// behind. A structural error (malformed response key, unresolvable
/// schema reference) is fatal for this operation and propagates.
pub fn classify(
    op: &OperationDefinition,
    tables: &ContentTypeTables,
) -> Result<Vec<ClassifiedResponse>, ClassifyError> {
    let mut records = Vec::new();

    for (raw_key, response) in &op.responses {
        let key = ResponseKey::parse(raw_key)?;

        if response.content.is_empty() {
            records.push(ClassifiedResponse::NoContent { key });
            continue;
        }

        let mut content_types: Vec<&String> = response.content.keys().collect();
        content_types.sort();

        for content_type in content_types {
            let type_name = match &response.content[content_type.as_str()] {
                Some(schema) => type_mapper::go_type(schema)?,
                None => OPEN_TYPE.to_string(),
            };
            records.push(ClassifiedResponse::Typed(ResponseTypeDefinition {
                key: key.clone(),
                content_type: content_type.clone(),
                family: tables.classify(content_type),
                type_name,
            }));
        }
    }

    Ok(records)
}
