use ogo_core::model::normalize_name;
use ogo_core::parse::ref_check::parse_ref_name;
use ogo_core::parse::schema::{AdditionalProperties, Schema, SchemaOrRef, SchemaType};

use crate::error::ClassifyError;

/// The open/untyped Go type: a body with no concrete decode target.
pub const OPEN_TYPE: &str = "interface{}";

/// Map a schema to the Go type name a body decodes into. Named `$ref`s map
/// to their PascalCase identifier; shapes with no concrete Go
/// representation (`oneOf`/`anyOf`, schemaless bodies) map to the open
/// sentinel `interface{}`. Declarations for the named types are someone
/// else's job — only the name is produced here.
pub fn go_type(schema: &SchemaOrRef) -> Result<String, ClassifyError> {
    match schema {
        SchemaOrRef::Ref { ref_path } => {
            let name = parse_ref_name(ref_path, "schemas")
                .map_err(|_| ClassifyError::UnresolvedRef(ref_path.clone()))?;
            Ok(normalize_name(name).pascal_case)
        }
        SchemaOrRef::Schema(schema) => inline_go_type(schema),
    }
}

fn inline_go_type(schema: &Schema) -> Result<String, ClassifyError> {
    // Polymorphic shapes have no single Go decode target.
    if !schema.one_of.is_empty() || !schema.any_of.is_empty() || !schema.all_of.is_empty() {
        return Ok(OPEN_TYPE.to_string());
    }

    let go = match schema.schema_type {
        Some(SchemaType::String) => match schema.format.as_deref() {
            Some("binary") | Some("byte") => "[]byte".to_string(),
            _ => "string".to_string(),
        },
        Some(SchemaType::Integer) => match schema.format.as_deref() {
            Some("int32") => "int32".to_string(),
            Some("int64") => "int64".to_string(),
            _ => "int".to_string(),
        },
        Some(SchemaType::Number) => match schema.format.as_deref() {
            Some("float") => "float32".to_string(),
            _ => "float64".to_string(),
        },
        Some(SchemaType::Boolean) => "bool".to_string(),
        Some(SchemaType::Array) => {
            let inner = match schema.items {
                Some(ref items) => go_type(items)?,
                None => OPEN_TYPE.to_string(),
            };
            format!("[]{inner}")
        }
        Some(SchemaType::Object) => object_go_type(schema)?,
        Some(SchemaType::Null) => OPEN_TYPE.to_string(),
        None => {
            if !schema.properties.is_empty() || schema.additional_properties.is_some() {
                object_go_type(schema)?
            } else {
                OPEN_TYPE.to_string()
            }
        }
    };
    Ok(go)
}

fn object_go_type(schema: &Schema) -> Result<String, ClassifyError> {
    // Anonymous objects decode into a map; a typed value map keeps its
    // value type.
    if let Some(AdditionalProperties::Schema(ref extra)) = schema.additional_properties {
        return Ok(format!("map[string]{}", go_type(extra)?));
    }
    Ok(format!("map[string]{OPEN_TYPE}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(yaml: &str) -> SchemaOrRef {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(go_type(&inline("type: string")).unwrap(), "string");
        assert_eq!(
            go_type(&inline("{type: string, format: binary}")).unwrap(),
            "[]byte"
        );
        assert_eq!(go_type(&inline("type: integer")).unwrap(), "int");
        assert_eq!(
            go_type(&inline("{type: integer, format: int64}")).unwrap(),
            "int64"
        );
        assert_eq!(go_type(&inline("type: number")).unwrap(), "float64");
        assert_eq!(go_type(&inline("type: boolean")).unwrap(), "bool");
    }

    #[test]
    fn test_ref_maps_to_pascal_identifier() {
        let schema = inline("$ref: '#/components/schemas/pet-record'");
        assert_eq!(go_type(&schema).unwrap(), "PetRecord");
    }

    #[test]
    fn test_array_of_refs() {
        let schema = inline(
            r#"
type: array
items:
  $ref: '#/components/schemas/Pet'
"#,
        );
        assert_eq!(go_type(&schema).unwrap(), "[]Pet");
    }

    #[test]
    fn test_object_decodes_into_map() {
        assert_eq!(
            go_type(&inline("type: object")).unwrap(),
            "map[string]interface{}"
        );
        let typed_map = inline(
            r#"
type: object
additionalProperties:
  type: string
"#,
        );
        assert_eq!(go_type(&typed_map).unwrap(), "map[string]string");
    }

    #[test]
    fn test_polymorphic_is_open() {
        let schema = inline(
            r#"
oneOf:
  - $ref: '#/components/schemas/Cat'
  - $ref: '#/components/schemas/Dog'
"#,
        );
        assert_eq!(go_type(&schema).unwrap(), OPEN_TYPE);
    }

    #[test]
    fn test_schemaless_is_open() {
        assert_eq!(go_type(&inline("{}")).unwrap(), OPEN_TYPE);
    }

    #[test]
    fn test_bad_ref_is_an_error() {
        let schema = inline("$ref: 'http://elsewhere/schemas/Pet'");
        assert!(matches!(
            go_type(&schema).unwrap_err(),
            ClassifyError::UnresolvedRef(_)
        ));
    }
}
