use super::components::Components;
use super::request_body::RequestBodyOrRef;
use super::response::ResponseOrRef;
use super::schema::{AdditionalProperties, Schema, SchemaOrRef};
use super::spec::OpenApiSpec;
use crate::error::ResolveError;

/// Validate every `$ref` in the document: the path must have the
/// `#/components/<section>/<name>` shape and the target must exist.
///
/// References are deliberately left in place rather than inlined — a named
/// schema reference is the identifier the type mapper resolves against — so
/// validation happens once, up front, and later phases can trust any ref
/// they encounter.
pub fn validate_refs(spec: &OpenApiSpec) -> Result<(), ResolveError> {
    let checker = RefChecker {
        components: spec.components.as_ref(),
    };

    for item in spec.paths.values() {
        let ops = [
            &item.get,
            &item.post,
            &item.put,
            &item.delete,
            &item.patch,
            &item.options,
            &item.head,
            &item.trace,
        ];
        for op in ops.into_iter().flatten() {
            if let Some(ref body) = op.request_body {
                checker.check_request_body(body)?;
            }
            for resp in op.responses.values() {
                checker.check_response(resp)?;
            }
        }
    }

    if let Some(components) = spec.components.as_ref() {
        for schema in components.schemas.values() {
            checker.check_schema(schema)?;
        }
        for resp in components.responses.values() {
            checker.check_response(resp)?;
        }
        for body in components.request_bodies.values() {
            checker.check_request_body(body)?;
        }
    }

    Ok(())
}

struct RefChecker<'a> {
    components: Option<&'a Components>,
}

impl RefChecker<'_> {
    fn check_response(&self, resp: &ResponseOrRef) -> Result<(), ResolveError> {
        match resp {
            ResponseOrRef::Ref { ref_path } => {
                let name = parse_ref_name(ref_path, "responses")?;
                let found = self
                    .components
                    .is_some_and(|c| c.responses.contains_key(name));
                if !found {
                    return Err(ResolveError::RefTargetNotFound(ref_path.clone()));
                }
                Ok(())
            }
            ResponseOrRef::Response(r) => {
                for media in r.content.values() {
                    if let Some(ref schema) = media.schema {
                        self.check_schema(schema)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn check_request_body(&self, body: &RequestBodyOrRef) -> Result<(), ResolveError> {
        match body {
            RequestBodyOrRef::Ref { ref_path } => {
                let name = parse_ref_name(ref_path, "requestBodies")?;
                let found = self
                    .components
                    .is_some_and(|c| c.request_bodies.contains_key(name));
                if !found {
                    return Err(ResolveError::RefTargetNotFound(ref_path.clone()));
                }
                Ok(())
            }
            RequestBodyOrRef::RequestBody(rb) => {
                for media in rb.content.values() {
                    if let Some(ref schema) = media.schema {
                        self.check_schema(schema)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn check_schema(&self, schema_or_ref: &SchemaOrRef) -> Result<(), ResolveError> {
        match schema_or_ref {
            SchemaOrRef::Ref { ref_path } => {
                let name = parse_ref_name(ref_path, "schemas")?;
                let found = self.components.is_some_and(|c| c.schemas.contains_key(name));
                if !found {
                    return Err(ResolveError::RefTargetNotFound(ref_path.clone()));
                }
                Ok(())
            }
            SchemaOrRef::Schema(schema) => self.check_schema_body(schema),
        }
    }

    fn check_schema_body(&self, schema: &Schema) -> Result<(), ResolveError> {
        for prop in schema.properties.values() {
            self.check_schema(prop)?;
        }
        if let Some(ref items) = schema.items {
            self.check_schema(items)?;
        }
        if let Some(AdditionalProperties::Schema(ref extra)) = schema.additional_properties {
            self.check_schema(extra)?;
        }
        for sub in schema
            .all_of
            .iter()
            .chain(&schema.one_of)
            .chain(&schema.any_of)
        {
            self.check_schema(sub)?;
        }
        Ok(())
    }
}

/// Parse a `$ref` path like `#/components/schemas/Foo` and extract the name.
pub fn parse_ref_name<'a>(
    ref_path: &'a str,
    expected_section: &str,
) -> Result<&'a str, ResolveError> {
    let stripped = ref_path
        .strip_prefix("#/components/")
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    let (section, name) = stripped
        .split_once('/')
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    if section != expected_section {
        return Err(ResolveError::InvalidRefFormat(format!(
            "expected section '{}', got '{}' in {}",
            expected_section, section, ref_path
        )));
    }
    Ok(name)
}
