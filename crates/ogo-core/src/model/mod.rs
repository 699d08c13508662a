pub mod naming;

use indexmap::IndexMap;

use crate::config::NamingStrategy;
use crate::error::ResolveError;
use crate::parse::operation::Operation;
use crate::parse::ref_check::{parse_ref_name, validate_refs};
use crate::parse::response::ResponseOrRef;
use crate::parse::schema::SchemaOrRef;
use crate::parse::spec::OpenApiSpec;

pub use naming::{NormalizedName, normalize_name, route_to_name};

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }
}

/// One endpoint+method pair with its response set fully materialized:
/// every response-level `$ref` is looked up before this value is handed to
/// a generator, so classification never fetches lazily.
#[derive(Debug, Clone)]
pub struct OperationDefinition {
    pub name: NormalizedName,
    pub method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub has_body: bool,
    /// Response key ("200", "2XX", "default") → response specification,
    /// in declaration order.
    pub responses: IndexMap<String, ResponseDefinition>,
    pub deprecated: bool,
}

/// A response specification: zero or more content-type → schema pairs.
/// An empty map is a no-content response. A `None` schema means the body
/// shape is unspecified.
#[derive(Debug, Clone)]
pub struct ResponseDefinition {
    pub description: String,
    pub content: IndexMap<String, Option<SchemaOrRef>>,
}

/// Options controlling how operation names are resolved.
#[derive(Debug, Clone, Default)]
pub struct ModelOptions {
    pub naming_strategy: NamingStrategy,
    pub aliases: IndexMap<String, String>,
}

/// Build the operation model from a parsed spec with default options.
pub fn build_operations(spec: &OpenApiSpec) -> Result<Vec<OperationDefinition>, ResolveError> {
    build_operations_with_options(spec, &ModelOptions::default())
}

/// Build the operation model with explicit naming options. Validates every
/// `$ref` in the document first; a dangling reference fails the whole build
/// rather than surfacing later inside a single operation.
pub fn build_operations_with_options(
    spec: &OpenApiSpec,
    options: &ModelOptions,
) -> Result<Vec<OperationDefinition>, ResolveError> {
    validate_refs(spec)?;

    let mut operations = Vec::new();
    for (path, item) in &spec.paths {
        let methods = [
            (HttpMethod::Get, &item.get),
            (HttpMethod::Post, &item.post),
            (HttpMethod::Put, &item.put),
            (HttpMethod::Delete, &item.delete),
            (HttpMethod::Patch, &item.patch),
            (HttpMethod::Options, &item.options),
            (HttpMethod::Head, &item.head),
            (HttpMethod::Trace, &item.trace),
        ];
        for (method, op) in methods {
            if let Some(op) = op {
                operations.push(build_operation(method, path, op, spec, options)?);
            }
        }
    }

    log::debug!(
        "built {} operations from {} paths",
        operations.len(),
        spec.paths.len()
    );
    Ok(operations)
}

fn build_operation(
    method: HttpMethod,
    path: &str,
    op: &Operation,
    spec: &OpenApiSpec,
    options: &ModelOptions,
) -> Result<OperationDefinition, ResolveError> {
    let raw_name = match options.naming_strategy {
        NamingStrategy::UseOperationId => {
            op.operation_id.clone().unwrap_or_else(|| {
                // Fallback: route-based even in operationId mode when no operationId
                route_to_name(method.as_str(), path)
            })
        }
        NamingStrategy::UseRouteBased => route_to_name(method.as_str(), path),
    };

    let name = options
        .aliases
        .get(&raw_name)
        .cloned()
        .unwrap_or(raw_name);

    let mut responses = IndexMap::new();
    for (key, resp) in &op.responses {
        responses.insert(key.clone(), build_response(resp, spec)?);
    }

    Ok(OperationDefinition {
        name: normalize_name(&name),
        method,
        path: path.to_string(),
        summary: op.summary.clone(),
        description: op.description.clone(),
        has_body: op.request_body.is_some(),
        responses,
        deprecated: op.deprecated.unwrap_or(false),
    })
}

fn build_response(
    resp: &ResponseOrRef,
    spec: &OpenApiSpec,
) -> Result<ResponseDefinition, ResolveError> {
    let response = match resp {
        ResponseOrRef::Ref { ref_path } => {
            let name = parse_ref_name(ref_path, "responses")?;
            let target = spec
                .components
                .as_ref()
                .and_then(|c| c.responses.get(name))
                .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.clone()))?;
            match target {
                ResponseOrRef::Response(r) => r,
                // Response refs are resolved one level deep; a components
                // entry that is itself a ref stays unresolved.
                ResponseOrRef::Ref { ref_path } => {
                    return Err(ResolveError::RefTargetNotFound(ref_path.clone()));
                }
            }
        }
        ResponseOrRef::Response(r) => r,
    };

    let content = response
        .content
        .iter()
        .map(|(ct, media)| (ct.clone(), media.schema.clone()))
        .collect();

    Ok(ResponseDefinition {
        description: response.description.clone(),
        content,
    })
}
