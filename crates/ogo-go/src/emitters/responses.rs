use std::collections::{BTreeMap, BTreeSet};

use minijinja::{Environment, context};
use ogo_core::model::OperationDefinition;

use crate::dispatch::classify::{self, ClassifiedResponse};
use crate::dispatch::content_type::ContentTypeTables;
use crate::dispatch::synthesize;
use crate::error::GeneratorError;

/// Emit `responses.go` — one typed response envelope and parse function
/// per operation, each parse function embedding its dispatch switch.
pub fn emit_responses(
    operations: &[OperationDefinition],
    package: &str,
    tables: &ContentTypeTables,
) -> Result<String, GeneratorError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "responses.go.j2",
        include_str!("../../templates/responses.go.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("responses.go.j2").unwrap();

    // Every parse function reads the body and touches the raw response.
    let mut imports = BTreeSet::from(["io".to_string(), "net/http".to_string()]);

    let mut op_contexts = Vec::new();
    for op in operations {
        let classified =
            classify::classify(op, tables).map_err(|source| GeneratorError::Operation {
                operation: op.name.original.clone(),
                source,
            })?;

        let dispatch = indent(&synthesize::synthesize(&op.name.original, &classified, tables));

        // Envelope fields come from handled records only; the BTreeMap
        // both orders the struct deterministically and collapses records
        // that share a field.
        let mut fields: BTreeMap<String, String> = BTreeMap::new();
        for record in &classified {
            if let ClassifiedResponse::Typed(td) = record
                && td.is_handled(tables)
                && let Some(field) = td.envelope_field()
            {
                fields.insert(field, td.type_name.clone());
                if let Some(import) = td.family.go_import() {
                    imports.insert(import.to_string());
                }
                // Handled conditions test the Content-Type header.
                imports.insert("strings".to_string());
            }
        }

        op_contexts.push(context! {
            name => op.name.original.clone(),
            summary => op.summary.clone(),
            deprecated => op.deprecated,
            response_type => response_type_name(&op.name.pascal_case),
            fields => fields
                .iter()
                .map(|(name, type_name)| context! { name => name, type_name => type_name })
                .collect::<Vec<_>>(),
            has_dispatch => !dispatch.is_empty(),
            dispatch => dispatch,
        });
    }

    Ok(tmpl
        .render(context! {
            package => package,
            imports => imports.iter().collect::<Vec<_>>(),
            operations => op_contexts,
        })
        .expect("render should succeed"))
}

/// `<PascalOp>Response` — name of the generated envelope type.
pub fn response_type_name(pascal_op: &str) -> String {
    format!("{pascal_op}Response")
}

/// Indent a fragment one tab for embedding inside a function body.
fn indent(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for line in fragment.lines() {
        if !line.is_empty() {
            out.push('\t');
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_type_name() {
        assert_eq!(response_type_name("ListPets"), "ListPetsResponse");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("switch {\n}\n"), "\tswitch {\n\t}\n");
        assert_eq!(indent(""), "");
    }
}
