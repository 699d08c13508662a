use std::collections::BTreeMap;

use super::classify::ClassifiedResponse;
use super::content_type::{ContentFamily, ContentTypeTables};
use super::status::{ResponseKey, Specificity};

/// Names the emitted fragment assumes in scope (see the parse-function
/// template): the raw body buffer, the `*http.Response`, and the
/// pre-declared envelope variable.
const STATUS_VAR: &str = "rsp.StatusCode";
const HEADER_EXPR: &str = "rsp.Header.Get(\"Content-Type\")";
const BODY_VAR: &str = "bodyBytes";
const ENVELOPE_VAR: &str = "response";

/// Evaluation bucket within a specificity tier: decodable clauses are
/// tested before fallthrough clauses, so an open-content or no-content
/// fallback never masks a decodable match of equal specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Bucket {
    Handled,
    Unhandled,
}

/// Composite clause sort key, compared field by field. The field order IS
/// the precedence contract: specificity tier first, then bucket, then
/// content-type family, then the response key itself. `default` keys sort
/// last by construction — their always-true condition would make every
/// later clause unreachable. Identical keys collapse to one clause, last
/// writer wins.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ClauseKey {
    specificity: Specificity,
    bucket: Bucket,
    family: Option<ContentFamily>,
    key: ResponseKey,
}

struct CaseClause {
    condition: String,
    body: String,
}

/// Synthesize the dispatch switch for one operation's classified records.
///
/// Returns the empty string when no clause is needed — callers treat that
/// as "no dispatch", not as failure, and must not emit an empty switch.
pub fn synthesize(
    op_name: &str,
    classified: &[ClassifiedResponse],
    tables: &ContentTypeTables,
) -> String {
    let mut clauses: BTreeMap<ClauseKey, CaseClause> = BTreeMap::new();

    for record in classified {
        match record {
            ClassifiedResponse::NoContent { key } => {
                clauses.insert(
                    ClauseKey {
                        specificity: key.specificity(),
                        bucket: Bucket::Unhandled,
                        family: None,
                        key: key.clone(),
                    },
                    CaseClause {
                        condition: key.match_expression(STATUS_VAR),
                        body: "break // No content-type".to_string(),
                    },
                );
            }
            ClassifiedResponse::Typed(td) => {
                // Re-derive the family from the record's own content type;
                // a record is only decodable when both agree.
                let family = tables.classify(&td.content_type);

                if td.is_handled(tables)
                    && let Some(token) = family.token()
                    && let Some(field) = td.envelope_field()
                {
                    let condition = format!(
                        "strings.Contains({HEADER_EXPR}, \"{token}\") && {}",
                        td.key.match_expression(STATUS_VAR)
                    );
                    let body = format!(
                        "var dest {}\nif err := {token}.Unmarshal({BODY_VAR}, &dest); err != nil {{\n\treturn nil, err\n}}\n{ENVELOPE_VAR}.{field} = &dest",
                        td.type_name
                    );
                    clauses.insert(
                        ClauseKey {
                            specificity: td.key.specificity(),
                            bucket: Bucket::Handled,
                            family: Some(family),
                            key: td.key.clone(),
                        },
                        CaseClause { condition, body },
                    );
                } else {
                    // Not decodable, but the status pattern must still be
                    // claimed so it cannot fall through to a less specific
                    // clause.
                    let body = if td.is_untyped() && family.token().is_some() {
                        "break // No concrete type to decode into".to_string()
                    } else {
                        format!("// Content-type ({}) unsupported", td.content_type)
                    };
                    clauses.insert(
                        ClauseKey {
                            specificity: td.key.specificity(),
                            bucket: Bucket::Unhandled,
                            family: Some(family),
                            key: td.key.clone(),
                        },
                        CaseClause {
                            condition: td.key.match_expression(STATUS_VAR),
                            body,
                        },
                    );
                }
            }
        }
    }

    if clauses.is_empty() {
        return String::new();
    }

    let mut out = String::from("switch {\n");
    for clause in clauses.values() {
        out.push_str("case ");
        out.push_str(&clause.condition);
        out.push_str(":\n");
        for line in clause.body.lines() {
            out.push('\t');
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("}\n");

    log::debug!("synthesized {} dispatch clauses for {op_name}", clauses.len());
    out
}
