//! Placeholder substitution
//!
//! Templates contain fixed literal tokens (`ControllerName`, `ModelPath`,
//! `DATA_LIST`, ...). Rendering is a single left-to-right pass over the
//! template: at each point the earliest-occurring token is replaced and
//! scanning resumes after the replacement, so replacement values are never
//! themselves rescanned and the order of pairs in the map cannot change the
//! result. The token set must be mutually non-substring.

/// Replace every occurrence of each token with its value, in one pass.
///
/// Exact, case-sensitive, non-overlapping literal replacement.
#[must_use]
pub fn render(template: &str, tokens: &[(&str, String)]) -> String {
    debug_assert!(
        tokens_are_disjoint(tokens),
        "token set contains a token that is a substring of another"
    );

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let earliest = tokens
            .iter()
            .filter_map(|(token, value)| {
                rest.find(token).map(|at| (at, *token, value.as_str()))
            })
            .min_by_key(|(at, _, _)| *at);

        match earliest {
            Some((at, token, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + token.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// No token may be a substring of another; this is what makes the
/// substitution order-independent.
fn tokens_are_disjoint(tokens: &[(&str, String)]) -> bool {
    tokens.iter().enumerate().all(|(i, (a, _))| {
        tokens
            .iter()
            .enumerate()
            .all(|(j, (b, _))| i == j || !a.contains(b))
    })
}

/// Format the field list for the resource template.
///
/// The resource always exposes an identifier field: a non-empty list gets
/// `id` prepended unless already present. Rendered as single-quoted,
/// comma-separated identifiers; an empty list renders the empty string.
#[must_use]
pub fn resource_field_list(fields: &[String]) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let mut fields: Vec<&str> = fields.iter().map(String::as_str).collect();
    if !fields.contains(&"id") {
        fields.insert(0, "id");
    }
    quote_join(&fields)
}

/// Format the field list for the repository template.
///
/// The persistence layer manages identifiers itself: the first element
/// equal to `id` is removed before rendering.
#[must_use]
pub fn repository_field_list(fields: &[String]) -> String {
    let mut fields: Vec<&str> = fields.iter().map(String::as_str).collect();
    if let Some(at) = fields.iter().position(|field| *field == "id") {
        fields.remove(at);
    }
    if fields.is_empty() {
        return String::new();
    }
    quote_join(&fields)
}

fn quote_join(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("'{field}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
