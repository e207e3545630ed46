//! Helpers for building record filter formulas such as `AND({Name}='x',{City}='y')`.
//!
//! Values go through [`escape_value`]; field names are placed inside the braces
//! as given.

use super::util::{escape_value, RawValue};

/// Build a `{field}='value'` clause, or `None` when the value is absent.
pub fn field_equals(field: &str, value: impl Into<RawValue>) -> Option<String> {
    escape_value(value).map(|escaped| format!("{{{}}}='{}'", field, escaped))
}

/// Join clauses with `AND(...)`, skipping absent ones.
pub fn all_of<I>(clauses: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    combine("AND", clauses)
}

/// Join clauses with `OR(...)`, skipping absent ones.
pub fn any_of<I>(clauses: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    combine("OR", clauses)
}

fn combine<I>(op: &str, clauses: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut present: Vec<String> = clauses.into_iter().flatten().collect();
    match present.len() {
        0 => None,
        1 => present.pop(),
        _ => Some(format!("{}({})", op, present.join(","))),
    }
}
