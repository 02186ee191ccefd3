//! Report building blocks shared by several passes.

use std::fmt;

use serde::Serialize;

/// Error count for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCount {
    pub field: &'static str,
    pub errors: usize,
}

/// Per-field error tally with a titled, fixed-order rendering.
///
/// `total` always equals the sum of the per-field counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip)]
    title: &'static str,
    total: usize,
    fields: Vec<FieldCount>,
}

impl FieldErrors {
    pub fn new(title: &'static str, fields: &[&'static str]) -> Self {
        Self {
            title,
            total: 0,
            fields: fields
                .iter()
                .map(|&field| FieldCount { field, errors: 0 })
                .collect(),
        }
    }

    /// Count one error against `field`. Unknown fields are ignored.
    pub fn add(&mut self, field: &str) {
        if let Some(entry) = self.fields.iter_mut().find(|entry| entry.field == field) {
            entry.errors += 1;
            self.total += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn fields(&self) -> &[FieldCount] {
        &self.fields
    }

    pub fn errors_for(&self, field: &str) -> Option<usize> {
        self.fields
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.errors)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} errors", self.title, self.total)?;
        for entry in &self.fields {
            write!(f, "\n{}: {}", entry.field, entry.errors)?;
        }
        Ok(())
    }
}

/// Render names as `['A', 'B']`
pub fn quoted_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| quote_name(name)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quote a name the way list literals print strings: single quotes unless
/// the name holds a `'` and no `"`, with backslashes and the active quote
/// character escaped.
fn quote_name(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push(quote);
    for ch in name.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}
