// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Message Formatting** - *Diagnostic text for domain errors*
//!
//! Builds message templates holding a single [`PLACEHOLDER`] for the offending
//! value, and renders them once a value is known.
//!
//! Templates are only built on the failure path; a passing check allocates nothing.

use core::any::type_name;
use core::fmt::{Display, Write};

use crate::config::{MESSAGE_PREFIX, PLACEHOLDER};

/// Template for a named parameter: `"<name> is %1%, <requirement>"`.
///
/// With an index the parameter is qualified as `name[index]`, which is how
/// elementwise checks report the offending element.
pub fn param_template(name: &str, index: Option<usize>, requirement: impl Display) -> String {
    match index {
        Some(i) => format!("{name}[{i}] is {PLACEHOLDER}, {requirement}"),
        None => format!("{name} is {PLACEHOLDER}, {requirement}"),
    }
}

/// Replaces every placeholder in `template` with `value`.
pub fn substitute<V: Display>(template: &str, value: V) -> String {
    template.replace(PLACEHOLDER, &value.to_string())
}

/// Replaces a placeholder in a function name with the type name of `V`.
///
/// Function names without a placeholder are returned unchanged.
pub fn qualify_function<V>(function: &str) -> String {
    if function.contains(PLACEHOLDER) {
        function.replace(PLACEHOLDER, short_type_name::<V>())
    } else {
        function.to_owned()
    }
}

/// Full diagnostic line: `"Error in function <function>: <message>"`.
pub fn render<V: Display>(function: &str, template: &str, value: V) -> String {
    format!(
        "{MESSAGE_PREFIX}{}: {}",
        qualify_function::<V>(function),
        substitute(template, value)
    )
}

/// Dumps a row-major matrix, one row per line and entries separated by a space.
pub fn format_matrix<T: Display>(rows: &[&[T]]) -> String {
    let mut out = String::new();
    for (r, row) in rows.iter().enumerate() {
        if r > 0 {
            out.push('\n');
        }
        for (c, v) in row.iter().enumerate() {
            if c > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{v}");
        }
    }
    out
}

#[inline]
fn short_type_name<V>() -> &'static str {
    let full = type_name::<V>();
    full.rsplit("::").next().unwrap_or(full)
}
