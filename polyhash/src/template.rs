// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Rendering of benchmark description templates.
//!
//! A template is plain text in which every occurrence of the two character marker `{}` is replaced
//! by the elapsed time in seconds, formatted with [PRECISION] fractional digits. No other character
//! is special, so `%`, a lone `{` or a lone `}` are copied as they are. A template without a marker
//! is rendered unchanged by [render], while [render_strict] rejects it.

use crate::error::{PolyhashError, PolyhashResult};

/// The placeholder marker.
pub const PLACEHOLDER: &str = "{}";

/// Number of fractional digits of the substituted value.
pub const PRECISION: usize = 6;

/// Format a number of seconds the way it is substituted into a template.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.*}", PRECISION, seconds)
}

/// Number of markers in `template`. Markers do not overlap, so `{}}` holds one and `{{}}` one.
pub fn count_placeholders(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

/// Substitute `seconds` for every marker in `template`.
pub fn render(template: &str, seconds: f64) -> String {
    if count_placeholders(template) == 0 {
        return template.to_string();
    }
    let value = format_seconds(seconds);
    let mut output = String::with_capacity(template.len() + value.len());
    let mut pieces = template.split(PLACEHOLDER);
    if let Some(first) = pieces.next() {
        output.push_str(first);
    }
    for piece in pieces {
        output.push_str(&value);
        output.push_str(piece);
    }
    output
}

/// Like [render], but fails if `template` has no marker.
pub fn render_strict(template: &str, seconds: f64) -> PolyhashResult<String> {
    if count_placeholders(template) == 0 {
        return Err(PolyhashError::MissingPlaceholder);
    }
    Ok(render(template, seconds))
}
