//! Post-processing of rendered coefficient text.
//!
//! The printer renders squares as `pow(x, 2)`. Target compilers either lack
//! a fast path for that call or do not define it for the scalar type, so
//! squares of identifiers are rewritten to `x*x` once, here.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::CodegenError;

// A literal pattern; it either compiles on first use or never does.
static POW_SQUARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bpow\((\w+),\s*2\)").expect("pow-square pattern is valid"));

/// Rewrites every `pow(<identifier>, 2)` in `text` into `<identifier>*<identifier>`.
///
/// A square directly after `/` is parenthesised, so `a/pow(x, 2)` becomes
/// `a/(x*x)`. Text without the idiom is returned unchanged, and applying
/// the rewrite twice is the same as applying it once.
///
/// # Errors
///
/// Returns [`CodegenError::MalformedRenderedText`] if the parentheses in
/// `text` do not balance.
pub fn remove_pow(text: &str) -> Result<String, CodegenError> {
    check_balanced(text)?;

    let rewritten = POW_SQUARE.replace_all(text, |caps: &Captures<'_>| {
        let base = &caps[1];
        let start = caps.get(0).map_or(0, |m| m.start());
        if text[..start].ends_with('/') {
            format!("({base}*{base})")
        } else {
            format!("{base}*{base}")
        }
    });
    Ok(rewritten.into_owned())
}

fn check_balanced(text: &str) -> Result<(), CodegenError> {
    let malformed = |reason: &str| CodegenError::MalformedRenderedText {
        text: text.to_string(),
        reason: reason.to_string(),
    };

    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or_else(|| malformed("unmatched `)`"))?,
            _ => {}
        }
    }
    if depth > 0 {
        return Err(malformed("unclosed `(`"));
    }
    Ok(())
}
