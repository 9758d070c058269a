//! Positional message formatting
//!
//! Templates use `{0}`, `{1}`, ... placeholders substituted by argument
//! position. `{{` and `}}` produce literal braces. Any other brace text
//! (`{name}`, `{}`, a lone `}`) is copied through unchanged.
//!
//! Formatting never fails the caller. [`try_format`] reports placeholders
//! that had no argument, [`format`] degrades to the partially substituted
//! text plus a visible marker.

use logfacade_errors::{LogError, Result};
use std::fmt::{Display, Write};

/// Substitute positional placeholders, reporting unresolved ones
///
/// Surplus arguments are ignored. On mismatch the returned
/// [`LogError::FormatMismatch`] carries the best-effort text with each
/// unresolved placeholder left literal.
///
/// # Errors
///
/// Returns [`LogError::FormatMismatch`] if any placeholder index is out of
/// range for `args`.
///
/// # Example
///
/// ```
/// use logfacade_core::try_format;
///
/// let text = try_format("testing {0} {1}", &[&"X", &"Y"]).unwrap();
/// assert_eq!(text, "testing X Y");
/// ```
pub fn try_format(template: &str, args: &[&dyn Display]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut unresolved = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }

        if let Some((index, len)) = placeholder(tail) {
            match args.get(index) {
                Some(arg) => {
                    // A Display impl reporting an error leaves whatever it wrote so far
                    let _ = write!(out, "{}", arg);
                }
                None => {
                    unresolved += 1;
                    out.push_str(&tail[..len]);
                }
            }
            rest = &tail[len..];
            continue;
        }

        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }
    out.push_str(rest);

    if unresolved == 0 {
        Ok(out)
    } else {
        Err(LogError::FormatMismatch {
            partial: out,
            unresolved,
        })
    }
}

/// Substitute positional placeholders, never failing
///
/// When placeholders are left unresolved the text is suffixed with
/// ` [unresolved placeholders: N]` so the degradation is visible in output.
pub fn format(template: &str, args: &[&dyn Display]) -> String {
    match try_format(template, args) {
        Ok(text) => text,
        Err(LogError::FormatMismatch {
            partial,
            unresolved,
        }) => format!("{} [unresolved placeholders: {}]", partial, unresolved),
        Err(_) => template.to_string(),
    }
}

/// Parse `{N}` at the start of `s`, returning the index and the byte length
fn placeholder(s: &str) -> Option<(usize, usize)> {
    let inner = s.strip_prefix('{')?;
    let end = inner.find('}')?;
    let digits = &inner[..end];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse().ok()?;
    Some((index, end + 2))
}
