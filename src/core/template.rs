//! Runtime message templates
//!
//! Templates use the same placeholder syntax as `format!`, restricted to
//! argument selection: `{}` takes the next sequential argument, `{N}` takes
//! argument `N`, and `{{` / `}}` produce literal braces. Format specs such as
//! `{:>8}` are not supported.
//!
//! Templates known at compile time should go through the `log!` macros
//! instead, which are checked by the compiler.

use super::error::{LoggerError, Result};
use std::fmt::{Display, Write};

/// Render `template` against `args`
///
/// Fails on unbalanced braces, on placeholder contents other than an index,
/// and on any placeholder referring past the end of `args`. Extra arguments
/// are ignored.
///
/// # Examples
///
/// ```
/// use leveled_logger::core::template::render;
///
/// let msg = render("{0} failed with code {1}", &[&"job42", &7]).unwrap();
/// assert_eq!(msg, "job42 failed with code 7");
///
/// assert!(render("{2}", &[&1]).is_err());
/// ```
pub fn render(template: &str, args: &[&dyn Display]) -> Result<String> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next_sequential = 0usize;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, c)| c == '{').is_some() {
                    out.push('{');
                    continue;
                }

                let mut spec = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    spec.push(c);
                }
                if !closed {
                    return Err(LoggerError::template(
                        template,
                        format!("unclosed placeholder at byte {}", pos),
                    ));
                }

                let index = if spec.is_empty() {
                    let index = next_sequential;
                    next_sequential += 1;
                    index
                } else {
                    spec.trim().parse::<usize>().map_err(|_| {
                        LoggerError::template(
                            template,
                            format!("unsupported placeholder '{{{}}}'", spec),
                        )
                    })?
                };

                let arg = args.get(index).ok_or_else(|| {
                    LoggerError::template(
                        template,
                        format!(
                            "argument index {} out of range ({} given)",
                            index,
                            args.len()
                        ),
                    )
                })?;
                // Writing into a String cannot fail
                let _ = write!(out, "{}", arg);
            }
            '}' => {
                if chars.next_if(|&(_, c)| c == '}').is_some() {
                    out.push('}');
                } else {
                    return Err(LoggerError::template(
                        template,
                        format!("unmatched '}}' at byte {}", pos),
                    ));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
