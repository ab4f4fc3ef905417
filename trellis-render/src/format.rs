//! Best-effort source formatting.
//!
//! Formatting is a cosmetic step that must never fail a generation: the
//! renderer runs every output through a [`Formatter`] and falls back to the
//! unformatted content with a warning when the formatter refuses.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unbalanced '{delimiter}' at line {line}")]
    Unbalanced { delimiter: char, line: usize },
    #[error("unterminated string literal starting at line {line}")]
    UnterminatedString { line: usize },
}

/// A formatter capability: takes source text, returns formatted source
/// text. Callers treat failures as advisory, never fatal.
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Whitespace normalizer for generated JavaScript/JSX.
///
/// Trims trailing spaces, drops the leading blank lines left behind by
/// side-effect-only template helper calls, collapses runs of blank lines,
/// and guarantees a single trailing newline. Refuses input whose brackets
/// don't balance outside string literals; the renderer then keeps the
/// content unformatted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceFormatter;

impl Formatter for SourceFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        check_balance(source)?;

        let mut lines: Vec<&str> = Vec::new();
        let mut previous_blank = false;
        for line in source.lines() {
            let trimmed = line.trim_end();
            let blank = trimmed.is_empty();
            if blank && (previous_blank || lines.is_empty()) {
                continue;
            }
            lines.push(trimmed);
            previous_blank = blank;
        }
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let mut formatted = lines.join("\n");
        formatted.push('\n');
        Ok(formatted)
    }
}

/// Verify that `()`, `{}`, and `[]` balance, ignoring characters inside
/// string literals.
fn check_balance(source: &str) -> Result<(), FormatError> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut string_delim: Option<(char, usize)> = None;
    let mut escaped = false;
    let mut line = 1;

    for c in source.chars() {
        if c == '\n' {
            line += 1;
        }
        if let Some((delim, _)) = string_delim {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == delim {
                string_delim = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => string_delim = Some((c, line)),
            '(' | '{' | '[' => stack.push((c, line)),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Some((open, _)) if open == expected => {}
                    _ => return Err(FormatError::Unbalanced { delimiter: c, line }),
                }
            }
            _ => {}
        }
    }

    if let Some((delim, line)) = stack.pop() {
        return Err(FormatError::Unbalanced {
            delimiter: delim,
            line,
        });
    }
    if let Some((_, line)) = string_delim {
        return Err(FormatError::UnterminatedString { line });
    }
    Ok(())
}
