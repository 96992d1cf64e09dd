//! Diagnostic token-layout rendering.
//!
//! Renders the full token sequence as brace-indented lines, purely for
//! diagnostics. The rendering is a function of the whole sequence, not of
//! how far validation progressed, and is never an input to validation.

use crate::lexer::tokens::{Token, TokenKind};

const INDENT: &str = "    ";

/// Renders the token sequence up to (not including) EOF.
///
/// One line per statement-terminating `;` and per brace: `{` flushes the
/// buffered tokens and indents, `}` flushes and outdents, `;` joins the
/// buffered line. All other tokens append their text, space-separated.
pub fn render_layout(tokens: &[Token]) -> String {
    let mut indent: usize = 0;
    let mut layout: Vec<String> = Vec::new();
    let mut current_line: Vec<String> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::EOF => break,
            TokenKind::OpenCurly => {
                flush(&mut layout, &mut current_line, indent);
                layout.push(format!("{}{{", INDENT.repeat(indent)));
                indent += 1;
            }
            TokenKind::CloseCurly => {
                flush(&mut layout, &mut current_line, indent);
                indent = indent.saturating_sub(1);
                layout.push(format!("{}}}", INDENT.repeat(indent)));
            }
            TokenKind::Semicolon => {
                current_line.push(String::from(";"));
                flush(&mut layout, &mut current_line, indent);
            }
            _ => current_line.push(token.value.clone()),
        }
    }

    // Tokens buffered after the final brace or semicolon are dropped, as in
    // the original layout: lines are only emitted at `;`, `{` and `}`.
    layout.join("\n")
}

fn flush(layout: &mut Vec<String>, current_line: &mut Vec<String>, indent: usize) {
    if !current_line.is_empty() {
        layout.push(format!("{}{}", INDENT.repeat(indent), current_line.join(" ")));
        current_line.clear();
    }
}
