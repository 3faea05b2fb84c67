//! Sanitization of pasted text before it enters the single-line search field.
//!
//! Bracketed paste delivers arbitrary clipboard content. Escape sequences would
//! be echoed back to the terminal when the field is rendered, and line breaks
//! have no meaning in a one-line input.

use std::borrow::Cow;
use std::iter::Peekable;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Make `input` safe to insert into the search field.
///
/// - ANSI escape sequences (CSI, OSC, two-byte) are removed.
/// - `\r\n`, `\n`, `\r` and `\t` become a single space each.
/// - Remaining C0/C1 control characters and DEL are dropped.
///
/// Returns `Cow::Borrowed` when nothing needs changing.
#[must_use]
pub fn sanitize_search_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_control) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape_sequence(&mut chars),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push(' ');
            }
            '\n' | '\t' => result.push(' '),
            '\u{009b}' => skip_csi_params(&mut chars),
            c if is_control(c) => {}
            c => result.push(c),
        }
    }

    Cow::Owned(result)
}

fn is_control(c: char) -> bool {
    c <= '\x1f' || c == '\x7f' || ('\u{0080}'..='\u{009f}').contains(&c)
}

fn skip_escape_sequence<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    match chars.peek() {
        Some('[') => {
            chars.next();
            skip_csi_params(chars);
        }
        Some(']') => {
            chars.next();
            skip_osc_sequence(chars);
        }
        Some('(' | ')' | '#') => {
            chars.next();
            chars.next();
        }
        Some('7' | '8' | 'c' | '=' | '>') => {
            chars.next();
        }
        _ => {}
    }
}

/// Skip CSI parameter and intermediate bytes plus the final byte.
fn skip_csi_params<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(&c) = chars.peek() {
        if ('\x40'..='\x7e').contains(&c) {
            chars.next();
            return;
        } else if ('\x20'..='\x3f').contains(&c) {
            chars.next();
        } else {
            return;
        }
    }
}

/// Skip an OSC body up to BEL or ST (`ESC \`).
fn skip_osc_sequence<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(c) = chars.next() {
        if c == BEL {
            return;
        }
        if c == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            return;
        }
    }
}
