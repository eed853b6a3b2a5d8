//! Turning raw field tokens into literal field values.

use crate::options::Options;
use crate::shield::{Guard, Piece};
use crate::tokenize::{self, Line, Segment, Token};

/// Unquote one raw token.
///
/// 1. A token that starts and ends with the enclosure is replaced by what
///    lies strictly between its first and last character. This is a single
///    unwrap, not a span match: `"a"b"` becomes `a"b`.
/// 2. Every run of consecutive enclosures collapses to one (`""` to `"`).
/// 3. Guards are restored to the characters they stand for; an escaped
///    enclosure comes back as `escape + enclosure`.
pub fn unquote(token: &Token<'_>, options: &Options) -> String {
    let enclosure = options.enclosure;
    let pieces = unwrap(token.pieces(), enclosure);

    let mut out = String::new();
    let mut in_run = false;
    for piece in &pieces {
        match *piece {
            Piece::Text(text) => {
                for ch in text.chars() {
                    if ch == enclosure {
                        if !in_run {
                            out.push(ch);
                        }
                        in_run = true;
                    } else {
                        out.push(ch);
                        in_run = false;
                    }
                }
            }
            Piece::Guard(guard) => {
                restore(&mut out, guard, options);
                in_run = false;
            }
        }
    }
    out
}

/// Unquote a plain value that never went through the shield.
pub fn unquote_str(value: &str, options: &Options) -> String {
    unquote(&Segment::from(vec![Piece::Text(value)]), options)
}

/// Split a line into fields and unquote each of them.
pub fn unquote_line(line: &Line<'_>, options: &Options) -> Vec<String> {
    tokenize::fields(line, options.delimiter)
        .iter()
        .map(|token| unquote(token, options))
        .collect()
}

fn unwrap<'a>(pieces: &[Piece<'a>], enclosure: char) -> Vec<Piece<'a>> {
    let (Some(&Piece::Text(first)), Some(&Piece::Text(last))) = (pieces.first(), pieces.last()) else {
        return pieces.to_vec();
    };
    if !first.starts_with(enclosure) || !last.ends_with(enclosure) {
        return pieces.to_vec();
    }

    let width = enclosure.len_utf8();
    if pieces.len() == 1 {
        // a lone enclosure has nothing between its first and last character
        let inner = first.get(width..first.len().saturating_sub(width)).unwrap_or("");
        return text_piece(inner).into_iter().collect();
    }

    let mut out = Vec::with_capacity(pieces.len());
    out.extend(text_piece(&first[width..]));
    out.extend_from_slice(&pieces[1..pieces.len() - 1]);
    out.extend(text_piece(&last[..last.len() - width]));
    out
}

fn text_piece(text: &str) -> Option<Piece<'_>> {
    (!text.is_empty()).then_some(Piece::Text(text))
}

fn restore(out: &mut String, guard: Guard, options: &Options) {
    match guard {
        Guard::Delimiter => out.push(options.delimiter),
        Guard::EscapedEnclosure => {
            out.push(options.escape);
            out.push(options.enclosure);
        }
        Guard::LineDelimiter => out.push_str(&options.line_delimiter),
    }
}
