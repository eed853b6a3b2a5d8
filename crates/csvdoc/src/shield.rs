//! Quote-aware shielding of structural characters.
//!
//! Delimiters, line delimiters and `escape + enclosure` pairs that occur
//! inside an enclosed span are lifted out of the text into [`Guard`] pieces,
//! so the tokenizer can split the remaining [`Piece::Text`] runs naively.
//! Guards are out-of-band values, never text, and cannot collide with input.
//!
//! Enclosure characters are matched pairwise with no notion of nesting: an
//! enclosed span runs from one enclosure to the next, across line breaks,
//! and an unterminated span extends to the end of the input.

use tracing::trace;

use crate::options::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// `escape + enclosure` inside a span
    EscapedEnclosure,
    /// field delimiter inside a span
    Delimiter,
    /// line delimiter inside a span
    LineDelimiter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Raw input, never empty.
    Text(&'a str),
    Guard(Guard),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shielded<'a> {
    pieces: Vec<Piece<'a>>,
}

impl<'a> Shielded<'a> {
    pub fn pieces(&self) -> &[Piece<'a>] {
        &self.pieces
    }

    pub fn guard_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Guard(_)))
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    InQuote,
    /// Saw the escape character inside a span.
    AfterEscape,
}

struct Builder<'a> {
    text: &'a str,
    pieces: Vec<Piece<'a>>,
    run_start: usize,
}

impl<'a> Builder<'a> {
    fn guard(&mut self, start: usize, end: usize, guard: Guard) {
        let text = self.text;
        if start > self.run_start {
            self.pieces.push(Piece::Text(&text[self.run_start..start]));
        }
        self.pieces.push(Piece::Guard(guard));
        self.run_start = end;
    }

    fn finish(mut self) -> Shielded<'a> {
        let text = self.text;
        if self.run_start < text.len() {
            self.pieces.push(Piece::Text(&text[self.run_start..]));
        }
        Shielded {
            pieces: self.pieces,
        }
    }
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_enclosure(s: &str, enclosure: char) -> Option<usize> {
    let mut buf = [0u8; 4];
    let needle = enclosure.encode_utf8(&mut buf);
    memchr::memmem::find(s.as_bytes(), needle.as_bytes())
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_enclosure(s: &str, enclosure: char) -> Option<usize> {
    s.find(enclosure)
}

pub fn shield<'a>(text: &'a str, options: &Options) -> Shielded<'a> {
    let enclosure = options.enclosure;
    let escape = options.escape;
    let delimiter = options.delimiter;
    let line_delimiter = options.line_delimiter.as_str();

    let mut out = Builder {
        text,
        pieces: Vec::new(),
        run_start: 0,
    };
    let mut state = State::Unquoted;
    let mut pos = 0usize;

    while pos < text.len() {
        let rest = &text[pos..];
        match state {
            State::Unquoted => match find_enclosure(rest, enclosure) {
                Some(idx) => {
                    pos += idx + enclosure.len_utf8();
                    state = State::InQuote;
                }
                None => break,
            },
            State::InQuote => {
                let Some(ch) = rest.chars().next() else {
                    break;
                };
                if ch == escape {
                    state = State::AfterEscape;
                    pos += ch.len_utf8();
                } else if ch == enclosure {
                    state = State::Unquoted;
                    pos += ch.len_utf8();
                } else if !line_delimiter.is_empty() && rest.starts_with(line_delimiter) {
                    out.guard(pos, pos + line_delimiter.len(), Guard::LineDelimiter);
                    pos += line_delimiter.len();
                } else if ch == delimiter {
                    out.guard(pos, pos + ch.len_utf8(), Guard::Delimiter);
                    pos += ch.len_utf8();
                } else {
                    pos += ch.len_utf8();
                }
            }
            State::AfterEscape => {
                let Some(ch) = rest.chars().next() else {
                    break;
                };
                if ch == enclosure {
                    let start = pos - escape.len_utf8();
                    out.guard(start, pos + ch.len_utf8(), Guard::EscapedEnclosure);
                    pos += ch.len_utf8();
                    state = State::InQuote;
                } else if escape == enclosure {
                    // The escape was a closing enclosure after all; rescan `ch` outside the span.
                    state = State::Unquoted;
                } else if ch == escape {
                    // Escaped escape: both stay literal and cannot pair with a following enclosure.
                    pos += ch.len_utf8();
                    state = State::InQuote;
                } else {
                    // Lone escape stays literal; rescan `ch` inside the span.
                    state = State::InQuote;
                }
            }
        }
    }

    let shielded = out.finish();
    trace!(pieces = shielded.pieces.len(), guards = shielded.guard_count(), "shielded input");
    shielded
}
