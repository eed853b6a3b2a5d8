//! Structural split of shielded text into lines and raw field tokens.

use crate::shield::{Piece, Shielded};

/// A run of shielded pieces: either a whole line or a single field token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment<'a> {
    pieces: Vec<Piece<'a>>,
}

pub type Line<'a> = Segment<'a>;
pub type Token<'a> = Segment<'a>;

impl<'a> Segment<'a> {
    pub fn pieces(&self) -> &[Piece<'a>] {
        &self.pieces
    }

    /// Empty lines produce no row.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl<'a> From<Vec<Piece<'a>>> for Segment<'a> {
    fn from(pieces: Vec<Piece<'a>>) -> Self {
        let pieces = pieces
            .into_iter()
            .filter(|p| !matches!(p, Piece::Text("")))
            .collect();
        Segment { pieces }
    }
}

/// Split on every line delimiter left visible by the shield.
///
/// Like a plain string split this always yields at least one line, and a
/// trailing line delimiter yields a trailing empty line.
pub fn lines<'a>(shielded: &Shielded<'a>, line_delimiter: &str) -> Vec<Line<'a>> {
    split(shielded.pieces(), line_delimiter)
}

/// Split a line into raw field tokens, one per position.
pub fn fields<'a>(line: &Line<'a>, delimiter: char) -> Vec<Token<'a>> {
    let mut buf = [0u8; 4];
    split(line.pieces(), delimiter.encode_utf8(&mut buf))
}

fn split<'a>(pieces: &[Piece<'a>], separator: &str) -> Vec<Segment<'a>> {
    let mut parts = Vec::new();
    let mut current = Vec::new();
    for piece in pieces {
        match *piece {
            Piece::Guard(_) => current.push(*piece),
            Piece::Text(text) if separator.is_empty() => push_text(&mut current, text),
            Piece::Text(text) => {
                let mut chunks = text.split(separator);
                if let Some(first) = chunks.next() {
                    push_text(&mut current, first);
                }
                for chunk in chunks {
                    parts.push(Segment {
                        pieces: std::mem::take(&mut current),
                    });
                    push_text(&mut current, chunk);
                }
            }
        }
    }
    parts.push(Segment { pieces: current });
    parts
}

#[inline]
fn push_text<'a>(current: &mut Vec<Piece<'a>>, text: &'a str) {
    if !text.is_empty() {
        current.push(Piece::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::shield::{Guard, shield};

    #[test]
    fn test_lines_keep_trailing_empty_line() {
        let options = Options::default();
        let shielded = shield("a,b\n\nc\n", &options);
        let lines = lines(&shielded, "\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].pieces(), &[Piece::Text("a,b")]);
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].pieces(), &[Piece::Text("c")]);
        assert!(lines[3].is_empty());
    }

    #[test]
    fn test_empty_input_is_one_empty_line() {
        let options = Options::default();
        let shielded = shield("", &options);
        let lines = lines(&shielded, "\n");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn test_fields_preserve_empty_positions() {
        let options = Options::default();
        let shielded = shield("a,,b,", &options);
        let lines = lines(&shielded, "\n");
        let tokens = fields(&lines[0], ',');
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].pieces(), &[Piece::Text("a")]);
        assert!(tokens[1].is_empty());
        assert_eq!(tokens[2].pieces(), &[Piece::Text("b")]);
        assert!(tokens[3].is_empty());
    }

    #[test]
    fn test_guards_do_not_split() {
        let options = Options::default();
        let shielded = shield("\"x,y\",z\n\"1\n2\",3", &options);
        let lines = lines(&shielded, "\n");
        assert_eq!(lines.len(), 2);
        let tokens = fields(&lines[1], ',');
        assert_eq!(tokens.len(), 2);
        assert_eq!(
            tokens[0].pieces(),
            &[
                Piece::Text("\"1"),
                Piece::Guard(Guard::LineDelimiter),
                Piece::Text("2\"")
            ]
        );
        assert_eq!(tokens[1].pieces(), &[Piece::Text("3")]);
    }
}
