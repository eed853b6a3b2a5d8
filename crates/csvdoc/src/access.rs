//! Accessor protocols shared by [`Row`](crate::Row),
//! [`Header`](crate::Header) and [`Document`](crate::Document).

use crate::error::{Error, Result};

/// A dynamically shaped lookup key.
///
/// Typed callers use the `usize` accessors directly. `Key` exists for
/// callers that route untrusted keys (user input, deserialized paths) into
/// positional lookups: only positions and canonical decimal labels address a
/// slot, anything else is rejected with [`Error::InvalidKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Label(&'a str),
    Missing,
    List(&'a [Key<'a>]),
}

impl Key<'_> {
    /// Resolve the key to a position.
    pub fn position(&self) -> Result<usize> {
        match *self {
            Key::Index(index) => Ok(index),
            Key::Label(label) => parse_position(label)
                .ok_or_else(|| Error::InvalidKey(format!("\"{label}\" is not a position"))),
            Key::Missing => Err(Error::InvalidKey(
                "key must be either a string or an integer, nothing given".to_string(),
            )),
            Key::List(items) => Err(Error::InvalidKey(format!(
                "key must be either a string or an integer, list of {} given",
                items.len()
            ))),
        }
    }
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(label: &'a str) -> Self {
        Key::Label(label)
    }
}

impl From<Option<usize>> for Key<'_> {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Key::Missing, Key::Index)
    }
}

impl<'a> From<&'a [Key<'a>]> for Key<'a> {
    fn from(items: &'a [Key<'a>]) -> Self {
        Key::List(items)
    }
}

/// Canonical decimal only: `"0"`, `"17"`; not `"07"`, `"+1"` or `" 1"`.
fn parse_position(label: &str) -> Option<usize> {
    let bytes = label.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    label.parse().ok()
}

/// Keyed access with validation of the key shape.
pub trait IndexedAccess {
    type Item;

    fn get_key(&self, key: Key<'_>) -> Result<&Self::Item>;

    fn exists_key(&self, key: Key<'_>) -> Result<bool>;

    fn set_key(&mut self, key: Key<'_>, value: Self::Item) -> Result<()>;

    /// Removing an absent position is a no-op.
    fn remove_key(&mut self, key: Key<'_>) -> Result<()>;
}

pub trait SizedContainer {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered, restartable iteration over the current values.
pub trait SequentialIterable {
    type Item;

    fn iter(&self) -> impl Iterator<Item = &Self::Item>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("0"), Some(0));
        assert_eq!(parse_position("12"), Some(12));

        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("07"), None); // leading zero
        assert_eq!(parse_position("-1"), None);
        assert_eq!(parse_position("x"), None);
        assert_eq!(parse_position(" 1"), None);
    }

    #[test]
    fn test_key_shapes() {
        assert_eq!(Key::from(3usize).position().unwrap(), 3);
        assert_eq!(Key::from("3").position().unwrap(), 3);
        assert!(matches!(Key::from(None::<usize>).position(), Err(Error::InvalidKey(_))));
        let list = [Key::Index(0), Key::Index(1)];
        assert!(matches!(Key::from(&list[..]).position(), Err(Error::InvalidKey(_))));
    }
}
