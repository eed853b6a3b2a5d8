use crate::access::{IndexedAccess, Key, SequentialIterable, SizedContainer};
use crate::error::{Error, Result};
use crate::row::{Fields, Row};

/// The column names of a document.
///
/// A header is a row whose values are names. Rows share one header through
/// an `Arc` and only ever read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    row: Row,
}

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            row: Row::new(names, None),
        }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            row: Row::from_fields(names),
        }
    }

    /// Position of the first column called `name`.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.row
            .entries()
            .find_map(|(index, column)| (column == name).then_some(index))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn as_row(&self) -> &Row {
        &self.row
    }

    pub fn get(&self, index: usize) -> Result<&str> {
        self.row.get(index)
    }

    pub fn exists(&self, index: usize) -> bool {
        self.row.exists(index)
    }

    pub fn len(&self) -> usize {
        self.row.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn iter(&self) -> Fields<'_> {
        self.row.iter()
    }

    pub fn to_array(&self) -> Vec<String> {
        self.row.to_array()
    }
}

impl IndexedAccess for Header {
    type Item = String;

    fn get_key(&self, key: Key<'_>) -> Result<&String> {
        self.row.get_key(key)
    }

    fn exists_key(&self, key: Key<'_>) -> Result<bool> {
        self.row.exists_key(key)
    }

    fn set_key(&mut self, key: Key<'_>, value: String) -> Result<()> {
        self.row.set_key(key, value)
    }

    fn remove_key(&mut self, key: Key<'_>) -> Result<()> {
        self.row.remove_key(key)
    }
}

impl SizedContainer for Header {
    fn len(&self) -> usize {
        self.row.len()
    }
}

impl SequentialIterable for Header {
    type Item = String;

    fn iter(&self) -> impl Iterator<Item = &String> {
        SequentialIterable::iter(&self.row)
    }
}

impl<'a> IntoIterator for &'a Header {
    type Item = &'a str;
    type IntoIter = Fields<'a>;

    fn into_iter(self) -> Fields<'a> {
        self.row.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Header {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.row, serializer)
    }
}
