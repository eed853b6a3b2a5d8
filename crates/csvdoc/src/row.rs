use std::sync::Arc;

use tracing::trace;

use crate::access::{IndexedAccess, Key, SequentialIterable, SizedContainer};
use crate::error::{Error, Result};
use crate::header::Header;
use crate::slots::{Slots, Values};

/// One parsed line: field values by position, and by column name when a
/// header was parsed.
///
/// Positions are stable: removing a field leaves a hole instead of shifting
/// the fields after it, so `row.get(header.index_of(name)?)` and
/// `row.get_by_name(name)` keep agreeing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Slots<String>,
    header: Option<Arc<Header>>,
}

impl Row {
    pub fn new(fields: Vec<String>, header: Option<Arc<Header>>) -> Self {
        Self {
            fields: Slots::from(fields),
            header,
        }
    }

    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(fields.into_iter().map(Into::into).collect(), None)
    }

    pub fn header(&self) -> Option<&Arc<Header>> {
        self.header.as_ref()
    }

    pub fn get(&self, index: usize) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(Error::OutOfRange { what: "column", key: index })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut String> {
        self.fields
            .get_mut(index)
            .ok_or(Error::OutOfRange { what: "column", key: index })
    }

    /// Assign at `index`; positions past the end are padded with holes.
    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        self.fields.set(index, value.into());
    }

    pub fn exists(&self, index: usize) -> bool {
        self.fields.contains(index)
    }

    pub fn remove(&mut self, index: usize) {
        self.fields.remove(index);
    }

    /// Look a field up by column name.
    ///
    /// `Ok(None)` means the row has no header at all. An undeclared column is
    /// [`Error::NotFound`]; a declared column this row has no value for is
    /// [`Error::OutOfRange`].
    pub fn get_by_name(&self, name: &str) -> Result<Option<&str>> {
        match &self.header {
            Some(header) => {
                let index = header.index_of(name)?;
                self.get(index).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Assign by column name. Without a header the assignment is dropped.
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let Some(header) = &self.header else {
            trace!(column = name, "row has no header, ignoring assignment");
            return Ok(());
        };
        let index = header.index_of(name)?;
        self.set(index, value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Fields<'_> {
        Fields {
            values: self.fields.values(),
        }
    }

    /// Present fields with their positions.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.fields.entries().map(|(index, value)| (index, value.as_str()))
    }

    pub fn to_array(&self) -> Vec<String> {
        self.fields.values().cloned().collect()
    }
}

impl IndexedAccess for Row {
    type Item = String;

    fn get_key(&self, key: Key<'_>) -> Result<&String> {
        let index = key.position()?;
        self.fields
            .get(index)
            .ok_or(Error::OutOfRange { what: "column", key: index })
    }

    fn exists_key(&self, key: Key<'_>) -> Result<bool> {
        Ok(self.exists(key.position()?))
    }

    fn set_key(&mut self, key: Key<'_>, value: String) -> Result<()> {
        self.set(key.position()?, value);
        Ok(())
    }

    fn remove_key(&mut self, key: Key<'_>) -> Result<()> {
        self.remove(key.position()?);
        Ok(())
    }
}

impl SizedContainer for Row {
    fn len(&self) -> usize {
        self.fields.len()
    }
}

impl SequentialIterable for Row {
    type Item = String;

    fn iter(&self) -> impl Iterator<Item = &String> {
        self.fields.values()
    }
}

/// Present values of a [`Row`] (or [`Header`]) in position order.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    values: Values<'a, String>,
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.values.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a str;
    type IntoIter = Fields<'a>;

    fn into_iter(self) -> Fields<'a> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Row {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
