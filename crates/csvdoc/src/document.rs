use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::access::{IndexedAccess, Key, SequentialIterable, SizedContainer};
use crate::encoding;
use crate::error::{Error, Result};
use crate::header::Header;
use crate::options::Options;
use crate::row::Row;
use crate::shield::shield;
use crate::slots::{Slots, Values};
use crate::tokenize;
use crate::unquote::unquote_line;

/// A parsed table: an optional header and the rows below it.
///
/// Every row holds the same `Arc<Header>` as the document. Parsing is
/// lenient and never fails on malformed quoting; accessors are strict and
/// report bad positions, keys and column names.
#[derive(Debug, Clone, Default)]
pub struct Document {
    options: Options,
    header: Option<Arc<Header>>,
    rows: Slots<Row>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub fn delimiter(&self) -> char {
        self.options.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: char) {
        self.options.delimiter = delimiter;
    }

    pub fn enclosure(&self) -> char {
        self.options.enclosure
    }

    pub fn set_enclosure(&mut self, enclosure: char) {
        self.options.enclosure = enclosure;
    }

    pub fn escape(&self) -> char {
        self.options.escape
    }

    pub fn set_escape(&mut self, escape: char) {
        self.options.escape = escape;
    }

    pub fn line_delimiter(&self) -> &str {
        &self.options.line_delimiter
    }

    pub fn set_line_delimiter(&mut self, line_delimiter: impl Into<String>) {
        self.options.line_delimiter = line_delimiter.into();
    }

    pub fn input_encoding(&self) -> &str {
        &self.options.input_encoding
    }

    pub fn set_input_encoding(&mut self, label: impl Into<String>) {
        self.options.input_encoding = label.into();
    }

    pub fn output_encoding(&self) -> &str {
        &self.options.output_encoding
    }

    pub fn set_output_encoding(&mut self, label: impl Into<String>) {
        self.options.output_encoding = label.into();
    }

    /// Parse `input`, replacing any previous content.
    ///
    /// With `with_header` the first line becomes the header, even when it is
    /// empty. Empty lines after it are skipped. Only decoding can fail; on
    /// error the document is left untouched.
    #[instrument(level = "debug", skip_all, fields(bytes = input.len(), with_header = with_header))]
    pub fn parse(&mut self, input: &[u8], with_header: bool) -> Result<()> {
        let text = encoding::decode(
            input,
            &self.options.input_encoding,
            &self.options.output_encoding,
        )?;
        let shielded = shield(&text, &self.options);
        let mut lines = tokenize::lines(&shielded, &self.options.line_delimiter).into_iter();

        self.header = None;
        self.rows.clear();

        if with_header {
            if let Some(first) = lines.next() {
                let names = unquote_line(&first, &self.options);
                self.header = Some(Arc::new(Header::new(names)));
            }
        }

        let mut skipped = 0usize;
        for line in lines {
            if line.is_empty() {
                skipped += 1;
                continue;
            }
            let fields = unquote_line(&line, &self.options);
            self.rows.push(Row::new(fields, self.header.clone()));
        }

        debug!(
            rows = self.rows.len(),
            skipped,
            columns = self.header.as_ref().map(|h| h.len()),
            "parsed document"
        );
        Ok(())
    }

    pub fn parse_str(&mut self, text: &str, with_header: bool) -> Result<()> {
        self.parse(text.as_bytes(), with_header)
    }

    pub fn parse_reader<R: Read>(&mut self, mut reader: R, with_header: bool) -> Result<()> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.parse(&buf, with_header)
    }

    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P, with_header: bool) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading file");
        let buf = std::fs::read(path)?;
        self.parse(&buf, with_header)
    }

    pub fn header(&self) -> Option<&Arc<Header>> {
        self.header.as_ref()
    }

    pub fn get(&self, index: usize) -> Result<&Row> {
        self.rows
            .get(index)
            .ok_or(Error::OutOfRange { what: "row", key: index })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Row> {
        self.rows
            .get_mut(index)
            .ok_or(Error::OutOfRange { what: "row", key: index })
    }

    pub fn exists(&self, index: usize) -> bool {
        self.rows.contains(index)
    }

    pub fn remove(&mut self, index: usize) {
        self.rows.remove(index);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> Rows<'_> {
        Rows {
            values: self.rows.values(),
        }
    }

    /// Data rows in order, header excluded. Same as [`Document::iter`].
    pub fn rows(&self) -> Rows<'_> {
        self.iter()
    }

    /// Every row's values, header excluded.
    pub fn to_array(&self) -> Vec<Vec<String>> {
        self.rows.values().map(Row::to_array).collect()
    }
}

impl IndexedAccess for Document {
    type Item = Row;

    fn get_key(&self, key: Key<'_>) -> Result<&Row> {
        self.get(key.position()?)
    }

    fn exists_key(&self, key: Key<'_>) -> Result<bool> {
        Ok(self.exists(key.position()?))
    }

    /// Rows only change through parsing.
    fn set_key(&mut self, _key: Key<'_>, _value: Row) -> Result<()> {
        Err(Error::UnsupportedOperation("assigning rows by index"))
    }

    fn remove_key(&mut self, key: Key<'_>) -> Result<()> {
        self.remove(key.position()?);
        Ok(())
    }
}

impl SizedContainer for Document {
    fn len(&self) -> usize {
        self.rows.len()
    }
}

impl SequentialIterable for Document {
    type Item = Row;

    fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }
}

#[derive(Debug, Clone)]
pub struct Rows<'a> {
    values: Values<'a, Row>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a Row;

    fn next(&mut self) -> Option<&'a Row> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Row;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Rows<'a> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Document {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.values())
    }
}
