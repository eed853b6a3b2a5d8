#![doc = include_str!("../README.md")]

pub mod access;
pub mod document;
pub mod encoding;
pub mod error;
pub mod header;
pub mod options;
pub mod row;
pub mod shield;
pub mod tokenize;
pub mod unquote;

mod slots;

pub use crate::access::{IndexedAccess, Key, SequentialIterable, SizedContainer};
pub use crate::document::Document;
pub use crate::error::{Error, Result};
pub use crate::header::Header;
pub use crate::options::Options;
pub use crate::row::Row;

use std::io::Read;
use std::path::Path;

pub fn parse_str(text: &str, options: &Options, with_header: bool) -> Result<Document> {
    let mut document = Document::with_options(options.clone());
    document.parse_str(text, with_header)?;
    Ok(document)
}

pub fn parse_reader<R: Read>(reader: R, options: &Options, with_header: bool) -> Result<Document> {
    let mut document = Document::with_options(options.clone());
    document.parse_reader(reader, with_header)?;
    Ok(document)
}

pub fn parse_file<P: AsRef<Path>>(path: P, options: &Options, with_header: bool) -> Result<Document> {
    let mut document = Document::with_options(options.clone());
    document.parse_file(path, with_header)?;
    Ok(document)
}
