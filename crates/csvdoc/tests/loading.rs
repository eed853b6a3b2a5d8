use std::io::{Cursor, Write};

use csvdoc::{Document, Error, Options, parse_file, parse_reader};
use tempfile::NamedTempFile;

#[test]
fn parse_file_reads_whole_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "id,text\n1,\"multi\nline\"\n2,plain\n")?;

    let doc = parse_file(tmp.path(), &Options::default(), true)?;
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get(0)?.get_by_name("text")?, Some("multi\nline"));
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let mut doc = Document::new();
    let err = doc
        .parse_file("/definitely/not/here.csv", true)
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn parse_reader_matches_parse_str() -> Result<(), Box<dyn std::error::Error>> {
    let input = "a,b\n\"x,y\",z\n";
    let from_reader = parse_reader(Cursor::new(input), &Options::default(), true)?;
    let from_str = csvdoc::parse_str(input, &Options::default(), true)?;
    assert_eq!(from_reader.to_array(), from_str.to_array());
    Ok(())
}
