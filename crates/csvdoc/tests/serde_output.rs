#![cfg(feature = "serde")]
use serde_json::json;

use csvdoc::{Options, parse_str};

#[test]
fn document_serializes_as_nested_arrays() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_str("a,b\n1,\"2,3\"\n4,5\n", &Options::default(), true)?;
    let value = serde_json::to_value(&doc)?;
    assert_eq!(value, json!([["1", "2,3"], ["4", "5"]]));

    let header = doc.header().expect("header parsed");
    assert_eq!(serde_json::to_value(&**header)?, json!(["a", "b"]));
    Ok(())
}

#[test]
fn options_deserialize_with_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let options: Options = serde_json::from_str(r#"{"delimiter": ";", "line_delimiter": "\r\n"}"#)?;
    assert_eq!(options.delimiter, ';');
    assert_eq!(options.line_delimiter, "\r\n");
    assert_eq!(options.enclosure, '"');
    assert_eq!(options.input_encoding, "utf8");

    let back = serde_json::to_value(&options)?;
    assert_eq!(back["escape"], json!("\\"));
    Ok(())
}
