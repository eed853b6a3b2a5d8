#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use csvdoc::{Options, parse_str};

#[derive(Arbitrary, Debug)]
struct Input {
    delimiter: char,
    enclosure: char,
    escape: char,
    crlf: bool,
    with_header: bool,
    text: String,
}

fuzz_target!(|input: Input| {
    let options = Options::default()
        .with_delimiter(input.delimiter)
        .with_enclosure(input.enclosure)
        .with_escape(input.escape)
        .with_line_delimiter(if input.crlf { "\r\n" } else { "\n" });
    // lenient parsing: arbitrary text with any configuration never fails
    let doc = parse_str(&input.text, &options, input.with_header).expect("utf8 text parses");
    for row in doc.iter() {
        assert!(!row.is_empty());
    }
});
