use csvdoc::unquote::unquote_str;
use csvdoc::{Options, parse_str};

fn rows(input: &str) -> Vec<Vec<String>> {
    parse_str(input, &Options::default(), false)
        .expect("utf8 input always parses")
        .to_array()
}

#[test]
fn quoted_delimiter_does_not_split() {
    assert_eq!(rows("\"x,y\",z"), vec![vec!["x,y", "z"]]);
}

#[test]
fn quoted_line_break_does_not_split() {
    assert_eq!(rows("\"line1\nline2\",b"), vec![vec!["line1\nline2", "b"]]);
}

#[test]
fn doubled_enclosure_collapses() {
    assert_eq!(rows(r#""He said ""hi""",b"#), vec![vec![r#"He said "hi""#, "b"]]);
}

#[test]
fn escaped_enclosure_is_kept_with_its_escape() {
    assert_eq!(rows(r#""say \"hi\", ok",b"#), vec![vec![r#"say \"hi\", ok"#, "b"]]);
}

#[test]
fn escaped_enclosure_at_end_of_field() {
    assert_eq!(rows(r#""a\"",b"#), vec![vec![r#"a\""#, "b"]]);
}

#[test]
fn escaped_escape_closes_field() {
    assert_eq!(
        rows("\"C:\\\\\",x\n1,2\n"),
        vec![vec!["C:\\\\", "x"], vec!["1", "2"]]
    );
}

#[test]
fn empty_quoted_field() {
    assert_eq!(rows(r#""",x,"""#), vec![vec!["", "x", ""]]);
}

#[test]
fn unterminated_quote_is_best_effort() {
    // The open span swallows every later delimiter and line break.
    assert_eq!(rows("a,\"b,c\nd,e"), vec![vec!["a", "\"b,c\nd,e"]]);
}

#[test]
fn stray_enclosure_inside_unquoted_field() {
    assert_eq!(rows("ab\"c,d\"e,f"), vec![vec!["ab\"c,d\"e", "f"]]);
}

#[test]
fn first_last_unwrap_quirk_is_preserved() {
    // Unwrapping strips the outermost characters, it does not match pairs.
    let options = Options::default();
    assert_eq!(unquote_str(r#""a"b""#, &options), r#"a"b"#);
    assert_eq!(rows(r#""a" "b""#), vec![vec![r#"a" "b"#]]);
}

#[test]
fn placeholder_lookalikes_are_plain_text() {
    let input = "\"$DELIMITER$,$ESCAPE$$ENCLOSURE$\",$LINE_DELIMITER$\n";
    assert_eq!(
        rows(input),
        vec![vec!["$DELIMITER$,$ESCAPE$$ENCLOSURE$", "$LINE_DELIMITER$"]]
    );
}

#[test]
fn unquote_twice_is_a_no_op_for_unwrapped_values() {
    let options = Options::default();
    for value in ["plain", "x,y", "line1\nline2", "He said \"hi\"", ""] {
        let once = unquote_str(value, &options);
        let twice = unquote_str(&once, &options);
        assert_eq!(once, value);
        assert_eq!(twice, once);
    }
}

#[test]
fn crlf_line_delimiter() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default().with_line_delimiter("\r\n");
    let doc = parse_str("a,b\r\n\"1\r\n2\",3\r\n\r\n", &options, true)?;
    assert_eq!(doc.to_array(), vec![vec!["1\r\n2", "3"]]);
    Ok(())
}

#[test]
fn non_ascii_enclosure_and_delimiter() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default().with_delimiter('§').with_enclosure('«');
    let doc = parse_str("«a§b»§č\n", &options, false)?;
    // a closing `»` is not the enclosure, so the span runs to the end
    assert_eq!(doc.to_array(), vec![vec!["«a§b»§č\n"]]);

    let options = Options::default().with_delimiter('§').with_enclosure('¦');
    let doc = parse_str("¦a§b¦§č\n", &options, false)?;
    assert_eq!(doc.to_array(), vec![vec!["a§b", "č"]]);
    Ok(())
}
