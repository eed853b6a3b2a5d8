#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use csvdoc::{Options, parse_str};

const MAX_ROWS: usize = 20;
const MAX_FIELDS: usize = 10;

#[derive(Arbitrary, Debug)]
struct Table {
    rows: Vec<Vec<String>>,
}

fn plain(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, ',' | '"' | '\\' | '\n')).collect()
}

// Fields free of special characters come back exactly as written.
fuzz_target!(|table: Table| {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .take(MAX_ROWS)
        .map(|row| row.iter().take(MAX_FIELDS).map(|f| plain(f)).collect::<Vec<_>>())
        .filter(|row| !row.is_empty() && row.iter().map(String::len).sum::<usize>() + row.len() > 1)
        .collect();

    let text: String = rows.iter().map(|row| row.join(",") + "\n").collect();
    let doc = parse_str(&text, &Options::default(), false).expect("utf8 text parses");
    assert_eq!(doc.to_array(), rows);
});
