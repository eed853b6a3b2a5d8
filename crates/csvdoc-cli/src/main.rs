use std::fs::File;
use std::io::stdin;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use csvdoc::{Document, Options};
use serde_json::{Map, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "csvdoc-cli",
    about = "Parse delimiter-separated text and print it as JSON",
    version
)]
struct Args {
    /// Field delimiter (a single character, or `tab`)
    #[arg(long, value_parser = parse_char)]
    delimiter: Option<char>,

    /// Enclosure (quote) character
    #[arg(long, value_parser = parse_char)]
    enclosure: Option<char>,

    /// Escape character used before an enclosure inside quoted fields
    #[arg(long, value_parser = parse_char)]
    escape: Option<char>,

    /// Line delimiter: `lf`, `crlf`, `cr` or a literal string (`\n`, `\r` and `\t` escapes allowed)
    #[arg(long, value_parser = parse_line_delimiter)]
    line_delimiter: Option<String>,

    /// Encoding label of the input bytes
    #[arg(long)]
    input_encoding: Option<String>,

    /// Encoding label the parsed text must fit into
    #[arg(long)]
    output_encoding: Option<String>,

    /// JSON file with parser options; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat the first line as data instead of a header
    #[arg(long, default_value_t = false)]
    no_header: bool,

    /// Print rows as objects keyed by column name
    #[arg(long, default_value_t = false)]
    records: bool,

    /// Print only the number of rows
    #[arg(long, default_value_t = false)]
    count: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Log parser activity to stderr (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn parse_char(s: &str) -> Result<char, String> {
    match s {
        "tab" | "\\t" => return Ok('\t'),
        "space" => return Ok(' '),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got {s:?}")),
    }
}

fn parse_line_delimiter(s: &str) -> Result<String, String> {
    let out = match s {
        "lf" => "\n".to_string(),
        "crlf" => "\r\n".to_string(),
        "cr" => "\r".to_string(),
        _ => s.replace("\\r", "\r").replace("\\n", "\n").replace("\\t", "\t"),
    };
    if out.is_empty() {
        return Err("line delimiter must not be empty".to_string());
    }
    Ok(out)
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn build_options(args: &Args) -> Result<Options> {
    let mut options = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open config {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("invalid config {}", path.display()))?
        }
        None => Options::default(),
    };
    if let Some(c) = args.delimiter {
        options.delimiter = c;
    }
    if let Some(c) = args.enclosure {
        options.enclosure = c;
    }
    if let Some(c) = args.escape {
        options.escape = c;
    }
    if let Some(s) = &args.line_delimiter {
        options.line_delimiter = s.clone();
    }
    if let Some(s) = &args.input_encoding {
        options.input_encoding = s.clone();
    }
    if let Some(s) = &args.output_encoding {
        options.output_encoding = s.clone();
    }
    Ok(options)
}

/// Rows as objects; fields beyond the header are keyed by position.
fn records(doc: &Document) -> Value {
    let header = doc.header();
    let rows = doc
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (index, value) in row.entries() {
                let key = header
                    .and_then(|h| h.get(index).ok())
                    .map_or_else(|| index.to_string(), str::to_string);
                obj.insert(key, Value::String(value.to_string()));
            }
            Value::Object(obj)
        })
        .collect();
    Value::Array(rows)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.records && args.no_header {
        bail!("--records needs a header row");
    }

    let options = build_options(&args)?;
    debug!(?options, "resolved options");

    let with_header = !args.no_header;
    let mut doc = Document::with_options(options);
    match &args.input {
        Some(path) => doc
            .parse_file(path, with_header)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        None => doc
            .parse_reader(stdin().lock(), with_header)
            .context("failed to parse stdin")?,
    }

    if args.count {
        println!("{}", doc.len());
        return Ok(());
    }

    let value = if args.records {
        records(&doc)
    } else {
        serde_json::to_value(&doc)?
    };
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }

    Ok(())
}
