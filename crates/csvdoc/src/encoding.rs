//! Conversion of raw input bytes into document text.
//!
//! Encoding names are WHATWG labels as understood by `encoding_rs`
//! (`utf8`, `latin1`, `windows-1250`, `shift_jis`, ...). The decoded text is
//! always held as UTF-8 in memory; the output encoding is only checked for
//! representability so a document never carries characters its consumer
//! cannot store.

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::error::{Error, Result};

/// Resolve an encoding label, failing on labels `encoding_rs` does not know.
pub fn lookup(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::Encoding(format!("unknown encoding label \"{label}\"")))
}

/// Decode `bytes` from the `from` encoding and verify the result is
/// representable in the `to` encoding.
///
/// No BOM sniffing is done and malformed sequences are an error rather than
/// being replaced with U+FFFD.
pub fn decode(bytes: &[u8], from: &str, to: &str) -> Result<String> {
    let source = lookup(from)?;
    let target = lookup(to)?;

    let text = source
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| Error::Encoding(format!("input is not valid {}", source.name())))?;

    if source != UTF_8 || target != UTF_8 {
        debug!(from = source.name(), to = target.name(), bytes = bytes.len(), "transcoding input");
    }
    ensure_representable(&text, target)?;
    Ok(text.into_owned())
}

fn ensure_representable(text: &str, target: &'static Encoding) -> Result<()> {
    // UTF-16 targets encode through UTF-8 in encoding_rs and can hold anything.
    if target.output_encoding() == UTF_8 {
        return Ok(());
    }
    let (_, _, had_unmappable) = target.encode(text);
    if had_unmappable {
        return Err(Error::Encoding(format!(
            "text is not representable in {}",
            target.name()
        )));
    }
    Ok(())
}
