#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parser configuration shared by every stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Field separator within a line
    pub delimiter: char,
    /// Quoting character for fields holding delimiters or line breaks
    pub enclosure: char,
    /// Character that embeds a literal enclosure inside a quoted field
    pub escape: char,
    /// Row separator, may be more than one character (e.g. `"\r\n"`)
    pub line_delimiter: String,
    /// Encoding label of the raw input bytes
    pub input_encoding: String,
    /// Encoding label the decoded text must be representable in
    pub output_encoding: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: ',',
            enclosure: '"',
            escape: '\\',
            line_delimiter: "\n".to_string(),
            input_encoding: "utf8".to_string(),
            output_encoding: "utf8".to_string(),
        }
    }
}

impl Options {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_enclosure(mut self, enclosure: char) -> Self {
        self.enclosure = enclosure;
        self
    }

    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_line_delimiter(mut self, line_delimiter: impl Into<String>) -> Self {
        self.line_delimiter = line_delimiter.into();
        self
    }

    pub fn with_input_encoding(mut self, label: impl Into<String>) -> Self {
        self.input_encoding = label.into();
        self
    }

    pub fn with_output_encoding(mut self, label: impl Into<String>) -> Self {
        self.output_encoding = label.into();
        self
    }
}
