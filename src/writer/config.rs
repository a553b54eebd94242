use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::LabelStyle;

/// Column separator of written well files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// `shift<TAB>intensity`, no header (historical format)
    #[default]
    Tab,
    /// `shift,intensity` under a `RamanShift(cm-1),Intensity` header
    Comma,
}

impl Delimiter {
    /// Separator byte
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
        }
    }

    /// Whether files in this format start with a header row
    pub fn has_header(&self) -> bool {
        matches!(self, Delimiter::Comma)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Tab => f.write_str("tab"),
            Delimiter::Comma => f.write_str("comma"),
        }
    }
}

/// Configuration for the well file writer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterConfig {
    /// Column separator
    pub delimiter: Delimiter,

    /// Well label padding used in file names
    pub style: LabelStyle,
}

impl WriterConfig {
    /// Use a different delimiter.
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Use a different well label style.
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }
}
