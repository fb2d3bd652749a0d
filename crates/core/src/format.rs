//! Output formats a downloaded chapter can be packaged as.

/// Supported chapter archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Cbz,
    Pdf,
}

impl OutputFormat {
    /// The canonical file extension, dot included.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Cbz => ".cbz",
            OutputFormat::Pdf => ".pdf",
        }
    }

    /// Parse the stored settings code (`0` = CBZ, `1` = PDF).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(OutputFormat::Cbz),
            1 => Some(OutputFormat::Pdf),
            _ => None,
        }
    }

    /// The stored settings code, for writing settings back out.
    pub fn code(&self) -> u8 {
        match self {
            OutputFormat::Cbz => 0,
            OutputFormat::Pdf => 1,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Cbz => write!(f, "CBZ"),
            OutputFormat::Pdf => write!(f, "PDF"),
        }
    }
}
