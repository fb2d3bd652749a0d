/// Top-level error type. Rendering itself never fails, it always produces a
/// best-effort string; errors only arise at the settings seams.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid data pair (expected KEY=VALUE): {0}")]
    InvalidDataPair(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown chapter padding token: {0} (expected auto, 0, 00, 000, or 0000)")]
    UnknownChapterPadding(String),

    #[error("Unknown volume padding token: {0} (expected 0, 00, or 000)")]
    UnknownVolumePadding(String),

    #[error("Unknown output format code: {0} (expected 0 for CBZ or 1 for PDF)")]
    UnknownOutputFormat(u8),
}
