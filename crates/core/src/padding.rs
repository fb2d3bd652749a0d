//! Zero-padding of chapter and volume numbers.

/// How a numeric chapter or volume value is left-padded with zeros.
///
/// Chapters accept every variant; the volume setting is parsed from the
/// `None`/`Width2`/`Width3` subset only (see [`from_volume_token`]).
/// `Auto` pads to a caller-supplied fallback width, because the real
/// series-wide maximum is only known to the component that has the full
/// chapter list.
///
/// [`from_volume_token`]: PaddingPolicy::from_volume_token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingPolicy {
    Auto,
    None,
    Width2,
    Width3,
    Width4,
}

impl PaddingPolicy {
    /// Parse a stored chapter-padding token (`auto`, `0`, `00`, `000`, `0000`).
    pub fn from_chapter_token(token: &str) -> Option<Self> {
        match token {
            "auto" => Some(PaddingPolicy::Auto),
            "0" => Some(PaddingPolicy::None),
            "00" => Some(PaddingPolicy::Width2),
            "000" => Some(PaddingPolicy::Width3),
            "0000" => Some(PaddingPolicy::Width4),
            _ => None,
        }
    }

    /// Parse a stored volume-padding token (`0`, `00`, `000`).
    pub fn from_volume_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(PaddingPolicy::None),
            "00" => Some(PaddingPolicy::Width2),
            "000" => Some(PaddingPolicy::Width3),
            _ => None,
        }
    }

    /// The stored token form, for writing settings back out.
    pub fn as_token(&self) -> &'static str {
        match self {
            PaddingPolicy::Auto => "auto",
            PaddingPolicy::None => "0",
            PaddingPolicy::Width2 => "00",
            PaddingPolicy::Width3 => "000",
            PaddingPolicy::Width4 => "0000",
        }
    }

    /// Minimum digit count this policy asks for. `None` is width 1, which
    /// formats the integer without extra zeros.
    fn width(&self, fallback_width: usize) -> usize {
        match self {
            PaddingPolicy::Auto => fallback_width,
            PaddingPolicy::None => 1,
            PaddingPolicy::Width2 => 2,
            PaddingPolicy::Width3 => 3,
            PaddingPolicy::Width4 => 4,
        }
    }
}

impl std::fmt::Display for PaddingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

/// Pad `value` per `policy`. Non-numeric values pass through unchanged;
/// numeric values are reformatted as canonical integer text, left-padded to
/// the policy's width. Padding only ever adds digits: a value wider than the
/// target width keeps its natural width.
pub fn pad(value: &str, policy: PaddingPolicy, fallback_width: usize) -> String {
    pad_to_width(value, policy.width(fallback_width))
}

/// Pad `value` to an explicit width, for `{Chapter:000}`-style overrides.
pub fn pad_to_width(value: &str, width: usize) -> String {
    match value.parse::<u64>() {
        Ok(n) => format!("{:0width$}", n),
        Err(_) => value.to_string(),
    }
}
