//! Config file parsing for `~/.config/chapter-namer/config.toml`.
//!
//! The stored form keeps the settings-layer encodings (padding tokens such as
//! `"000"`, format codes `0`/`1`); use `render_options_from_config` to turn a
//! loaded config into engine options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::OutputFormat;
use crate::padding::PaddingPolicy;
use crate::template::{RenderOptions, TargetKind, DEFAULT_AUTO_PAD_WIDTH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Template for chapter file names. Empty means "use the built-in
    /// default preview template".
    #[serde(default)]
    pub file_name_template: String,

    /// Template for series folder names. Empty behaves like above.
    #[serde(default)]
    pub folder_template: String,

    /// Chapter padding token: `auto`, `0`, `00`, `000`, or `0000`.
    #[serde(default = "default_chapter_padding")]
    pub chapter_padding: String,

    /// Volume padding token: `0`, `00`, or `000`.
    #[serde(default = "default_volume_padding")]
    pub volume_padding: String,

    /// Output format code: `0` = CBZ, `1` = PDF.
    #[serde(default)]
    pub output_format: u8,

    #[serde(default = "default_include_title")]
    pub include_chapter_title: bool,
}

fn default_chapter_padding() -> String {
    "auto".to_string()
}
fn default_volume_padding() -> String {
    "0".to_string()
}
fn default_include_title() -> bool {
    true
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            file_name_template: String::new(),
            folder_template: String::new(),
            chapter_padding: default_chapter_padding(),
            volume_padding: default_volume_padding(),
            output_format: 0,
            include_chapter_title: true,
        }
    }
}

/// Load config from the default path (`~/.config/chapter-namer/config.toml`).
pub fn load_config() -> NamingConfig {
    match config_path() {
        Some(p) => load_config_from(&p),
        None => NamingConfig::default(),
    }
}

/// Load config from an explicit path. Missing or unparseable files fall back
/// to the defaults.
pub fn load_config_from(path: &Path) -> NamingConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return NamingConfig::default(),
    };

    match toml::from_str::<NamingConfig>(&content) {
        Ok(cfg) => cfg,
        Err(_) => NamingConfig::default(),
    }
}

/// Return the default config file path (for init and show).
pub fn config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|mut p| {
        p.push("chapter-namer");
        p.push("config.toml");
        p
    })
}

/// Build engine options from config. Fails on tokens/codes outside the
/// settings enums, so a hand-edited config surfaces a readable error instead
/// of silently rendering with defaults.
pub fn render_options_from_config(cfg: &NamingConfig) -> Result<RenderOptions, ConfigError> {
    let chapter_padding = PaddingPolicy::from_chapter_token(&cfg.chapter_padding)
        .ok_or_else(|| ConfigError::UnknownChapterPadding(cfg.chapter_padding.clone()))?;
    let volume_padding = PaddingPolicy::from_volume_token(&cfg.volume_padding)
        .ok_or_else(|| ConfigError::UnknownVolumePadding(cfg.volume_padding.clone()))?;
    let output_format = OutputFormat::from_code(cfg.output_format)
        .ok_or(ConfigError::UnknownOutputFormat(cfg.output_format))?;

    Ok(RenderOptions {
        chapter_padding,
        volume_padding,
        auto_pad_width: DEFAULT_AUTO_PAD_WIDTH,
        output_format,
        include_title: cfg.include_chapter_title,
    })
}

/// The stored template for one target kind.
pub fn template_for(cfg: &NamingConfig, target: TargetKind) -> &str {
    match target {
        TargetKind::FileName => &cfg.file_name_template,
        TargetKind::Folder => &cfg.folder_template,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn default_config_builds_default_options() {
        let cfg = NamingConfig::default();
        let opts = render_options_from_config(&cfg).unwrap();
        assert_eq!(opts.chapter_padding, PaddingPolicy::Auto);
        assert_eq!(opts.volume_padding, PaddingPolicy::None);
        assert_eq!(opts.output_format, OutputFormat::Cbz);
        assert!(opts.include_title);
    }

    #[test]
    fn unknown_tokens_are_reported() {
        let cfg = NamingConfig {
            chapter_padding: "00000".to_string(),
            ..NamingConfig::default()
        };
        assert!(matches!(
            render_options_from_config(&cfg),
            Err(ConfigError::UnknownChapterPadding(_))
        ));

        let cfg = NamingConfig {
            output_format: 9,
            ..NamingConfig::default()
        };
        assert!(matches!(
            render_options_from_config(&cfg),
            Err(ConfigError::UnknownOutputFormat(9))
        ));
    }

    #[test]
    fn load_config_from_reads_toml_and_defaults_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "file_name_template = \"{{Series}} {{Chapter:000}}\"\nchapter_padding = \"000\"\noutput_format = 1"
        )
        .unwrap();

        let cfg = load_config_from(file.path());
        assert_eq!(cfg.file_name_template, "{Series} {Chapter:000}");
        assert_eq!(cfg.chapter_padding, "000");
        assert_eq!(cfg.output_format, 1);
        assert_eq!(cfg.volume_padding, "0");
        assert!(cfg.include_chapter_title);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config_from(Path::new("/nonexistent/chapter-namer.toml"));
        assert_eq!(cfg.chapter_padding, "auto");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = NamingConfig {
            file_name_template: "[{Provider}] {Series} {Chapter}".to_string(),
            folder_template: "{Series}".to_string(),
            chapter_padding: "0000".to_string(),
            volume_padding: "00".to_string(),
            output_format: 1,
            include_chapter_title: false,
        };
        let text = toml::to_string(&cfg).unwrap();
        let back: NamingConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.file_name_template, cfg.file_name_template);
        assert_eq!(back.chapter_padding, "0000");
        assert!(!back.include_chapter_title);
    }
}
