use crate::gallery::SortMethod;
use crate::input::KeyConfig;
use crate::logging::{self, LogLevel};
use crate::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Deserialize, Serialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
    /// Raw option values, validated one by one in `parse_options`
    #[serde(default)]
    pub options: toml::Table,
    #[serde(default)]
    pub keymap: KeyConfig,
}

/// Gallery options that can come from the config file or the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOptions {
    pub sort: SortMethod,
    pub ignore_case: bool,
    pub test: bool,
    pub data_file: Option<PathBuf>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            sort: SortMethod::Human,
            ignore_case: true,
            test: false,
            data_file: None,
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub theme_name: String,
    pub theme: Theme,
    pub options: ViewerOptions,
    pub keymap: KeyConfig,
    pub log_level: LogLevel,
    /// Problems found while reading the config, already logged
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: String::from("default"),
            theme: Theme::default(),
            options: ViewerOptions::default(),
            keymap: KeyConfig::default(),
            log_level: LogLevel::default(),
            warnings: Vec::new(),
        }
    }
}

/// Boolean spellings accepted for `test`.
fn parse_boolean(value: &toml::Value) -> Option<bool> {
    match value {
        toml::Value::Boolean(flag) => Some(*flag),
        toml::Value::Integer(1) => Some(true),
        toml::Value::Integer(0) => Some(false),
        toml::Value::String(text) => match text.to_ascii_lowercase().as_str() {
            "1" | "yes" | "true" | "on" => Some(true),
            "0" | "no" | "false" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// `case = "ignore"` folds case when sorting, `case = "consider"` does not.
fn parse_case(value: &toml::Value) -> Option<bool> {
    match value.as_str()?.to_ascii_lowercase().as_str() {
        "ignore" => Some(true),
        "consider" => Some(false),
        _ => None,
    }
}

fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = dirs::config_dir() {
            return dir.join("galleryview");
        }
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        base.join(".config").join("galleryview")
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    fn load_theme(theme_name: &str) -> Result<Theme> {
        let theme_dir = Self::config_dir().join("themes");
        let theme_path = theme_dir.join(format!("{}.toml", theme_name));

        if theme_path.exists() {
            let content =
                std::fs::read_to_string(&theme_path).context("Failed to read theme file")?;
            toml::from_str(&content).context("Failed to parse theme file")
        } else {
            Ok(Theme::default())
        }
    }

    /// Applies the `[options]` table onto `options`.
    ///
    /// Unknown keys are skipped. Values a rule rejects leave the option
    /// unchanged and add a warning naming `source`.
    pub fn parse_options(
        table: &toml::Table,
        options: &mut ViewerOptions,
        source: &str,
    ) -> Vec<String> {
        let mut warnings = Vec::new();

        for (key, value) in table {
            let accepted = match key.to_ascii_lowercase().as_str() {
                "sort" => value
                    .as_str()
                    .and_then(|text| text.parse::<SortMethod>().ok())
                    .map(|sort| options.sort = sort),
                "case" => parse_case(value).map(|ignore| options.ignore_case = ignore),
                "test" => parse_boolean(value).map(|flag| options.test = flag),
                "data_file" | "data-file" | "datafile" => value
                    .as_str()
                    .map(|path| options.data_file = Some(PathBuf::from(path))),
                _ => continue,
            };

            if accepted.is_none() {
                let warning = format!(
                    "in {:?}: invalid value for config option {}: {}",
                    source,
                    key,
                    display_value(value)
                );
                logging::warn(&warning);
                warnings.push(warning);
            }
        }

        warnings
    }

    /// Builds a config from TOML text. Parse errors fall back to defaults.
    pub fn from_toml(content: &str, source: &str) -> Self {
        let config_file: ConfigFile = match toml::from_str(content) {
            Ok(file) => file,
            Err(err) => {
                let warning = format!("in {:?}: {}", source, err);
                logging::warn(&warning);
                return Self {
                    warnings: vec![warning],
                    ..Self::default()
                };
            }
        };

        let mut options = ViewerOptions::default();
        let mut warnings = Self::parse_options(&config_file.options, &mut options, source);

        let log_level = match config_file.log_level.as_deref().map(str::parse::<LogLevel>) {
            Some(Ok(level)) => level,
            Some(Err(err)) => {
                let warning = format!("in {:?}: {}", source, err);
                logging::warn(&warning);
                warnings.push(warning);
                LogLevel::default()
            }
            None => LogLevel::default(),
        };

        let theme_name = config_file
            .theme
            .unwrap_or_else(|| String::from("default"));
        let theme = Self::load_theme(&theme_name).unwrap_or_else(|err| {
            let warning = format!("Error loading theme {}: {}", theme_name, err);
            logging::warn(&warning);
            warnings.push(warning);
            Theme::default()
        });

        Self {
            theme_name,
            theme,
            options,
            keymap: config_file.keymap,
            log_level,
            warnings,
        }
    }

    /// Reads `path`, or the default location when `None`.
    ///
    /// A missing file is not an error; the built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                logging::info(&format!("Loaded config from {}", path.display()));
                Self::from_toml(&content, &path.display().to_string())
            }
            Err(err) => {
                logging::debug(&format!("No config at {}: {}", path.display(), err));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn options_from(table: &str) -> (ViewerOptions, Vec<String>) {
        let config = Config::from_toml(&format!("[options]\n{}", table), "test.toml");
        (config.options, config.warnings)
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("", "empty.toml");
        assert_eq!(config.options, ViewerOptions::default());
        assert_eq!(config.keymap, KeyConfig::default());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_unknown_options_are_ignored() {
        let (options, warnings) = options_from(r#"unknown = "value""#);
        assert_eq!(options, ViewerOptions::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_sort_choices_valid() {
        for (key, value, expected) in [
            ("sort", "none", SortMethod::None),
            ("sort", "ascii", SortMethod::Ascii),
            ("Sort", "human", SortMethod::Human),
            ("Sort", "default", SortMethod::Human),
        ] {
            let (options, warnings) = options_from(&format!(r#"{} = "{}""#, key, value));
            assert_eq!(options.sort, expected);
            assert!(warnings.is_empty());
        }
    }

    #[test]
    fn test_sort_choices_invalid() {
        let (options, warnings) = options_from(r#"sort = "shuffle""#);
        assert_eq!(options.sort, ViewerOptions::default().sort);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("shuffle"));
        assert!(warnings[0].contains("test.toml"));
    }

    #[test]
    fn test_case_actions() {
        let (options, _) = options_from(r#"case = "consider""#);
        assert!(!options.ignore_case);
        let (options, _) = options_from(r#"Case = "ignore""#);
        assert!(options.ignore_case);
        let (options, warnings) = options_from(r#"case = "invalid""#);
        assert!(options.ignore_case);
        assert!(warnings[0].contains("invalid"));
    }

    #[test]
    fn test_test_boolean() {
        for (value, expected) in [
            ("true", Some(true)),
            (r#""yes""#, Some(true)),
            (r#""On""#, Some(true)),
            (r#""0""#, Some(false)),
            ("false", Some(false)),
            (r#""not a Boolean""#, None),
        ] {
            let (options, warnings) = options_from(&format!("test = {}", value));
            match expected {
                Some(flag) => {
                    assert_eq!(options.test, flag);
                    assert!(warnings.is_empty());
                }
                None => assert!(warnings[0].contains("not a Boolean")),
            }
        }
    }

    #[test]
    fn test_data_file_aliases() {
        for key in ["data_file", "data-file", "DataFile"] {
            let (options, _) = options_from(&format!(r#"{} = "captions.json""#, key));
            assert_eq!(options.data_file, Some(PathBuf::from("captions.json")));
        }
    }

    #[test]
    fn test_keymap_section() {
        let config = Config::from_toml(
            "[keymap]\nnext_page_key = 'l'\nscroll_amount = 5\n",
            "keys.toml",
        );
        assert_eq!(config.keymap.next_page_key, 'l');
        assert_eq!(config.keymap.prev_page_key, 'a');
        assert_eq!(config.keymap.scroll_amount, 5);
    }

    #[test]
    fn test_log_level() {
        let config = Config::from_toml("log_level = \"warn\"\n", "log.toml");
        assert_eq!(config.log_level, LogLevel::Warning);
        assert!(config.warnings.is_empty());

        let config = Config::from_toml("log_level = \"loud\"\n", "log.toml");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.warnings[0].contains("loud"));
    }

    #[test]
    fn test_parse_error_falls_back_to_defaults() {
        let config = Config::from_toml("[options\nsort = ", "broken.toml");
        assert_eq!(config.options, ViewerOptions::default());
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("broken.toml"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[options]\nsort = \"ascii\"\ntest = true").unwrap();

        let config = Config::load(Some(file.path()));
        assert_eq!(config.options.sort, SortMethod::Ascii);
        assert!(config.options.test);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("missing.toml").as_path()));
        assert_eq!(config.options, ViewerOptions::default());
        assert!(config.warnings.is_empty());
    }
}
