//! Settings files.

use serde::{Deserialize, Serialize};
use std::{error::Error, fs, path::Path};

/// Settings that can be stored in a file.
///
/// Every field is optional; command-line arguments take precedence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    /// Number of worker threads.
    pub(crate) workers: Option<usize>,
    /// Rule of the cellular automaton.
    pub(crate) rule: Option<String>,
    /// Character for living cells.
    pub(crate) alive: Option<char>,
    /// Character for dead cells when printing.
    pub(crate) dead: Option<char>,
    /// Prints the initial grid.
    pub(crate) show_initial: bool,
    /// Prints every generation.
    pub(crate) trace: bool,
    /// Does not print the final grid.
    pub(crate) quiet: bool,
}

/// Formats of settings files, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    pub(crate) fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

impl Settings {
    /// Parses settings in the given format.
    pub(crate) fn parse(s: &str, format: Format) -> Result<Self, Box<dyn Error>> {
        let settings = match format {
            Format::Toml => toml::from_str(s)?,
            Format::Yaml => serde_yaml::from_str(s)?,
            Format::Json => serde_json::from_str(s)?,
        };
        Ok(settings)
    }

    /// Loads settings from a file.
    pub(crate) fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let format = Format::from_path(path).ok_or_else(|| {
            format!(
                "unknown settings format for {}; expected .toml, .yaml, .yml or .json",
                path.display()
            )
        })?;
        let s = fs::read_to_string(path)?;
        Settings::parse(&s, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(Format::from_path(Path::new("a.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("a/b.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("b.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("c.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("c.txt")), None);
        assert_eq!(Format::from_path(Path::new("settings")), None);
    }

    #[test]
    fn parse_all_formats() -> Result<(), Box<dyn Error>> {
        let expected = Settings {
            workers: Some(4),
            rule: Some(String::from("B36/S23")),
            alive: Some('o'),
            dead: None,
            show_initial: false,
            trace: true,
            quiet: false,
        };
        let toml = "workers = 4\nrule = \"B36/S23\"\nalive = \"o\"\ntrace = true\n";
        let yaml = "workers: 4\nrule: B36/S23\nalive: o\ntrace: true\n";
        let json = r#"{"workers": 4, "rule": "B36/S23", "alive": "o", "trace": true}"#;
        assert_eq!(Settings::parse(toml, Format::Toml)?, expected);
        assert_eq!(Settings::parse(yaml, Format::Yaml)?, expected);
        assert_eq!(Settings::parse(json, Format::Json)?, expected);
        Ok(())
    }

    #[test]
    fn empty_and_unknown() -> Result<(), Box<dyn Error>> {
        assert_eq!(Settings::parse("", Format::Toml)?, Settings::default());
        assert_eq!(Settings::parse("{}", Format::Json)?, Settings::default());
        assert!(Settings::parse("threads = 2", Format::Toml).is_err());
        Ok(())
    }
}
