use serde::Deserialize;

use super::{Romanizer, Rule};

pub(super) const DEFAULT_TOML: &str = include_str!("default_ipa.toml");

#[derive(Deserialize)]
struct TableConfig {
    strip: StripConfig,
    rules: Vec<RuleConfig>,
}

#[derive(Deserialize)]
struct StripConfig {
    tone_marks: String,
    punctuation: String,
    residual: String,
}

#[derive(Deserialize)]
struct RuleConfig {
    ipa: String,
    roman: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[rules]] list is empty")]
    Empty,
    #[error("empty ipa pattern in rule #{0}")]
    EmptyPattern(usize),
    #[error("IPA table already initialized")]
    AlreadyInitialized,
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Parse TOML text into a `Romanizer`, keeping rules in file order.
pub fn parse_table_toml(toml_str: &str) -> Result<Romanizer, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.rules.is_empty() {
        return Err(TableError::Empty);
    }

    let mut rules = Vec::with_capacity(config.rules.len());
    for (i, rule) in config.rules.into_iter().enumerate() {
        if rule.ipa.is_empty() {
            return Err(TableError::EmptyPattern(i + 1));
        }
        rules.push(Rule {
            ipa: rule.ipa,
            roman: rule.roman,
        });
    }

    let mut leading: Vec<char> = config.strip.tone_marks.chars().collect();
    leading.extend(config.strip.punctuation.chars());

    Ok(Romanizer {
        leading,
        rules,
        residual: config.strip.residual.chars().collect(),
    })
}
