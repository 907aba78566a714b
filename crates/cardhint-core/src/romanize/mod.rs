//! IPA-to-romanization approximation.
//!
//! A lossy "sounds like" spelling: tone and length marks are dropped and a
//! short ordered list of IPA symbols is rewritten into familiar Latin letter
//! combinations. Symbols the table does not know pass through unchanged.

mod table;

use std::sync::OnceLock;

pub use table::{default_toml, parse_table_toml, TableError};

use table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// One literal substring replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub ipa: String,
    pub roman: String,
}

#[derive(Debug, Clone)]
pub struct Romanizer {
    /// Removed before substitution (tone letters, glottalization, brackets).
    leading: Vec<char>,
    rules: Vec<Rule>,
    /// Removed after substitution.
    residual: Vec<char>,
}

impl Romanizer {
    /// Set custom table TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Romanizer {
        static INSTANCE: OnceLock<Romanizer> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_table_toml(toml_str).expect("IPA table TOML must be valid")
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Approximate `ipa` with plain letters. Never fails; the result may be
    /// empty when the input held nothing but stripped marks.
    pub fn romanize(&self, ipa: &str) -> String {
        let mut out = strip_chars(ipa, &self.leading);
        for rule in &self.rules {
            if out.contains(rule.ipa.as_str()) {
                out = out.replace(rule.ipa.as_str(), &rule.roman);
            }
        }
        strip_chars(&out, &self.residual).trim().to_string()
    }
}

impl Default for Romanizer {
    fn default() -> Self {
        parse_table_toml(DEFAULT_TOML).expect("IPA table TOML must be valid")
    }
}

/// Romanize with the global table.
pub fn romanize(ipa: &str) -> String {
    Romanizer::global().romanize(ipa)
}

fn strip_chars(s: &str, set: &[char]) -> String {
    s.chars().filter(|c| !set.contains(c)).collect()
}
