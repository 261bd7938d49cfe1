//! Loco Config - Pure configuration data structures
//!
//! This crate contains only data structures, no global state.
//! It serves as the shared configuration vocabulary across all Loco crates.

use serde::{Deserialize, Serialize};

/// Default number of columns a tab advances the source column by
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Errors produced while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("tab_width must be at least 1, got {0}")]
    InvalidTabWidth(usize),

    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for lexical analysis
///
/// Only column accounting is configurable; token classification is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Columns added to the current column when a tab is consumed
    pub tab_width: usize,
}

impl LexerConfig {
    /// Set the tab width
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Check the configuration for values the lexer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_width == 0 {
            return Err(ConfigError::InvalidTabWidth(self.tab_width));
        }
        Ok(())
    }

    /// Parse a configuration from a JSON document
    ///
    /// Missing fields fall back to their defaults:
    ///
    /// ```
    /// use loco_config::LexerConfig;
    ///
    /// let cfg = LexerConfig::from_json(r#"{ "tab_width": 8 }"#).unwrap();
    /// assert_eq!(cfg.tab_width, 8);
    /// ```
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: LexerConfig = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Pipeline phase, used to name log targets
///
/// Only the lexer lives in this workspace; the other phases name the
/// collaborators that consume its tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
    Evaluator,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
            Phase::Evaluator => "evaluator",
        }
    }

    /// Get the log target name for this phase
    ///
    /// The lexer's `tracing` macros spell their targets as literals
    /// (`loco::lexer`, `loco::lexer::scanner`, `loco::lexer::stream`); all of
    /// them must start with `Phase::Lexer.target()` so one filter covers them.
    pub fn target(&self) -> String {
        format!("loco::{}", self.as_str())
    }
}
