//! Engine configuration loaded from TOML.
//!
//! Every field is optional in the file; anything left out keeps its default.
//!
//! ```toml
//! depth = 3
//! disabled_terms = ["early_f_pawn"]
//!
//! [weights]
//! undefended_pawn = 150
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::eval::{Evaluator, Term, Weights};
use crate::search::{DEFAULT_DEPTH, MAX_DEPTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies, 1 to [`MAX_DEPTH`]
    pub depth: u8,
    /// Turning pruning off must not change any score, only node counts
    pub alpha_beta: bool,
    /// Terms left out of the evaluation sum
    pub disabled_terms: Vec<Term>,
    pub weights: Weights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
            disabled_terms: Vec::new(),
            weights: Weights::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            depth = config.depth,
            alpha_beta = config.alpha_beta,
            disabled = config.disabled_terms.len(),
            "loaded engine config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::InvalidDepth {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }

    /// Evaluator with this config's weights and term selection.
    pub fn evaluator(&self) -> Evaluator {
        let mut evaluator = Evaluator::with_weights(self.weights.clone());
        for &term in &self.disabled_terms {
            evaluator.set_enabled(term, false);
        }
        evaluator
    }

    /// Serialise back to TOML, e.g. to print a starting template.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
