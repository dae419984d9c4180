use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::formulas::FormulaFactoryConfig;

/// Configuration for a [`Reasoner`](super::Reasoner).
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// # use logic_reasoner::ReasonerConfig;
/// let config = ReasonerConfig::new().max_variables(8).timeout(Some(Duration::from_secs(1)));
///
/// assert_eq!(config.max_variables, 8);
/// assert!(config.natural_language_fallback);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonerConfig {
    /// Maximum number of distinct variables of a formula. Formulas with more
    /// variables are rejected instead of enumerating their truth table.
    /// Default: 20
    pub max_variables: usize,

    /// Aborts the truth table generation after this duration.
    /// Default: no timeout
    pub timeout: Option<Duration>,

    /// Notes in the explanation if the problem reads as an `if ... then ...`
    /// sentence.
    /// Default: true
    pub annotate_conditionals: bool,

    /// Analyses problems without a formula as conditional or categorical
    /// sentences.
    /// Default: true
    pub natural_language_fallback: bool,

    /// Configuration of the formula factory created for every problem.
    pub factory: FormulaFactoryConfig,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReasonerConfig {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            max_variables: 20,
            timeout: None,
            annotate_conditionals: true,
            natural_language_fallback: true,
            factory: FormulaFactoryConfig::new(),
        }
    }

    /// Sets the maximum number of variables.
    #[must_use]
    pub const fn max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    /// Sets the timeout of the truth table generation.
    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the flag for annotating conditional sentences.
    #[must_use]
    pub const fn annotate_conditionals(mut self, annotate_conditionals: bool) -> Self {
        self.annotate_conditionals = annotate_conditionals;
        self
    }

    /// Sets the flag for the natural-language fallback.
    #[must_use]
    pub const fn natural_language_fallback(mut self, natural_language_fallback: bool) -> Self {
        self.natural_language_fallback = natural_language_fallback;
        self
    }

    /// Sets the configuration of the formula factory.
    #[must_use]
    pub const fn factory(mut self, factory: FormulaFactoryConfig) -> Self {
        self.factory = factory;
        self
    }
}
