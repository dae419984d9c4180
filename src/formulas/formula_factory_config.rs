use serde::{Deserialize, Serialize};

/// `FormulaFactoryConfig` is a configuration for a [`FormulaFactory`].
///
/// It controls how operations working on the formulas of the factory treat
/// edge cases.
///
/// [`FormulaFactory`]: super::FormulaFactory
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaFactoryConfig {
    /// A truth table row whose formula does not reduce to a constant under
    /// the row's assignment is normally kept with its residual formula as
    /// text. If this flag is set, such rows are reported as evaluation
    /// failures and left out of the table instead.
    pub skip_unresolved_rows: bool,
}

impl FormulaFactoryConfig {
    /// Creates a new `FormulaFactoryConfig` with a default configuration.
    pub const fn new() -> Self {
        Self { skip_unresolved_rows: false }
    }

    /// Sets the flag for skipping unresolved truth table rows.
    #[must_use]
    pub const fn skip_unresolved_rows(mut self, skip_unresolved_rows: bool) -> Self {
        self.skip_unresolved_rows = skip_unresolved_rows;
        self
    }
}
