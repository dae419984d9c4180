use thiserror::Error;

/// Errors that can occur while turning a problem into a formula and
/// analysing it.
///
/// None of these errors escapes [`reason`](crate::reason): each kind is
/// reported as an unsuccessful [`AnalysisResult`](crate::AnalysisResult)
/// with the confidence and conclusion given by [`ReasonError::confidence`]
/// and [`ReasonError::conclusion`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReasonError {
    /// A statement was found, but it is not a valid formula.
    #[error("Could not parse logical statement: {input}\n{message}")]
    Parse {
        /// The statement that was given to the parser
        input: String,
        /// The diagnostic of the parser
        message: String,
    },

    /// Neither a formula nor any other known logical structure was found.
    #[error("The problem '{0}' does not contain clear logical structure that can be analyzed with propositional logic.")]
    NoLogicalStructure(String),

    /// A single truth table row could not be evaluated.
    #[error("Error evaluating expression: {0}")]
    Evaluation(String),

    /// The problem uses quantifiers, which propositional logic cannot express.
    #[error(
        "The problem '{0}' contains categorical statements (all/some/every). These are typically handled by predicate logic rather than propositional logic."
    )]
    CategoricalUnsupported(String),

    /// The formula has more variables than the truth table may enumerate.
    #[error("The expression has {found} distinct variables, but truth tables are limited to {limit} variables.")]
    TooManyVariables {
        /// Number of distinct variables of the formula
        found: usize,
        /// Configured maximum
        limit: usize,
    },

    /// The analysis of a parsed formula failed.
    #[error("Error in logic analysis: {0}")]
    Analysis(String),
}

impl ReasonError {
    pub(crate) fn parse(input: &str, message: impl ToString) -> Self {
        Self::Parse { input: input.to_string(), message: message.to_string() }
    }

    /// Returns the confidence reported for a result failing with this error.
    pub const fn confidence(&self) -> f64 {
        match self {
            Self::Parse { .. } => 0.2,
            Self::NoLogicalStructure(_) => 0.3,
            Self::CategoricalUnsupported(_) => 0.4,
            Self::Evaluation(_) | Self::TooManyVariables { .. } | Self::Analysis(_) => 0.1,
        }
    }

    /// Returns the short conclusion reported for a result failing with this
    /// error.
    pub const fn conclusion(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "Parsing failed",
            Self::NoLogicalStructure(_) => "No clear logical structure detected",
            Self::Evaluation(_) => "Evaluation failed",
            Self::CategoricalUnsupported(_) => "Categorical statements require predicate logic analysis",
            Self::TooManyVariables { .. } => "Too many variables for a truth table analysis",
            Self::Analysis(_) => "Analysis failed",
        }
    }
}
