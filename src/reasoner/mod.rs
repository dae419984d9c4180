mod analysis;
mod config;
mod extraction;

pub use analysis::*;
pub use config::*;

use crate::datastructures::TruthTable;
use crate::errors::ReasonError;
use crate::formulas::{EncodedFormula, FormulaFactory};
use crate::handlers::{ComputationHandler, ComputationResult, NopHandler, Timer, TimeoutHandler};
use crate::operations::predicates::classify;

const CONDITIONAL_NOTE: &str = "\nThis appears to be a conditional statement (if-then).\n";

const CONDITIONAL_RULES: &str = "Truth table shows when the conditional is true:\n\
    - When A is false, the conditional is always true (vacuous truth)\n\
    - When A is true and B is true, the conditional is true\n\
    - When A is true and B is false, the conditional is false\n";

/// Analyses problems given as formulas or simple sentences.
///
/// A problem is handled in this order:
/// 1. If the whole problem is a formula, or it contains a formula over
///    single-letter variables like `Is P ∨ ¬P a tautology?`, this formula is
///    parsed, its truth table is generated, and it is classified as tautology,
///    contradiction, or contingency.
/// 2. Otherwise an `if ... then ...` sentence is analysed as the implication
///    `A → B` of its antecedent `A` and consequent `B`.
/// 3. Otherwise a sentence with quantifier words is reported as needing
///    predicate logic, and anything else as having no logical structure.
///
/// Every problem gets its own [`FormulaFactory`], so variables of different
/// problems never mix.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_reasoner::{Reasoner, ReasonerConfig};
/// let reasoner = Reasoner::new(ReasonerConfig::default());
///
/// let result = reasoner.reason("P ∧ ¬P");
/// assert!(result.success);
/// assert_eq!(result.conclusion, "The statement is always false (contradiction).");
/// assert!(result.truth_table.iter().all(|row| row.result().is_false()));
///
/// let result = reasoner.reason("If it rains then the street is wet");
/// assert!(result.success);
/// assert_eq!(result.expression.as_deref(), Some("A → B"));
///
/// let result = reasoner.reason("All men are mortal");
/// assert!(!result.success);
/// assert_eq!(result.conclusion, "Categorical statements require predicate logic analysis");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reasoner {
    config: ReasonerConfig,
}

impl Reasoner {
    /// Creates a new reasoner with the given configuration.
    pub const fn new(config: ReasonerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this reasoner.
    pub const fn config(&self) -> &ReasonerConfig {
        &self.config
    }

    /// Analyses `problem`. Failures are reported as an unsuccessful
    /// [`AnalysisResult`].
    pub fn reason(&self, problem: &str) -> AnalysisResult {
        self.try_reason(problem).unwrap_or_else(|error| {
            match error {
                ReasonError::Evaluation(_) | ReasonError::Analysis(_) => tracing::error!(%error, "logic analysis failed"),
                _ => tracing::debug!(%error, "problem could not be analysed"),
            }
            AnalysisResult::failure(&error)
        })
    }

    /// Analyses `problem` like [`Reasoner::reason`], but returns failures as
    /// [`ReasonError`].
    pub fn try_reason(&self, problem: &str) -> Result<AnalysisResult, ReasonError> {
        let f = FormulaFactory::with_config(self.config.factory.clone());
        if let Some((statement, formula)) = extraction::whole_statement(problem, &f) {
            tracing::debug!(%statement, "problem is a formula");
            return self.analyze_formula(problem, formula, &f);
        }
        if let Some(statement) = extraction::embedded_statement(problem) {
            tracing::debug!(statement, "found embedded formula");
            let formula = f.parse(statement)?;
            return self.analyze_formula(problem, formula, &f);
        }
        if self.config.natural_language_fallback {
            if extraction::mentions_conditional(problem) {
                if let Some((antecedent, consequent)) = extraction::find_conditional(problem) {
                    tracing::debug!(%antecedent, %consequent, "analysing conditional sentence");
                    return self.analyze_conditional(&antecedent, &consequent, &f);
                }
            }
            if extraction::mentions_quantifier(problem) {
                return Err(ReasonError::CategoricalUnsupported(problem.to_string()));
            }
        }
        Err(ReasonError::NoLogicalStructure(problem.to_string()))
    }

    fn analyze_formula(&self, problem: &str, formula: EncodedFormula, f: &FormulaFactory) -> Result<AnalysisResult, ReasonError> {
        let expression = formula.to_string(f);
        let table = self.truth_table(formula, f)?;
        let classification = classify(formula, &table, f);
        tracing::debug!(%expression, %classification, rows = table.len(), "classified formula");

        let mut explanation = format!("Analyzing the logical expression: {expression}\n\n");
        explanation.push_str(classification.findings());
        if self.config.annotate_conditionals && extraction::mentions_conditional(problem) {
            explanation.push_str(CONDITIONAL_NOTE);
        }
        Ok(AnalysisResult {
            explanation,
            truth_table: table.into_rows(),
            conclusion: classification.conclusion(),
            confidence: classification.confidence(),
            success: true,
            expression: Some(expression),
        })
    }

    fn analyze_conditional(&self, antecedent: &str, consequent: &str, f: &FormulaFactory) -> Result<AnalysisResult, ReasonError> {
        let formula = f.implication(f.variable("A"), f.variable("B"));
        let table = self.truth_table(formula, f)?;
        let explanation = format!(
            "Conditional Analysis:\nAntecedent (A): {antecedent}\nConsequent (B): {consequent}\nLogical form: A → B\n\n{CONDITIONAL_RULES}"
        );
        Ok(AnalysisResult {
            explanation,
            truth_table: table.into_rows(),
            conclusion: "This is a conditional statement (if-then). The truth table shows all possible truth value combinations."
                .to_string(),
            confidence: 0.8,
            success: true,
            expression: Some(formula.to_string(f)),
        })
    }

    fn truth_table(&self, formula: EncodedFormula, f: &FormulaFactory) -> Result<TruthTable, ReasonError> {
        let found = formula.variables(f).len();
        if found > self.config.max_variables {
            return Err(ReasonError::TooManyVariables { found, limit: self.config.max_variables });
        }
        let mut handler: Box<dyn ComputationHandler> = match self.config.timeout {
            Some(timeout) => Box::new(TimeoutHandler::new(Timer::SingleTimeout(timeout))),
            None => Box::new(NopHandler),
        };
        match TruthTable::generate_with_handler(formula, f, handler.as_mut()) {
            ComputationResult::Ok(table) => Ok(table),
            ComputationResult::Partial(_, event) | ComputationResult::Canceled(event) => {
                tracing::warn!(%event, "truth table generation was aborted");
                Err(ReasonError::Analysis(format!("the truth table generation was aborted ({event})")))
            }
        }
    }
}

/// Analyses `problem` with the default configuration.
///
/// This never fails: problems which cannot be analysed yield an
/// [`AnalysisResult`] with `success == false`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_reasoner::reason;
/// let result = reason("A → B");
///
/// assert!(result.success);
/// assert_eq!(result.conclusion, "The statement depends on the truth values of its components.");
/// assert_eq!(result.truth_table.len(), 4);
///
/// let result = reason("");
/// assert!(!result.success);
/// assert!(result.truth_table.is_empty());
/// ```
pub fn reason(problem: &str) -> AnalysisResult {
    Reasoner::default().reason(problem)
}
