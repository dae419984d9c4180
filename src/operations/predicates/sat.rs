use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::datastructures::TruthTable;
use crate::formulas::{EncodedFormula, Formula, FormulaFactory};

/// A predicate tests whether a formula is satisfiable. A formula is
/// satisfiable if there exists at least one assignment such that the formula
/// evaluates to `true` with this assignment. For example `A & B | C` is
/// satisfiable for the assignment `{A, B, ~C}`.
///
/// The check enumerates the truth table of the formula, so it is exponential
/// in the number of variables.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
/// # use logic_reasoner::operations::predicates::is_sat;
/// let f = FormulaFactory::new();
///
/// assert!(is_sat("a & b | c".to_formula(&f), &f));
/// assert!(!is_sat("a & ~a".to_formula(&f), &f));
/// ```
pub fn is_sat(formula: EncodedFormula, f: &FormulaFactory) -> bool {
    match formula.unpack(f) {
        Formula::True => true,
        Formula::False => false,
        _ => TruthTable::generate(formula, f).has_true_row(),
    }
}

/// A predicate indicating whether a given formula is a tautology, that is,
/// always holds, regardless of the assignment. An example for a tautology is
/// `(A & B) | (~A & B) | (A & ~B) | (~A & ~B)`.
///
/// ```
/// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
/// # use logic_reasoner::operations::predicates::is_tautology;
/// let f = FormulaFactory::new();
///
/// let formula = "(a & b) | (~a & b) | (a & ~b) | (~a & ~b)".to_formula(&f);
///
/// assert!(is_tautology(formula, &f));
/// ```
///
/// Two formulas are semantically equivalent if their equivalence is a
/// tautology:
///
/// ```
/// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
/// # use logic_reasoner::operations::predicates::is_tautology;
/// let f = FormulaFactory::new();
///
/// let f1 = "a => b".to_formula(&f);
/// let f2 = "~a | b".to_formula(&f);
///
/// assert!(is_tautology(f.equivalence(f1, f2), &f));
/// ```
pub fn is_tautology(formula: EncodedFormula, f: &FormulaFactory) -> bool {
    matches!(classify(formula, &TruthTable::generate(formula, f), f), Classification::Tautology | Classification::ConstantTrue)
}

/// A predicate indicating whether a given formula is a contradiction, that
/// is, is false for every assignment.
pub fn is_contradiction(formula: EncodedFormula, f: &FormulaFactory) -> bool {
    !is_sat(formula, f)
}

/// A predicate indicating whether a given formula is a contingency, that is,
/// is true for some assignments and false for others.
pub fn is_contingency(formula: EncodedFormula, f: &FormulaFactory) -> bool {
    classify(formula, &TruthTable::generate(formula, f), f) == Classification::Contingency
}

/// Classification of a formula by its truth table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// A formula without variables which is `⊤`.
    ConstantTrue,
    /// A formula without variables which is `⊥`.
    ConstantFalse,
    /// A formula without table columns which is no constant, with its
    /// textual form.
    Residual(String),
    /// True under every assignment.
    Tautology,
    /// True under some assignments, false under others.
    Contingency,
    /// False under every assignment.
    Contradiction,
}

impl Classification {
    /// Returns the confidence reported for this classification.
    pub const fn confidence(&self) -> f64 {
        match self {
            Self::ConstantTrue | Self::ConstantFalse => 1.0,
            Self::Residual(_) => 0.8,
            Self::Tautology | Self::Contradiction => 0.9,
            Self::Contingency => 0.7,
        }
    }

    /// Returns the conclusion reported for this classification.
    pub fn conclusion(&self) -> String {
        match self {
            Self::ConstantTrue => "The statement is always true.".into(),
            Self::ConstantFalse => "The statement is always false.".into(),
            Self::Residual(value) => format!("The statement evaluates to: {value}"),
            Self::Tautology => "The statement is always true (tautology).".into(),
            Self::Contingency => "The statement depends on the truth values of its components.".into(),
            Self::Contradiction => "The statement is always false (contradiction).".into(),
        }
    }

    /// Returns the findings leading to this classification, one per line.
    pub const fn findings(&self) -> &'static str {
        match self {
            Self::ConstantTrue => "The expression is always true.\n",
            Self::ConstantFalse => "The expression is always false.\n",
            Self::Residual(_) => "The expression has a constant value.\n",
            Self::Tautology => "The expression is satisfiable (not a contradiction).\nThe expression is a tautology (always true).\n",
            Self::Contingency => {
                "The expression is satisfiable (not a contradiction).\nThe expression is a contingency (sometimes true, sometimes false).\n"
            }
            Self::Contradiction => "The expression is a contradiction (never true).\n",
        }
    }

    /// Returns `true` if there is an assignment making the formula true.
    pub const fn is_satisfiable(&self) -> bool {
        matches!(self, Self::ConstantTrue | Self::Tautology | Self::Contingency)
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ConstantTrue => "constant true",
            Self::ConstantFalse => "constant false",
            Self::Residual(_) => "residual",
            Self::Tautology => "tautology",
            Self::Contingency => "contingency",
            Self::Contradiction => "contradiction",
        })
    }
}

/// Classifies `formula` by its truth table `table`.
///
/// A table without columns classifies the formula by its value. Otherwise the
/// formula is satisfiable if the table has a `true` row, and its negation is
/// satisfiable if the table has a `false` row. Since the classification only
/// reads the table, the two never disagree.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_reasoner::datastructures::TruthTable;
/// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
/// # use logic_reasoner::operations::predicates::{classify, Classification};
/// let f = FormulaFactory::new();
///
/// let formula = "P | ~P".to_formula(&f);
/// let table = TruthTable::generate(formula, &f);
///
/// assert_eq!(classify(formula, &table, &f), Classification::Tautology);
/// assert_eq!(classify(f.verum(), &TruthTable::generate(f.verum(), &f), &f), Classification::ConstantTrue);
/// ```
pub fn classify(formula: EncodedFormula, table: &TruthTable, f: &FormulaFactory) -> Classification {
    if table.variables().is_empty() {
        return match formula.unpack(f) {
            Formula::True => Classification::ConstantTrue,
            Formula::False => Classification::ConstantFalse,
            _ => Classification::Residual(formula.to_string(f)),
        };
    }
    match (table.has_true_row(), table.has_false_row()) {
        (true, false) => Classification::Tautology,
        (true, true) => Classification::Contingency,
        (false, _) => Classification::Contradiction,
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::TruthTable;
    use crate::formulas::ToFormula;
    use crate::util::test_util::F;

    use super::*;

    #[test]
    fn test_sat() {
        let ff = F::new();
        let f = &ff.f;
        assert!(is_sat(ff.TRUE, f));
        assert!(!is_sat(ff.FALSE, f));
        assert!(is_sat(ff.A, f));
        assert!(is_sat(ff.NA, f));
        assert!(is_sat(ff.AND1, f));
        assert!(is_sat(ff.OR3, f));
        assert!(is_sat(ff.IMP2, f));
        assert!(!is_sat(ff.CONTRADICTION, f));
        assert!(!is_sat("(a | b) & ~a & ~b".to_formula(f), f));
    }

    #[test]
    fn test_tautology() {
        let ff = F::new();
        let f = &ff.f;
        assert!(is_tautology(ff.TRUE, f));
        assert!(!is_tautology(ff.FALSE, f));
        assert!(is_tautology(ff.EXCLUDED_MIDDLE, f));
        assert!(is_tautology(ff.MODUS_PONENS, f));
        assert!(!is_tautology(ff.IMP1, f));
        assert!(is_tautology("(a <=> b) <=> (a => b) & (b => a)".to_formula(f), f));
        assert!(is_tautology("~(a & b) <=> ~a | ~b".to_formula(f), f));
    }

    #[test]
    fn test_contradiction_and_contingency() {
        let ff = F::new();
        let f = &ff.f;
        assert!(is_contradiction(ff.FALSE, f));
        assert!(is_contradiction(ff.CONTRADICTION, f));
        assert!(!is_contradiction(ff.EQ1, f));
        assert!(is_contingency(ff.EQ1, f));
        assert!(is_contingency(ff.OR1, f));
        assert!(!is_contingency(ff.EXCLUDED_MIDDLE, f));
        assert!(!is_contingency(ff.TRUE, f));
    }

    #[test]
    fn test_classify() {
        let ff = F::new();
        let f = &ff.f;
        let classify_formula = |formula| classify(formula, &TruthTable::generate(formula, f), f);
        assert_eq!(classify_formula(ff.TRUE), Classification::ConstantTrue);
        assert_eq!(classify_formula(ff.FALSE), Classification::ConstantFalse);
        assert_eq!(classify_formula(ff.EXCLUDED_MIDDLE), Classification::Tautology);
        assert_eq!(classify_formula(ff.CONTRADICTION), Classification::Contradiction);
        assert_eq!(classify_formula(ff.IMP1), Classification::Contingency);
    }

    #[test]
    fn test_classify_without_columns() {
        let ff = F::new();
        let f = &ff.f;
        let table = TruthTable::generate_over(ff.AND1, &[], f);
        assert_eq!(classify(ff.AND1, &table, f), Classification::Residual("a ∧ b".into()));
    }

    #[test]
    fn test_texts() {
        assert_eq!(Classification::Tautology.conclusion(), "The statement is always true (tautology).");
        assert_eq!(Classification::Residual("a".into()).conclusion(), "The statement evaluates to: a");
        assert!((Classification::Contingency.confidence() - 0.7).abs() < f64::EPSILON);
        assert!((Classification::ConstantFalse.confidence() - 1.0).abs() < f64::EPSILON);
        assert!(Classification::Contradiction.findings().contains("never true"));
        assert!(!Classification::Contradiction.is_satisfiable());
        assert_eq!(Classification::Contingency.to_string(), "contingency");
    }
}
