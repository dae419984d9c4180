use std::collections::BTreeSet;

use itertools::Itertools;

use crate::formulas::{EncodedFormula, Formula, FormulaFactory, Variable};

/// Returns all variables occurring in `formula`.
///
/// The set is ordered by the creation order of the variables in `f`.
///
/// # Example
///
/// Basic usage:
/// ```
/// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
/// # use logic_reasoner::operations::functions::variables;
/// # use std::collections::BTreeSet;
/// let f = FormulaFactory::new();
///
/// let formula = "(a => b) & ~a & $true".to_formula(&f);
///
/// assert_eq!(variables(formula, &f), BTreeSet::from([f.var("a"), f.var("b")]));
/// ```
pub fn variables(formula: EncodedFormula, f: &FormulaFactory) -> BTreeSet<Variable> {
    let mut result = BTreeSet::new();
    collect_variables(formula, f, &mut result);
    result
}

/// Returns all variables occurring in `formula`, sorted lexicographically by
/// their names. This is the column order of truth tables.
pub fn sorted_variables(formula: EncodedFormula, f: &FormulaFactory) -> Vec<Variable> {
    variables(formula, f).into_iter().sorted_by_key(|var| var.name(f)).collect()
}

fn collect_variables(formula: EncodedFormula, f: &FormulaFactory, result: &mut BTreeSet<Variable>) {
    match formula.unpack(f) {
        Formula::Lit(var) => {
            result.insert(var);
        }
        Formula::Not(op) => collect_variables(op, f, result),
        Formula::Impl((left, right)) | Formula::Equiv((left, right)) => {
            collect_variables(left, f, result);
            collect_variables(right, f, result);
        }
        Formula::And(ops) | Formula::Or(ops) => {
            for &op in ops.iter() {
                collect_variables(op, f, result);
            }
        }
        Formula::True | Formula::False => {}
    }
}
