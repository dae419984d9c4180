use crate::datastructures::Assignment;
use crate::formulas::{EncodedFormula, Formula, FormulaFactory};

/// Restricts this formula with the given assignment.
///
/// Every assigned variable is replaced by its value and the formula is
/// rebuilt through the factory, which folds all constants. If every variable
/// of the formula is assigned, the result is `⊤` or `⊥`. Otherwise the
/// result is the residual formula over the unassigned variables.
///
/// [`FormulaFactory`] also provides this transformation as a method. So you
/// can also use `f.restrict(formula, assignment)` instead of `restrict(formula,
/// assignment, f)`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
/// # use logic_reasoner::datastructures::Assignment;
/// # use logic_reasoner::operations::transformations::restrict;
/// let f = FormulaFactory::new();
///
/// let a = f.var("a");
/// let formula = "a & b".to_formula(&f);
///
/// let assignment1 = Assignment::from_variables(&[a], &[]);
/// let assignment2 = Assignment::from_variables(&[], &[a]);
///
/// assert_eq!(restrict(formula, &assignment1, &f).to_string(&f), "b");
/// assert_eq!(restrict(formula, &assignment2, &f).to_string(&f), "⊥");
/// ```
pub fn restrict(formula: EncodedFormula, assignment: &Assignment, f: &FormulaFactory) -> EncodedFormula {
    use Formula::{And, Equiv, False, Impl, Lit, Not, Or, True};
    match formula.unpack(f) {
        Lit(var) => assignment.restrict_var(var),
        Equiv((left, right)) => {
            let rec_left = restrict(left, assignment, f);
            let rec_right = restrict(right, assignment, f);
            f.equivalence(rec_left, rec_right)
        }
        Impl((left, right)) => {
            let rec_left = restrict(left, assignment, f);
            let rec_right = restrict(right, assignment, f);
            f.implication(rec_left, rec_right)
        }
        Or(ops) => f.or(ops.iter().map(|&op| restrict(op, assignment, f))),
        And(ops) => f.and(ops.iter().map(|&op| restrict(op, assignment, f))),
        Not(op) => {
            let rec_op = restrict(op, assignment, f);
            f.not(rec_op)
        }
        True | False => formula,
    }
}
