use std::collections::BTreeMap;
use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::datastructures::Assignment;
use crate::errors::ReasonError;
use crate::formulas::{EncodedFormula, Formula, FormulaFactory, Variable};
use crate::handlers::{ComputationHandler, ComputationResult, NopHandler, TableEvent};

/// The value of a formula in one row of a truth table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowResult {
    /// The formula reduced to a constant.
    Value(bool),
    /// The formula did not reduce to a constant, this is its residual.
    Unresolved(String),
}

impl RowResult {
    /// Returns the boolean value, `None` if the row is unresolved.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Unresolved(_) => None,
        }
    }

    /// Returns `true` if the row evaluated to `true`.
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Value(true))
    }

    /// Returns `true` if the row evaluated to `false`.
    pub const fn is_false(&self) -> bool {
        matches!(self, Self::Value(false))
    }
}

impl Display for RowResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Unresolved(residual) => f.write_str(residual),
        }
    }
}

/// One row of a [`TruthTable`]: the values of all columns, ordered by
/// variable name, and the value of the formula.
///
/// A row serializes as a flat record `{"A": true, "B": false, "Result": true}`.
/// Hence a column must not be named `Result`. The parser rejects this name,
/// so tables of parsed formulas never contain such a column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "FlatRow", into = "FlatRow")]
pub struct TruthTableRow {
    values: Vec<(String, bool)>,
    result: RowResult,
}

impl TruthTableRow {
    /// Creates a new row. The values are sorted by name.
    pub fn new(values: impl IntoIterator<Item = (String, bool)>, result: RowResult) -> Self {
        Self { values: values.into_iter().sorted().collect(), result }
    }

    /// Returns the values of the columns, ordered by name.
    pub fn values(&self) -> &[(String, bool)] {
        &self.values
    }

    /// Returns the value of the column `name`.
    pub fn value(&self, name: &str) -> Option<bool> {
        self.values.iter().find(|(column, _)| column == name).map(|&(_, value)| value)
    }

    /// Returns the value of the formula in this row.
    pub const fn result(&self) -> &RowResult {
        &self.result
    }
}

impl Display for TruthTableRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self.values.iter().map(|(name, value)| format!("{name}={value}")).join(", ");
        write!(f, "{values} | {}", self.result)
    }
}

#[derive(Serialize, Deserialize)]
struct FlatRow {
    #[serde(flatten)]
    values: BTreeMap<String, bool>,
    #[serde(rename = "Result")]
    result: RowResult,
}

impl From<FlatRow> for TruthTableRow {
    fn from(row: FlatRow) -> Self {
        Self { values: row.values.into_iter().collect(), result: row.result }
    }
}

impl From<TruthTableRow> for FlatRow {
    fn from(row: TruthTableRow) -> Self {
        Self { values: row.values.into_iter().collect(), result: row.result }
    }
}

/// The truth table of a formula.
///
/// The columns are the variables of the formula, sorted lexicographically by
/// name. With `n` columns the table has `2^n` rows. Row `i` assigns the
/// zero-padded `n`-bit binary representation of `i` to the columns, the most
/// significant bit to the first column, `1` meaning `true`. A formula without
/// variables has an empty table.
///
/// Every row is evaluated by [restricting](crate::operations::transformations::restrict)
/// the formula with the row's assignment. If this does not yield a constant,
/// the row keeps the residual formula as [`RowResult::Unresolved`]. If the
/// factory is configured to
/// [skip unresolved rows](crate::formulas::FormulaFactoryConfig::skip_unresolved_rows),
/// such a row is logged and left out instead.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_reasoner::datastructures::{RowResult, TruthTable};
/// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
/// let f = FormulaFactory::new();
///
/// let table = TruthTable::generate("A -> B".to_formula(&f), &f);
///
/// assert_eq!(table.variables(), ["A", "B"]);
/// let results: Vec<_> = table.rows().iter().map(|row| row.result().clone()).collect();
/// assert_eq!(
///     results,
///     [RowResult::Value(true), RowResult::Value(true), RowResult::Value(false), RowResult::Value(true)]
/// );
/// assert_eq!(table.rows()[2].value("A"), Some(true));
/// assert_eq!(table.rows()[2].value("B"), Some(false));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Generates the truth table of `formula` over all its variables.
    ///
    /// # Panics
    ///
    /// Panics if the formula has at least as many variables as `usize` has
    /// bits.
    pub fn generate(formula: EncodedFormula, f: &FormulaFactory) -> Self {
        Self::generate_with_handler(formula, f, &mut NopHandler).result().unwrap_or_default()
    }

    /// Generates the truth table of `formula` with the given columns.
    ///
    /// The columns are sorted by name, duplicates are removed. Variables of
    /// the formula which are no column stay unassigned, so the rows evaluate
    /// to residual formulas.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::datastructures::{RowResult, TruthTable};
    /// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula = "a & b".to_formula(&f);
    /// let table = TruthTable::generate_over(formula, &[f.var("a")], &f);
    ///
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.rows()[0].result(), &RowResult::Value(false));
    /// assert_eq!(table.rows()[1].result(), &RowResult::Unresolved("b".into()));
    /// ```
    pub fn generate_over(formula: EncodedFormula, variables: &[Variable], f: &FormulaFactory) -> Self {
        let columns = variables.iter().copied().unique().sorted_by_key(|var| var.name(f)).collect();
        Self::enumerate(formula, columns, f, &mut NopHandler).result().unwrap_or_default()
    }

    /// Generates the truth table of `formula` over all its variables. The
    /// handler is asked before the generation and before each row whether to
    /// resume. If it aborts, the rows generated so far are returned as
    /// [`ComputationResult::Partial`].
    pub fn generate_with_handler(
        formula: EncodedFormula,
        f: &FormulaFactory,
        handler: &mut dyn ComputationHandler,
    ) -> ComputationResult<Self> {
        Self::enumerate(formula, formula.sorted_variables(f), f, handler)
    }

    /// Evaluates `formula` under `assignment`.
    ///
    /// Returns [`ReasonError::Evaluation`] if the formula does not reduce to
    /// a constant and the factory is configured to skip unresolved rows.
    pub fn evaluate(formula: EncodedFormula, assignment: &Assignment, f: &FormulaFactory) -> Result<RowResult, ReasonError> {
        let restricted = f.restrict(formula, assignment);
        match restricted.unpack(f) {
            Formula::True => Ok(RowResult::Value(true)),
            Formula::False => Ok(RowResult::Value(false)),
            _ if f.config().skip_unresolved_rows => Err(ReasonError::Evaluation(format!(
                "{} does not reduce to a constant under {}",
                restricted.to_string(f),
                assignment.to_string(f)
            ))),
            _ => Ok(RowResult::Unresolved(restricted.to_string(f))),
        }
    }

    fn enumerate(
        formula: EncodedFormula,
        columns: Vec<Variable>,
        f: &FormulaFactory,
        handler: &mut dyn ComputationHandler,
    ) -> ComputationResult<Self> {
        let n = columns.len();
        assert!(n < usize::BITS as usize, "a truth table over {n} variables cannot be enumerated");
        handler.started();
        if !handler.should_resume(TableEvent::ComputationStarted(n)) {
            return ComputationResult::Canceled(TableEvent::ComputationStarted(n));
        }
        let names: Vec<String> = columns.iter().map(|var| var.name(f).to_string()).collect();
        let mut table = Self { variables: names.clone(), rows: Vec::new() };
        if n == 0 {
            return ComputationResult::Ok(table);
        }
        tracing::debug!(variables = n, rows = 1_usize << n, "generating truth table");
        for i in 0..(1_usize << n) {
            if !handler.should_resume(TableEvent::NextRow(i)) {
                tracing::warn!(rows = table.rows.len(), "truth table generation aborted");
                return ComputationResult::Partial(table, TableEvent::NextRow(i));
            }
            let bits: Vec<bool> = (0..n).map(|j| (i >> (n - 1 - j)) & 1 == 1).collect();
            let assignment: Assignment = columns.iter().copied().zip(bits.iter().copied()).collect();
            match Self::evaluate(formula, &assignment, f) {
                Ok(result) => {
                    let values = names.iter().cloned().zip(bits);
                    table.rows.push(TruthTableRow { values: values.collect(), result });
                }
                Err(error) => tracing::warn!(row = i, %error, "skipping truth table row"),
            }
        }
        ComputationResult::Ok(table)
    }

    /// Returns the names of the columns, sorted lexicographically.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Consumes the table and returns its rows.
    pub fn into_rows(self) -> Vec<TruthTableRow> {
        self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if the formula evaluates to `true` in some row.
    pub fn has_true_row(&self) -> bool {
        self.rows.iter().any(|row| row.result.is_true())
    }

    /// Returns `true` if the formula evaluates to `false` in some row.
    pub fn has_false_row(&self) -> bool {
        self.rows.iter().any(|row| row.result.is_false())
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::formulas::{FormulaFactoryConfig, ToFormula};
    use crate::handlers::{RowLimitHandler, Timer, TimeoutHandler};
    use crate::util::test_util::{bool_results, results, F};

    use super::*;

    #[test]
    fn test_constants_have_empty_tables() {
        let ff = F::new();
        assert!(TruthTable::generate(ff.TRUE, &ff.f).is_empty());
        assert!(TruthTable::generate(ff.FALSE, &ff.f).is_empty());
        assert!(TruthTable::generate(ff.TRUE, &ff.f).variables().is_empty());
    }

    #[test]
    fn test_single_variable() {
        let ff = F::new();
        let table = TruthTable::generate(ff.A, &ff.f);
        assert_eq!(table.variables(), ["a"]);
        assert_eq!(table.rows()[0].values(), [("a".to_string(), false)]);
        assert_eq!(table.rows()[1].values(), [("a".to_string(), true)]);
        assert_eq!(bool_results(&table), [false, true]);
        assert_eq!(bool_results(&TruthTable::generate(ff.NA, &ff.f)), [true, false]);
    }

    #[test]
    fn test_binary_operators() {
        let ff = F::new();
        let f = &ff.f;
        assert_eq!(bool_results(&TruthTable::generate(ff.AND1, f)), [false, false, false, true]);
        assert_eq!(bool_results(&TruthTable::generate(f.or(&[ff.A, ff.B]), f)), [false, true, true, true]);
        assert_eq!(bool_results(&TruthTable::generate(ff.IMP1, f)), [true, true, false, true]);
        assert_eq!(bool_results(&TruthTable::generate(ff.EQ1, f)), [true, false, false, true]);
        assert_eq!(bool_results(&TruthTable::generate(ff.NOT1, f)), [true, true, true, false]);
    }

    #[test]
    fn test_row_order() {
        let f = FormulaFactory::new();
        let table = TruthTable::generate("c | b | a".to_formula(&f), &f);
        assert_eq!(table.variables(), ["a", "b", "c"]);
        assert_eq!(table.len(), 8);
        let row5 = &table.rows()[5];
        assert_eq!(row5.value("a"), Some(true));
        assert_eq!(row5.value("b"), Some(false));
        assert_eq!(row5.value("c"), Some(true));
        assert_eq!(row5.value("d"), None);
        let distinct: HashSet<_> = table.rows().iter().map(TruthTableRow::values).collect();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn test_complementary_operands() {
        let ff = F::new();
        let f = &ff.f;
        let excluded_middle = TruthTable::generate(ff.EXCLUDED_MIDDLE, f);
        assert_eq!(bool_results(&excluded_middle), [true, true]);
        assert!(excluded_middle.has_true_row());
        assert!(!excluded_middle.has_false_row());
        let contradiction = TruthTable::generate(ff.CONTRADICTION, f);
        assert_eq!(bool_results(&contradiction), [false, false]);
        assert!(!contradiction.has_true_row());
    }

    #[test]
    fn test_deterministic() {
        let ff = F::new();
        assert_eq!(TruthTable::generate(ff.IMP3, &ff.f), TruthTable::generate(ff.IMP3, &ff.f));
        let g = FormulaFactory::new();
        let other = "(b & a) => (y | x)".to_formula(&g);
        assert_eq!(TruthTable::generate(ff.IMP3, &ff.f), TruthTable::generate(other, &g));
    }

    #[test]
    fn test_generate_over() {
        let ff = F::new();
        let f = &ff.f;
        let b = f.var("b");
        let a = f.var("a");
        let table = TruthTable::generate_over(ff.IMP1, &[b, a, b], f);
        assert_eq!(table, TruthTable::generate(ff.IMP1, f));
        let table = TruthTable::generate_over(ff.OR1, &[f.var("x")], f);
        assert_eq!(results(&table), [None, Some(true)]);
        assert_eq!(table.rows()[0].result(), &RowResult::Unresolved("y".into()));
        let c = f.var("c");
        let table = TruthTable::generate_over(ff.A, &[a, c], f);
        assert_eq!(bool_results(&table), [false, false, true, true]);
    }

    #[test]
    fn test_skip_unresolved_rows() {
        let f = FormulaFactory::with_config(FormulaFactoryConfig::new().skip_unresolved_rows(true));
        let formula = "x | y".to_formula(&f);
        let table = TruthTable::generate_over(formula, &[f.var("x")], &f);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].value("x"), Some(true));
        let assignment = Assignment::from_variables(&[], &[f.var("x")]);
        assert!(matches!(TruthTable::evaluate(formula, &assignment, &f), Err(ReasonError::Evaluation(_))));
    }

    #[test]
    fn test_handlers() {
        let ff = F::new();
        let result = TruthTable::generate_with_handler(ff.IMP3, &ff.f, &mut RowLimitHandler::new(3));
        assert!(result.is_partial());
        assert_eq!(result.clone().cancel_cause(), Some(TableEvent::NextRow(3)));
        assert_eq!(result.result().map(|table| table.len()), Some(3));

        let mut handler = TimeoutHandler::new(Timer::SingleTimeout(std::time::Duration::ZERO));
        let result = TruthTable::generate_with_handler(ff.IMP3, &ff.f, &mut handler);
        assert!(result.is_canceled());

        let result = TruthTable::generate_with_handler(ff.IMP3, &ff.f, &mut NopHandler);
        assert_eq!(result.result().map(|table| table.len()), Some(16));
    }

    #[test]
    fn test_row_serialization() {
        let ff = F::new();
        let table = TruthTable::generate(ff.IMP1, &ff.f);
        let json = serde_json::to_string(&table.rows()[2]).unwrap();
        assert_eq!(json, r#"{"a":true,"b":false,"Result":false}"#);
        let row: TruthTableRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, table.rows()[2]);
        let unresolved = TruthTableRow::new([("x".to_string(), false)], RowResult::Unresolved("y".into()));
        assert_eq!(serde_json::to_string(&unresolved).unwrap(), r#"{"x":false,"Result":"y"}"#);
    }

    #[test]
    fn test_display() {
        let ff = F::new();
        let table = TruthTable::generate(ff.NA, &ff.f);
        assert_eq!(table.to_string(), "a=false | true\na=true | false\n");
    }
}
