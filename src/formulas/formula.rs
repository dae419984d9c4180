use std::collections::BTreeSet;
use std::sync::Arc;

use itertools::Itertools;

use crate::formulas::{FormulaFactory, Variable};
use crate::operations::functions;
use crate::util::exceptions::panic_foreign_formula;

use super::formula_cache::formula_encoding::FormulaEncoding;

/// Specifies all types a [`EncodedFormula`] can have.
///
/// You can get the type of an `EncodedFormula` by calling [`EncodedFormula::formula_type()`].
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum FormulaType {
    /// Equivalence
    Equiv,
    /// Implication
    Impl,
    /// Disjunction
    Or,
    /// Conjunction
    And,
    /// Negation
    Not,
    /// Variable
    Lit,
    /// Constant true
    True,
    /// Constant false
    False,
}

/// A unpacked representation of an [`EncodedFormula`]. Allows access to the
/// operands of the formula.
///
/// You can obtain a `Formula` from a `EncodedFormula` by calling [`EncodedFormula::unpack()`].
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub enum Formula {
    /// Operands of an equivalence
    Equiv((EncodedFormula, EncodedFormula)),
    /// Operands of an implication
    Impl((EncodedFormula, EncodedFormula)),
    /// All operands of a disjunction (at least two)
    Or(Arc<[EncodedFormula]>),
    /// All operands of a conjunction (at least two)
    And(Arc<[EncodedFormula]>),
    /// Operand of a negation
    Not(EncodedFormula),
    /// Variable
    Lit(Variable),
    /// Constant true
    True,
    /// Constant false
    False,
}

/// `EncodedFormula` represents a propositional formula.
///
/// An `EncodedFormula` does not contain much information itself. It is a
/// reference into the [`FormulaFactory`] which stores the structure of the
/// formula. This means that **an `EncodedFormula` is only useful in the
/// context of the `FormulaFactory` it was created in.**
///
/// Since the factory interns every node, two formulas of the same factory
/// are structurally equal if and only if their `EncodedFormula`s are equal.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub struct EncodedFormula {
    pub(crate) encoding: FormulaEncoding,
}

impl EncodedFormula {
    /// Creates a new constant `true` or `false` based on `value`.
    ///
    /// A constant is the only type of formula that does not need a
    /// [`FormulaFactory`].
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::formulas::{EncodedFormula, FormulaType};
    /// let verum = EncodedFormula::constant(true);
    /// let falsum = EncodedFormula::constant(false);
    ///
    /// assert_eq!(verum.formula_type(), FormulaType::True);
    /// assert_eq!(falsum.formula_type(), FormulaType::False);
    /// ```
    pub const fn constant(value: bool) -> Self {
        let ty = if value { FormulaType::True } else { FormulaType::False };
        FormulaEncoding::encode_type(ty).to_formula()
    }

    /// Returns the type of the formula as a `FormulaType` enum.
    pub const fn formula_type(self) -> FormulaType {
        self.encoding.formula_type()
    }

    /// Unpacks an `EncodedFormula` into a [`Formula`] enum, providing access to
    /// the structure of the formula.
    ///
    /// # Panics
    ///
    /// Panics if the formula was not created by `f`. Use
    /// [`EncodedFormula::try_unpack`] if that can happen.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::formulas::{FormulaFactory, Formula, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula = "a -> b".to_formula(&f);
    ///
    /// match formula.unpack(&f) {
    ///     Formula::Impl((left, right)) => {
    ///         assert_eq!(left, f.variable("a"));
    ///         assert_eq!(right, f.variable("b"));
    ///     }
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn unpack(self, f: &FormulaFactory) -> Formula {
        self.try_unpack(f).unwrap_or_else(|| panic_foreign_formula(self))
    }

    /// Unpacks an `EncodedFormula` like [`EncodedFormula::unpack`], but
    /// returns `None` if the formula is unknown to `f`.
    pub fn try_unpack(self, f: &FormulaFactory) -> Option<Formula> {
        match self.formula_type() {
            FormulaType::Equiv => f.equivs.get(self.encoding).map(Formula::Equiv),
            FormulaType::Impl => f.impls.get(self.encoding).map(Formula::Impl),
            FormulaType::Or => f.ors.get(self.encoding).map(Formula::Or),
            FormulaType::And => f.ands.get(self.encoding).map(Formula::And),
            FormulaType::Not => f.nots.get(self.encoding).map(Formula::Not),
            FormulaType::Lit => (self.encoding.slot() < f.variables.len()).then(|| Formula::Lit(Variable::from(self.encoding))),
            FormulaType::True => Some(Formula::True),
            FormulaType::False => Some(Formula::False),
        }
    }

    /// Returns `true` if the formula is a constant (`⊤` or `⊥`).
    pub const fn is_constant(self) -> bool {
        matches!(self.formula_type(), FormulaType::True | FormulaType::False)
    }

    /// Returns `true` if the formula is the constant `⊤`.
    pub const fn is_verum(self) -> bool {
        matches!(self.formula_type(), FormulaType::True)
    }

    /// Returns `true` if the formula is the constant `⊥`.
    pub const fn is_falsum(self) -> bool {
        matches!(self.formula_type(), FormulaType::False)
    }

    /// Returns `true` if the formula is a single variable.
    pub const fn is_variable(self) -> bool {
        matches!(self.formula_type(), FormulaType::Lit)
    }

    /// Returns `true` if the formula is a negation.
    pub const fn is_not(self) -> bool {
        matches!(self.formula_type(), FormulaType::Not)
    }

    /// Returns `true` if the formula is a conjunction.
    pub const fn is_and(self) -> bool {
        matches!(self.formula_type(), FormulaType::And)
    }

    /// Returns `true` if the formula is a disjunction.
    pub const fn is_or(self) -> bool {
        matches!(self.formula_type(), FormulaType::Or)
    }

    /// Returns `true` if the formula is an implication.
    pub const fn is_impl(self) -> bool {
        matches!(self.formula_type(), FormulaType::Impl)
    }

    /// Returns `true` if the formula is an equivalence.
    pub const fn is_equiv(self) -> bool {
        matches!(self.formula_type(), FormulaType::Equiv)
    }

    /// Returns `true` if the formula is a conjunction or disjunction.
    pub const fn is_nary_operator(self) -> bool {
        matches!(self.formula_type(), FormulaType::And | FormulaType::Or)
    }

    /// Returns `true` if the formula is an implication or equivalence.
    pub const fn is_binary_operator(self) -> bool {
        matches!(self.formula_type(), FormulaType::Impl | FormulaType::Equiv)
    }

    /// Returns the formula as a [`Variable`], or `None` if it is no variable.
    pub fn as_variable(self) -> Option<Variable> {
        self.is_variable().then(|| Variable::from(self.encoding))
    }

    /// Returns the direct operands of this formula. Constants and variables
    /// have no operands.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula = "a & ~b & c".to_formula(&f);
    ///
    /// assert_eq!(formula.operands(&f), vec![f.variable("a"), "~b".to_formula(&f), f.variable("c")]);
    /// ```
    pub fn operands(self, f: &FormulaFactory) -> Vec<EncodedFormula> {
        match self.unpack(f) {
            Formula::Equiv((left, right)) | Formula::Impl((left, right)) => vec![left, right],
            Formula::Or(ops) | Formula::And(ops) => ops.to_vec(),
            Formula::Not(op) => vec![op],
            Formula::Lit(_) | Formula::True | Formula::False => vec![],
        }
    }

    /// Returns all variables occurring in this formula.
    ///
    /// The set is ordered by creation order in the factory. Use
    /// [`EncodedFormula::sorted_variables`] for the name order used by truth
    /// tables.
    pub fn variables(self, f: &FormulaFactory) -> BTreeSet<Variable> {
        functions::variables(self, f)
    }

    /// Returns all variables occurring in this formula, sorted
    /// lexicographically by their names.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula = "c | (b => a) | b".to_formula(&f);
    ///
    /// assert_eq!(formula.sorted_variables(&f), vec![f.var("a"), f.var("b"), f.var("c")]);
    /// ```
    pub fn sorted_variables(self, f: &FormulaFactory) -> Vec<Variable> {
        functions::sorted_variables(self, f)
    }

    /// Returns a set with all names of the variables in this formula.
    pub fn string_variables(self, f: &FormulaFactory) -> BTreeSet<Arc<str>> {
        self.variables(f).into_iter().map(|var| var.name(f)).collect()
    }

    /// Creates a string representation of this formula in symbolic notation.
    ///
    /// Operands are put in parentheses only where the precedence requires it,
    /// so that the string parses back into the same formula.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula = "(a | b) & ~(c -> d)".to_formula(&f);
    ///
    /// assert_eq!(formula.to_string(&f), "(a ∨ b) ∧ ¬(c → d)");
    /// ```
    pub fn to_string(self, f: &FormulaFactory) -> String {
        match self.unpack(f) {
            Formula::True => "⊤".to_string(),
            Formula::False => "⊥".to_string(),
            Formula::Lit(var) => var.name(f).to_string(),
            Formula::And(ops) => self.operands_to_string(&ops, " ∧ ", f),
            Formula::Or(ops) => self.operands_to_string(&ops, " ∨ ", f),
            Formula::Not(op) => {
                if op.precedence() > self.precedence() {
                    format!("¬{}", op.to_string(f))
                } else {
                    format!("¬({})", op.to_string(f))
                }
            }
            Formula::Impl((left, right)) => self.operands_to_string(&[left, right], " → ", f),
            Formula::Equiv((left, right)) => self.operands_to_string(&[left, right], " ≡ ", f),
        }
    }

    pub(crate) const fn precedence(self) -> u8 {
        match self.formula_type() {
            FormulaType::Impl => 1_u8,
            FormulaType::Equiv => 2_u8,
            FormulaType::Or => 3_u8,
            FormulaType::And => 4_u8,
            FormulaType::Not => 5_u8,
            FormulaType::Lit => LIT_PRECEDENCE,
            FormulaType::True | FormulaType::False => 7_u8,
        }
    }

    fn operands_to_string(self, operands: &[EncodedFormula], op_str: &str, f: &FormulaFactory) -> String {
        operands
            .iter()
            .map(|op| if self.precedence() >= op.precedence() { format!("({})", op.to_string(f)) } else { op.to_string(f) })
            .join(op_str)
    }
}

impl From<FormulaEncoding> for EncodedFormula {
    fn from(encoding: FormulaEncoding) -> Self {
        Self { encoding }
    }
}

/// Trait for converting a type into a formula of the given [`FormulaFactory`].
pub trait ToFormula {
    /// Converts `self` into a formula of `f`.
    fn to_formula(&self, f: &FormulaFactory) -> EncodedFormula;
}

impl ToFormula for str {
    /// Parses a string into a formula.
    ///
    /// It only works if the passed string is a valid formula. If you are not
    /// sure whether the input is valid, you should use [`parse`].
    ///
    /// [`parse`]: FormulaFactory::parse
    ///
    /// # Panics
    ///
    /// This function panics if the input string is not a valid formula.
    fn to_formula(&self, f: &FormulaFactory) -> EncodedFormula {
        match f.parse(self) {
            Ok(formula) => formula,
            Err(error) => panic!("{error}"),
        }
    }
}

impl ToFormula for EncodedFormula {
    fn to_formula(&self, _: &FormulaFactory) -> EncodedFormula {
        *self
    }
}

pub(crate) const LIT_PRECEDENCE: u8 = 6_u8;
