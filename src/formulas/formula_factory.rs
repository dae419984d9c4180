use std::borrow::Borrow;
use std::sync::Arc;

use crate::datastructures::Assignment;
use crate::errors::ReasonError;
use crate::formulas::{EncodedFormula, Formula, FormulaFactoryConfig, FormulaType, Variable};
use crate::operations::transformations;
use crate::parser;
use crate::util::exceptions::panic_foreign_formula;

use super::formula_cache::simple_cache::SimpleCache;

/// The formula factory is the central object for creating and storing
/// formulas.
///
/// Every variable name and every formula node is interned in the factory.
/// Formulas are therefore handed out as lightweight [`EncodedFormula`]
/// references, which are only meaningful together with the factory that
/// created them.
///
/// A factory is meant to be owned by one reasoning session: the name cache
/// only grows, so sharing one factory between unrelated requests leaks their
/// variables into each other. Creating a new factory starts with an empty
/// cache.
///
/// The factory does the following simplifications when creating formulas:
/// - constants are folded: `a & $true = a`, `a | $true = $true`,
///   `$false => a = $true`, `~$true = $false`, ...
/// - double negations are removed: `~~a = a`
/// - nested conjunctions and disjunctions are flattened: `a & (b & c) = a & b & c`
/// - a conjunction or disjunction with a single operand is that operand
///
/// Complementary operands are **not** simplified, `a & ~a` stays a conjunction
/// over the variable `a`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_reasoner::formulas::FormulaFactory;
/// let f = FormulaFactory::new();
///
/// let a = f.variable("a");
/// let b = f.variable("b");
/// let formula = f.implication(f.and(&[a, b]), f.not(a));
///
/// assert_eq!(formula.to_string(&f), "a ∧ b → ¬a");
/// assert_eq!(formula, f.parse("a & b => ~a").unwrap());
/// ```
pub struct FormulaFactory {
    pub(crate) config: FormulaFactoryConfig,
    pub(crate) variables: SimpleCache<Arc<str>>,
    pub(crate) nots: SimpleCache<EncodedFormula>,
    pub(crate) ands: SimpleCache<Arc<[EncodedFormula]>>,
    pub(crate) ors: SimpleCache<Arc<[EncodedFormula]>>,
    pub(crate) impls: SimpleCache<(EncodedFormula, EncodedFormula)>,
    pub(crate) equivs: SimpleCache<(EncodedFormula, EncodedFormula)>,
}

impl FormulaFactory {
    /// Creates a new factory with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FormulaFactoryConfig::default())
    }

    /// Creates a new factory with the given configuration.
    pub fn with_config(config: FormulaFactoryConfig) -> Self {
        Self {
            config,
            variables: SimpleCache::new(FormulaType::Lit),
            nots: SimpleCache::new(FormulaType::Not),
            ands: SimpleCache::new(FormulaType::And),
            ors: SimpleCache::new(FormulaType::Or),
            impls: SimpleCache::new(FormulaType::Impl),
            equivs: SimpleCache::new(FormulaType::Equiv),
        }
    }

    /// Returns the configuration of this factory.
    pub const fn config(&self) -> &FormulaFactoryConfig {
        &self.config
    }

    /// Returns the constant `true`.
    pub const fn verum(&self) -> EncodedFormula {
        EncodedFormula::constant(true)
    }

    /// Returns the constant `false`.
    pub const fn falsum(&self) -> EncodedFormula {
        EncodedFormula::constant(false)
    }

    /// Returns the constant for `value`.
    pub const fn constant(&self, value: bool) -> EncodedFormula {
        EncodedFormula::constant(value)
    }

    /// Returns the variable with the given name, creating it if it does not
    /// exist yet.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// assert_eq!(f.var("A"), f.var("A"));
    /// assert_ne!(f.var("A"), f.var("B"));
    /// ```
    pub fn var(&self, name: &str) -> Variable {
        if let Some(enc) = self.variables.lookup(name) {
            return Variable::from(enc);
        }
        Variable::from(self.variables.get_or_insert(Arc::from(name)))
    }

    /// Returns the variable with the given name as formula.
    pub fn variable(&self, name: &str) -> EncodedFormula {
        self.var(name).into()
    }

    /// Returns a positive (`phase = true`) or negated variable as formula.
    pub fn literal(&self, name: &str, phase: bool) -> EncodedFormula {
        let variable = self.variable(name);
        if phase {
            variable
        } else {
            self.not(variable)
        }
    }

    /// Returns the variable with the given name if it was already created in
    /// this factory.
    pub fn lookup_var(&self, name: &str) -> Option<Variable> {
        self.variables.lookup(name).map(Variable::from)
    }

    /// Returns the name of `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` was not created by this factory.
    pub fn var_name(&self, var: Variable) -> Arc<str> {
        self.variables.get(var.encoding()).unwrap_or_else(|| panic_foreign_formula(var.into()))
    }

    /// Returns the number of variables created in this factory.
    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    /// Creates the negation of `op`.
    pub fn not(&self, op: EncodedFormula) -> EncodedFormula {
        match op.unpack(self) {
            Formula::True => self.falsum(),
            Formula::False => self.verum(),
            Formula::Not(inner) => inner,
            _ => self.nots.get_or_insert(op).to_formula(),
        }
    }

    /// Creates a conjunction of all `operands`.
    ///
    /// An empty conjunction is `true`.
    pub fn and<I>(&self, operands: I) -> EncodedFormula
    where
        I: IntoIterator,
        I::Item: Borrow<EncodedFormula>,
    {
        self.nary(FormulaType::And, operands)
    }

    /// Creates a disjunction of all `operands`.
    ///
    /// An empty disjunction is `false`.
    pub fn or<I>(&self, operands: I) -> EncodedFormula
    where
        I: IntoIterator,
        I::Item: Borrow<EncodedFormula>,
    {
        self.nary(FormulaType::Or, operands)
    }

    /// Creates the implication `left → right`.
    pub fn implication(&self, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        if left.is_falsum() || right.is_verum() {
            return self.verum();
        }
        if left.is_verum() {
            return right;
        }
        if right.is_falsum() {
            return self.not(left);
        }
        self.impls.get_or_insert((left, right)).to_formula()
    }

    /// Creates the equivalence `left ≡ right`.
    pub fn equivalence(&self, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        if left.is_verum() {
            return right;
        }
        if right.is_verum() {
            return left;
        }
        if left.is_falsum() {
            return self.not(right);
        }
        if right.is_falsum() {
            return self.not(left);
        }
        self.equivs.get_or_insert((left, right)).to_formula()
    }

    /// Parses `input` into a formula of this factory.
    ///
    /// See the crate documentation for the supported notation.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let formula = f.parse("P ∨ ¬P").unwrap();
    ///
    /// assert_eq!(formula, f.or(&[f.variable("P"), f.literal("P", false)]));
    /// assert!(f.parse("P ∨").is_err());
    /// ```
    pub fn parse(&self, input: &str) -> Result<EncodedFormula, ReasonError> {
        parser::parse(self, input)
    }

    /// Restricts `formula` with the given assignment. See
    /// [`restrict`](transformations::restrict).
    pub fn restrict(&self, formula: EncodedFormula, assignment: &Assignment) -> EncodedFormula {
        transformations::restrict(formula, assignment, self)
    }

    fn nary<I>(&self, ty: FormulaType, operands: I) -> EncodedFormula
    where
        I: IntoIterator,
        I::Item: Borrow<EncodedFormula>,
    {
        let cache = if ty == FormulaType::And { &self.ands } else { &self.ors };
        let neutral = self.constant(ty == FormulaType::And);
        let absorbing = self.constant(ty == FormulaType::Or);
        let mut ops = Vec::new();
        for op in operands {
            let op = *op.borrow();
            if op == absorbing {
                return absorbing;
            }
            if op == neutral {
                continue;
            }
            if op.formula_type() == ty {
                ops.extend(op.operands(self));
            } else {
                ops.push(op);
            }
        }
        match ops.len() {
            0 => neutral,
            1 => ops[0],
            _ => cache.get_or_insert(ops.into()).to_formula(),
        }
    }
}

impl Default for FormulaFactory {
    fn default() -> Self {
        Self::new()
    }
}
