use std::sync::Arc;

use crate::formulas::{EncodedFormula, FormulaFactory, FormulaType};

use super::formula::ToFormula;
use super::formula_cache::formula_encoding::FormulaEncoding;

/// Boolean variable.
///
/// A variable is a reference into the name cache of the [`FormulaFactory`] it
/// was created in. The factory interns names, so asking it twice for the same
/// name yields the same `Variable`.
///
/// The derived ordering is the creation order in the factory. Truth tables
/// order their columns by name instead, see
/// [`EncodedFormula::sorted_variables`].
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Variable {
    encoding: FormulaEncoding,
}

impl Variable {
    /// Constructs a variable based on an index in a [`FormulaFactory`].
    ///
    /// Note that this variable will not be registered in any `FormulaFactory`.
    /// In any normal use case it should not be necessary to use this
    /// constructor.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_reasoner::formulas::{FormulaFactory, Variable};
    /// let f = FormulaFactory::new();
    ///
    /// let var1 = f.var("A");
    /// let var2 = Variable::from_index(0);
    ///
    /// assert_eq!(var1, var2);
    /// ```
    pub const fn from_index(index: u64) -> Self {
        Self { encoding: FormulaEncoding::encode(index, FormulaType::Lit) }
    }

    /// Returns the name of the variable.
    ///
    /// # Panics
    ///
    /// Panics if the variable was not created by `f`.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_reasoner::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let var = f.var("A");
    ///
    /// assert_eq!(&*var.name(&f), "A");
    /// ```
    pub fn name(self, f: &FormulaFactory) -> Arc<str> {
        f.var_name(self)
    }

    /// Returns the index of this variable in its factory.
    pub const fn index(self) -> u64 {
        self.encoding.index()
    }

    pub(crate) const fn encoding(self) -> FormulaEncoding {
        self.encoding
    }
}

impl From<FormulaEncoding> for Variable {
    fn from(encoding: FormulaEncoding) -> Self {
        debug_assert_eq!(encoding.formula_type(), FormulaType::Lit);
        Self { encoding }
    }
}

impl From<Variable> for EncodedFormula {
    fn from(var: Variable) -> Self {
        var.encoding.to_formula()
    }
}

impl ToFormula for Variable {
    fn to_formula(&self, _: &FormulaFactory) -> EncodedFormula {
        (*self).into()
    }
}
