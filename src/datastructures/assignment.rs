use std::collections::HashSet;

use itertools::Itertools;

use crate::formulas::{EncodedFormula, FormulaFactory, Variable};

/// An `Assignment` stores a set of positive and negative [`Variable`]s.
///
/// `Assignment` stores all variables in [`HashSet`]s, this allows for a fast
/// lookup while restricting formulas. A truth table creates one assignment
/// per row.
///
/// Variables which are neither positive nor negative are unassigned. If a
/// variable is in both sets, the positive phase wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Set of all positive variables of this assignment.
    pub pos: HashSet<Variable>,
    /// Set of all negative variables of this assignment.
    pub neg: HashSet<Variable>,
}

impl Assignment {
    /// Creates a new assignment.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::datastructures::Assignment;
    /// # use logic_reasoner::formulas::FormulaFactory;
    /// # use std::collections::HashSet;
    /// let f = FormulaFactory::new();
    ///
    /// let a = f.var("a");
    /// let b = f.var("b");
    ///
    /// let assignment = Assignment::new(HashSet::from([a]), HashSet::from([b]));
    ///
    /// assert_eq!(assignment.value(a), Some(true));
    /// assert_eq!(assignment.value(b), Some(false));
    /// ```
    pub const fn new(pos: HashSet<Variable>, neg: HashSet<Variable>) -> Self {
        Self { pos, neg }
    }

    /// Creates a new assignment from slices.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_reasoner::datastructures::Assignment;
    /// # use logic_reasoner::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let a = f.var("a");
    /// let b = f.var("b");
    ///
    /// let assignment = Assignment::from_variables(&[a], &[b]);
    ///
    /// assert!(assignment.contains_pos(a));
    /// assert!(assignment.contains_neg(b));
    /// ```
    pub fn from_variables(pos: &[Variable], neg: &[Variable]) -> Self {
        Self { pos: pos.iter().copied().collect(), neg: neg.iter().copied().collect() }
    }

    /// Assigns `value` to `variable`, replacing a previous value.
    pub fn insert(&mut self, variable: Variable, value: bool) {
        if value {
            self.neg.remove(&variable);
            self.pos.insert(variable);
        } else {
            self.pos.remove(&variable);
            self.neg.insert(variable);
        }
    }

    /// Returns the value of `variable`, or `None` if it is unassigned.
    pub fn value(&self, variable: Variable) -> Option<bool> {
        if self.pos.contains(&variable) {
            Some(true)
        } else if self.neg.contains(&variable) {
            Some(false)
        } else {
            None
        }
    }

    /// Returns `true` if `variable` is assigned to `true`.
    pub fn contains_pos(&self, variable: Variable) -> bool {
        self.pos.contains(&variable)
    }

    /// Returns `true` if `variable` is assigned to `false`.
    pub fn contains_neg(&self, variable: Variable) -> bool {
        self.neg.contains(&variable)
    }

    /// Returns the number of assigned variables.
    pub fn len(&self) -> usize {
        self.pos.union(&self.neg).count()
    }

    /// Returns `true` if no variable is assigned.
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty() && self.neg.is_empty()
    }

    /// Restricts a variable with this assignment.
    ///
    /// Returns the constant of the variable's value, or the variable itself if
    /// it is unassigned.
    pub fn restrict_var(&self, variable: Variable) -> EncodedFormula {
        self.value(variable).map_or_else(|| variable.into(), EncodedFormula::constant)
    }

    /// Returns a readable representation of this assignment, like
    /// `a=true, b=false`, ordered by variable name.
    pub fn to_string(&self, f: &FormulaFactory) -> String {
        self.pos
            .iter()
            .map(|var| (var.name(f), true))
            .chain(self.neg.iter().filter(|var| !self.pos.contains(var)).map(|var| (var.name(f), false)))
            .sorted()
            .map(|(name, value)| format!("{name}={value}"))
            .join(", ")
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Variable, bool)>>(iter: T) -> Self {
        let mut assignment = Self::default();
        for (variable, value) in iter {
            assignment.insert(variable, value);
        }
        assignment
    }
}
