#![allow(non_snake_case)]
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::datastructures::{RowResult, TruthTable};
use crate::formulas::{EncodedFormula, FormulaFactory, ToFormula, Variable};

pub fn string_vars(elements: &'static str) -> BTreeSet<Arc<str>> {
    elements.split(' ').map(Arc::from).collect()
}

pub fn vars(elements: &'static str, f: &FormulaFactory) -> BTreeSet<Variable> {
    elements.split(' ').map(|v| f.var(v)).collect()
}

pub fn vars_list(elements: &'static str, f: &FormulaFactory) -> Vec<Variable> {
    elements.split(' ').map(|v| f.var(v)).collect()
}

/// Returns the results column of a truth table, `None` for unresolved rows.
pub fn results(table: &TruthTable) -> Vec<Option<bool>> {
    table.rows().iter().map(|row| row.result().as_bool()).collect()
}

/// Returns the results column of a truth table of a formula without
/// unresolved rows.
pub fn bool_results(table: &TruthTable) -> Vec<bool> {
    table
        .rows()
        .iter()
        .map(|row| match row.result() {
            RowResult::Value(value) => *value,
            RowResult::Unresolved(residual) => panic!("unexpected unresolved row: {residual}"),
        })
        .collect()
}

#[allow(clippy::struct_field_names)]
pub struct F {
    pub(crate) f: FormulaFactory,

    // Constants
    pub(crate) TRUE: EncodedFormula,
    pub(crate) FALSE: EncodedFormula,

    // Variables and negated variables
    pub(crate) A: EncodedFormula,
    pub(crate) B: EncodedFormula,
    pub(crate) C: EncodedFormula,
    pub(crate) P: EncodedFormula,
    pub(crate) X: EncodedFormula,
    pub(crate) Y: EncodedFormula,
    pub(crate) NA: EncodedFormula,
    pub(crate) NB: EncodedFormula,
    pub(crate) NP: EncodedFormula,
    pub(crate) NX: EncodedFormula,

    // Disjunctions
    pub(crate) OR1: EncodedFormula,
    pub(crate) OR2: EncodedFormula,
    pub(crate) OR3: EncodedFormula,

    // Conjunctions
    pub(crate) AND1: EncodedFormula,
    pub(crate) AND2: EncodedFormula,
    pub(crate) AND3: EncodedFormula,

    // Negations
    pub(crate) NOT1: EncodedFormula,
    pub(crate) NOT2: EncodedFormula,

    // Implications
    pub(crate) IMP1: EncodedFormula,
    pub(crate) IMP2: EncodedFormula,
    pub(crate) IMP3: EncodedFormula,

    // Equivalences
    pub(crate) EQ1: EncodedFormula,
    pub(crate) EQ2: EncodedFormula,

    // Classics
    pub(crate) EXCLUDED_MIDDLE: EncodedFormula,
    pub(crate) CONTRADICTION: EncodedFormula,
    pub(crate) MODUS_PONENS: EncodedFormula,
}

impl F {
    pub fn new() -> Self {
        let f = FormulaFactory::new();

        let TRUE = f.verum();
        let FALSE = f.falsum();
        let A = f.variable("a");
        let B = f.variable("b");
        let C = f.variable("c");
        let P = f.variable("P");
        let X = f.variable("x");
        let Y = f.variable("y");
        let NA = f.not(A);
        let NB = f.not(B);
        let NP = f.not(P);
        let NX = f.not(X);

        let OR1 = f.or(&[X, Y]);
        let OR2 = f.or(&[NX, f.not(Y)]);
        let OR3 = f.or(&[f.and(&[A, B]), f.and(&[NA, NB])]);

        let AND1 = f.and(&[A, B]);
        let AND2 = f.and(&[NA, NB]);
        let AND3 = f.and(&[OR1, OR2]);

        let NOT1 = f.not(AND1);
        let NOT2 = f.not(OR1);

        let IMP1 = f.implication(A, B);
        let IMP2 = f.implication(NA, NB);
        let IMP3 = f.implication(AND1, OR1);

        let EQ1 = f.equivalence(A, B);
        let EQ2 = f.equivalence(NA, NB);

        let EXCLUDED_MIDDLE = f.or(&[P, NP]);
        let CONTRADICTION = f.and(&[P, NP]);
        let MODUS_PONENS = "(a => b) & a => b".to_formula(&f);

        Self {
            f,
            TRUE,
            FALSE,
            A,
            B,
            C,
            P,
            X,
            Y,
            NA,
            NB,
            NP,
            NX,
            OR1,
            OR2,
            OR3,
            AND1,
            AND2,
            AND3,
            NOT1,
            NOT2,
            IMP1,
            IMP2,
            IMP3,
            EQ1,
            EQ2,
            EXCLUDED_MIDDLE,
            CONTRADICTION,
            MODUS_PONENS,
        }
    }
}
