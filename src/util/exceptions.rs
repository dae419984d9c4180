use crate::formulas::EncodedFormula;

pub fn panic_foreign_formula(formula: EncodedFormula) -> ! {
    panic!("Formula {formula:?} was not created by this factory");
}
