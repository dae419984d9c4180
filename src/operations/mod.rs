/// A transformation takes a formula as input and returns another formula, thus
/// transforming the input formula. Restricting a formula by an assignment is
/// the transformation truth tables are evaluated with.
pub mod transformations;

/// A predicate takes a formula as input and computes a truth value on that
/// formula, e.g. whether it is satisfiable or a tautology.
pub mod predicates;

/// A function takes a formula as input and computes some value on that formula,
/// like the set of its variables.
pub mod functions;
