mod formula;
pub(crate) mod formula_cache;
mod formula_factory;
mod formula_factory_config;
mod variable;

/// We deviate from the convention of putting unit tests in the source file in this case,
/// s.t. the files don't become too large
#[cfg(test)]
mod tests;

pub use formula::*;
pub use formula_factory::*;
pub use formula_factory_config::*;
pub use variable::*;
