use std::fmt::Display;

/// Events reported to a [`ComputationHandler`](super::ComputationHandler)
/// during the generation of a truth table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// The generation of a table over the given number of variables started.
    ComputationStarted(usize),
    /// The row with the given index is about to be evaluated.
    NextRow(usize),
}

impl Display for TableEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Event: ")?;
        match self {
            Self::ComputationStarted(variables) => f.write_fmt(format_args!("Started truth table over {variables} variables")),
            Self::NextRow(row) => f.write_fmt(format_args!("Evaluating row {row}")),
        }
    }
}
