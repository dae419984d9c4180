use std::time::{Duration, Instant};

use super::{ComputationHandler, TableEvent};

/// Timer variants of a [`TimeoutHandler`].
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Timer {
    /// The timeout starts when the handler is created.
    SingleTimeout(Duration),
    /// The timeout restarts with every started computation.
    RestartingTimeout(Duration),
    /// The computation must be finished before this instant.
    FixedEnd(Instant),
}

/// A handler which aborts a computation after a timeout.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use std::time::{Duration, Instant};
/// # use logic_reasoner::datastructures::TruthTable;
/// # use logic_reasoner::formulas::{FormulaFactory, ToFormula};
/// # use logic_reasoner::handlers::{Timer, TimeoutHandler};
/// let f = FormulaFactory::new();
/// let formula = "a & b | c".to_formula(&f);
///
/// let mut handler = TimeoutHandler::new(Timer::FixedEnd(Instant::now()));
/// let result = TruthTable::generate_with_handler(formula, &f, &mut handler);
///
/// assert!(!result.is_success());
///
/// let mut handler = TimeoutHandler::new(Timer::SingleTimeout(Duration::from_secs(60)));
/// let result = TruthTable::generate_with_handler(formula, &f, &mut handler);
///
/// assert_eq!(result.result().unwrap().len(), 8);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct TimeoutHandler {
    timer: Timer,
    checkpoint: Instant,
}

impl TimeoutHandler {
    /// Creates a new handler with the given timer.
    pub fn new(timer: Timer) -> Self {
        Self { timer, checkpoint: Instant::now() }
    }
}

impl ComputationHandler for TimeoutHandler {
    fn should_resume(&mut self, event: TableEvent) -> bool {
        match self.timer {
            Timer::SingleTimeout(timeout) => self.checkpoint.elapsed() < timeout,
            Timer::RestartingTimeout(timeout) => {
                if matches!(event, TableEvent::ComputationStarted(_)) {
                    self.checkpoint = Instant::now();
                }
                self.checkpoint.elapsed() < timeout
            }
            Timer::FixedEnd(end) => Instant::now() < end,
        }
    }
}
