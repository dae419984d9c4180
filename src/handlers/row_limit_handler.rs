use super::{ComputationHandler, TableEvent};

/// A handler which aborts a truth table once a number of rows was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLimitHandler {
    limit: usize,
}

impl RowLimitHandler {
    /// Creates a handler which allows at most `limit` rows.
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl ComputationHandler for RowLimitHandler {
    fn should_resume(&mut self, event: TableEvent) -> bool {
        match event {
            TableEvent::NextRow(row) => row < self.limit,
            TableEvent::ComputationStarted(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit() {
        let mut handler = RowLimitHandler::new(2);
        assert!(handler.should_resume(TableEvent::ComputationStarted(3)));
        assert!(handler.should_resume(TableEvent::NextRow(0)));
        assert!(handler.should_resume(TableEvent::NextRow(1)));
        assert!(!handler.should_resume(TableEvent::NextRow(2)));
    }
}
