use super::TableEvent;

/// Basic handler trait which can be used to control computations.
///
/// A computation calls [`ComputationHandler::started`] once and then asks
/// [`ComputationHandler::should_resume`] for every event it reaches. As soon
/// as the handler answers `false`, the computation stops and reports the
/// event that caused the abort.
pub trait ComputationHandler {
    /// Initial call to start this handler.
    fn started(&mut self) {}

    /// Returns `false` if the computation should stop at `event`.
    fn should_resume(&mut self, event: TableEvent) -> bool;
}

/// A handler which never aborts a computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NopHandler;

impl ComputationHandler for NopHandler {
    fn should_resume(&mut self, _: TableEvent) -> bool {
        true
    }
}
