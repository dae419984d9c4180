use super::TableEvent;

/// The result of a computation controlled by a
/// [`ComputationHandler`](super::ComputationHandler).
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputationResult<R> {
    /// The computation finished.
    Ok(R),
    /// The computation was aborted before it produced anything.
    Canceled(TableEvent),
    /// The computation was aborted, `R` is what was computed until then.
    Partial(R, TableEvent),
}

impl<R> ComputationResult<R> {
    /// Returns the (maybe partial) result, `None` if it was canceled.
    pub fn result(self) -> Option<R> {
        match self {
            Self::Canceled(_) => None,
            Self::Partial(r, _) | Self::Ok(r) => Some(r),
        }
    }

    /// Returns a reference to the (maybe partial) result.
    pub const fn result_ref(&self) -> Option<&R> {
        match self {
            Self::Canceled(_) => None,
            Self::Partial(r, _) | Self::Ok(r) => Some(r),
        }
    }

    /// Returns the event at which the computation was aborted.
    pub fn cancel_cause(self) -> Option<TableEvent> {
        match self {
            Self::Canceled(e) | Self::Partial(_, e) => Some(e),
            Self::Ok(_) => None,
        }
    }

    /// Returns `true` if the computation finished.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the computation was aborted after producing a part
    /// of its result.
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_, _))
    }

    /// Returns `true` if the computation was aborted before producing
    /// anything.
    pub const fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled(_))
    }

    /// Maps the (maybe partial) result.
    pub fn map<T, F: FnOnce(R) -> T>(self, transformation: F) -> ComputationResult<T> {
        match self {
            Self::Ok(r) => ComputationResult::Ok(transformation(r)),
            Self::Canceled(event) => ComputationResult::Canceled(event),
            Self::Partial(r, event) => ComputationResult::Partial(transformation(r), event),
        }
    }
}

impl<T> From<Result<T, TableEvent>> for ComputationResult<T> {
    fn from(value: Result<T, TableEvent>) -> Self {
        match value {
            Ok(r) => Self::Ok(r),
            Err(e) => Self::Canceled(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let ok: ComputationResult<usize> = ComputationResult::Ok(4);
        assert!(ok.is_success());
        assert_eq!(ok.result_ref(), Some(&4));
        assert_eq!(ok.map(|r| r * 2).result(), Some(8));

        let partial = ComputationResult::Partial(2, TableEvent::NextRow(2));
        assert!(partial.is_partial());
        assert_eq!(partial.clone().cancel_cause(), Some(TableEvent::NextRow(2)));
        assert_eq!(partial.result(), Some(2));

        let canceled: ComputationResult<usize> = Err(TableEvent::ComputationStarted(3)).into();
        assert!(canceled.is_canceled());
        assert_eq!(canceled.result(), None);
    }
}
