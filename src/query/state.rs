/// Result of a cached query as seen by a view
///
/// A failed refetch keeps the last good data alongside the error, so views
/// can prefer stale data over an error screen.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_error: bool,
    pub error: Option<String>,
}

impl<T> QueryState<T> {
    /// Nothing fetched yet
    pub fn idle() -> Self {
        Self {
            data: None,
            is_error: false,
            error: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            is_error: false,
            error: None,
        }
    }

    /// A failed fetch, keeping whatever data was cached before
    pub fn failure(previous: Option<T>, error: impl Into<String>) -> Self {
        Self {
            data: previous,
            is_error: true,
            error: Some(error.into()),
        }
    }

    /// No data and no error yet
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && !self.is_error
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        QueryState {
            data: self.data.map(f),
            is_error: self.is_error,
            error: self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_loading() {
        let state: QueryState<u32> = QueryState::idle();
        assert!(state.is_loading());
        assert!(!state.is_error);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let state = QueryState::failure(Some(3), "timeout");
        assert!(!state.is_loading());
        assert!(state.is_error);
        assert_eq!(state.data, Some(3));
        assert_eq!(state.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_map() {
        let state = QueryState::success(vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(state, QueryState::success(3));
    }
}
