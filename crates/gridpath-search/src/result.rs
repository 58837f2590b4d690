use std::time::Duration;

/// Summary of a single search run.
///
/// `path_length` counts steps (edges) from start to end; `0` means no path
/// was found, either because none exists or because the run was cancelled.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Number of nodes popped from the open set, including start and end.
    pub nodes_explored: usize,
    pub path_length: usize,
    /// Wall-clock time in milliseconds, rounded to two decimals.
    pub time_ms: f64,
    /// Set when a [`CancelToken`](crate::CancelToken) stopped the run early.
    pub cancelled: bool,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path_length > 0
    }

    pub(crate) fn new(nodes_explored: usize, path_length: usize, elapsed: Duration) -> Self {
        Self {
            nodes_explored,
            path_length,
            time_ms: round_ms(elapsed),
            cancelled: false,
        }
    }

    pub(crate) fn cancelled(nodes_explored: usize, elapsed: Duration) -> Self {
        Self {
            cancelled: true,
            ..Self::new(nodes_explored, 0, elapsed)
        }
    }
}

fn round_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_rounded_to_two_decimals() {
        let r = SearchResult::new(3, 2, Duration::from_nanos(1_234_567));
        assert_eq!(r.time_ms, 1.23);
        let r = SearchResult::new(3, 2, Duration::from_nanos(1_235_999));
        assert_eq!(r.time_ms, 1.24);
    }

    #[test]
    fn found_and_cancelled() {
        assert!(SearchResult::new(4, 2, Duration::ZERO).found());
        assert!(!SearchResult::new(4, 0, Duration::ZERO).found());
        let c = SearchResult::cancelled(7, Duration::ZERO);
        assert!(c.cancelled);
        assert!(!c.found());
        assert_eq!(c.nodes_explored, 7);
        assert_eq!(SearchResult::default().time_ms, 0.0);
    }
}
