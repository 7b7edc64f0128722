use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Hands out ids for searches and remembers the newest one.
/// Only the response to the newest search is allowed to touch the page.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn issue(&self) -> RequestId {
        RequestId(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest.load(Ordering::Relaxed) == id.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn newest_request_wins() {
        let tracker = RequestTracker::default();
        let first = tracker.issue();
        assert!(tracker.is_current(first));
        let second = tracker.issue();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
