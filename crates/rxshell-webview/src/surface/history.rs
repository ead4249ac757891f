use crate::translate::HistoryUpdate;

/// Best-effort session history, rebuilt from committed page loads and the
/// in-page history changes the init script reports.
///
/// wry does not expose the engine's back list, so `can_go_back` is derived
/// from that sequence plus the back requests the shell itself issued.
#[derive(Debug, Default)]
pub struct HistoryTracker {
    entries: Vec<String>,
    pending_back: bool,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// The shell asked the page to go back; the next commit pops.
    pub fn begin_back(&mut self) {
        self.pending_back = true;
    }

    pub fn record_commit(&mut self, url: &str) {
        if std::mem::take(&mut self.pending_back) && self.entries.len() > 1 {
            self.entries.pop();
            if self.entries.last().map(String::as_str) != Some(url) {
                if let Some(last) = self.entries.last_mut() {
                    *last = url.to_string();
                }
            }
            return;
        }

        let len = self.entries.len();
        if self.entries.last().map(String::as_str) == Some(url) {
            // Reload.
            return;
        }
        if len >= 2 && self.entries[len - 2] == url {
            // Back navigation initiated by the page.
            self.entries.pop();
            return;
        }
        self.entries.push(url.to_string());
    }

    /// Same-document navigation inside the hosted app.
    pub fn apply(&mut self, update: &HistoryUpdate) {
        match update {
            HistoryUpdate::Push(url) => {
                if self.entries.last() != Some(url) {
                    self.entries.push(url.clone());
                }
            }
            HistoryUpdate::Replace(url) => match self.entries.last_mut() {
                Some(last) => *last = url.clone(),
                None => self.entries.push(url.clone()),
            },
            // popstate looks the same as a commit: back if it matches the
            // previous entry, forward otherwise.
            HistoryUpdate::Pop(url) => self.record_commit(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_cannot_go_back() {
        let mut h = HistoryTracker::new();
        assert!(!h.can_go_back());
        h.record_commit("https://rxresu.me/");
        assert!(!h.can_go_back());
        h.record_commit("https://rxresu.me/");
        assert_eq!(h.depth(), 1);
    }

    #[test]
    fn forward_then_shell_back() {
        let mut h = HistoryTracker::new();
        h.record_commit("https://rxresu.me/");
        h.record_commit("https://rxresu.me/dashboard");
        assert!(h.can_go_back());

        h.begin_back();
        h.record_commit("https://rxresu.me/");
        assert_eq!(h.depth(), 1);
        assert!(!h.can_go_back());
    }

    #[test]
    fn page_initiated_back_is_detected() {
        let mut h = HistoryTracker::new();
        h.record_commit("https://rxresu.me/");
        h.record_commit("https://rxresu.me/a");
        h.record_commit("https://rxresu.me/b");
        h.record_commit("https://rxresu.me/a");
        assert_eq!(h.depth(), 2);
    }

    #[test]
    fn push_state_makes_back_possible() {
        let mut h = HistoryTracker::new();
        h.record_commit("https://rxresu.me/");
        h.apply(&HistoryUpdate::Push("https://rxresu.me/dashboard".into()));
        assert!(h.can_go_back());

        h.begin_back();
        h.apply(&HistoryUpdate::Pop("https://rxresu.me/".into()));
        assert!(!h.can_go_back());
    }

    #[test]
    fn replace_state_keeps_depth() {
        let mut h = HistoryTracker::new();
        h.record_commit("https://rxresu.me/");
        h.apply(&HistoryUpdate::Replace("https://rxresu.me/?tab=1".into()));
        assert_eq!(h.depth(), 1);
        h.apply(&HistoryUpdate::Push("https://rxresu.me/builder/1".into()));
        h.apply(&HistoryUpdate::Push("https://rxresu.me/builder/1".into()));
        assert_eq!(h.depth(), 2);
    }

    #[test]
    fn page_initiated_pop_goes_back_or_forward() {
        let mut h = HistoryTracker::new();
        h.record_commit("https://rxresu.me/");
        h.apply(&HistoryUpdate::Push("https://rxresu.me/a".into()));
        h.apply(&HistoryUpdate::Pop("https://rxresu.me/".into()));
        assert_eq!(h.depth(), 1);
        h.apply(&HistoryUpdate::Pop("https://rxresu.me/a".into()));
        assert_eq!(h.depth(), 2);
    }

    #[test]
    fn back_request_at_root_does_not_underflow() {
        let mut h = HistoryTracker::new();
        h.record_commit("https://rxresu.me/");
        h.begin_back();
        h.record_commit("https://rxresu.me/");
        assert_eq!(h.depth(), 1);
    }
}
