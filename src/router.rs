//! Top-level view routing between the scrollable main page and the
//! animal-communication detail view.
//!
//! The "scroll to the Q&A block once the detail view has settled" request is
//! carried as an explicit one-shot [`CrossViewIntent`] handed over at
//! transition time and consumed with [`ViewRouter::take_intent`]. There is no
//! shared flag store, so a consumed intent cannot re-trigger on a later
//! entry unless somebody sets a fresh one.

use std::time::Duration;

/// How long the detail view gets to finish its initial layout before the
/// intent scroll runs.
pub const DETAIL_SETTLE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Main,
    Detail,
}

/// One-shot instruction carried across a view switch: on arrival in the
/// detail view, smooth-scroll to the first heading containing this text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossViewIntent {
    pub heading: String,
}

impl CrossViewIntent {
    pub fn scroll_to(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
        }
    }
}

/// Two-state view machine, initial state [`View::Main`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    view: View,
    intent: Option<CrossViewIntent>,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            view: View::Main,
            intent: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Switch to the detail view, replacing any stored intent with the one
    /// passed here (or none). Re-entering without a fresh intent therefore
    /// carries nothing over.
    pub fn open_detail(&mut self, intent: Option<CrossViewIntent>) {
        log::info!("view: main -> detail (intent: {})", intent.is_some());
        self.view = View::Detail;
        self.intent = intent;
    }

    /// Return to the main page.
    pub fn back_to_main(&mut self) {
        log::info!("view: detail -> main");
        self.view = View::Main;
    }

    /// Consume the cross-view intent. The first call after `open_detail`
    /// yields it; every later call yields `None` until a new intent is set.
    pub fn take_intent(&mut self) -> Option<CrossViewIntent> {
        self.intent.take()
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Heading lookup ──────────────────────────────────────────────────────────

/// Maps the detail view's laid-out headings to their vertical offsets.
/// Rebuilt every frame from actual layout, so it can never go stale.
#[derive(Debug, Clone, Default)]
pub struct HeadingIndex {
    entries: Vec<(String, f32)>,
}

impl HeadingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record a heading's text and its top offset in content coordinates.
    pub fn record(&mut self, text: impl Into<String>, top: f32) {
        self.entries.push((text.into(), top));
    }

    /// Offset of the first heading whose text contains `needle`. A miss is
    /// the caller's silent no-op, not an error.
    pub fn find(&self, needle: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|(text, _)| text.contains(needle))
            .map(|(_, top)| *top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_main() {
        let router = ViewRouter::new();
        assert_eq!(router.view(), View::Main);
    }

    #[test]
    fn intent_is_consumed_exactly_once() {
        let mut router = ViewRouter::new();
        router.open_detail(Some(CrossViewIntent::scroll_to("關於動物溝通 Ｑ&Ａ")));
        assert_eq!(router.view(), View::Detail);

        let first = router.take_intent();
        assert_eq!(
            first,
            Some(CrossViewIntent::scroll_to("關於動物溝通 Ｑ&Ａ"))
        );
        assert_eq!(router.take_intent(), None);
    }

    #[test]
    fn reentry_without_fresh_intent_carries_nothing() {
        let mut router = ViewRouter::new();
        router.open_detail(Some(CrossViewIntent::scroll_to("Q&A")));
        let _ = router.take_intent();

        router.back_to_main();
        assert_eq!(router.view(), View::Main);

        router.open_detail(None);
        assert_eq!(router.view(), View::Detail);
        assert_eq!(router.take_intent(), None);
    }

    #[test]
    fn unconsumed_intent_is_replaced_on_next_entry() {
        // Even if a shell never polled the intent, re-opening the detail view
        // decides the intent anew rather than leaking the stale one.
        let mut router = ViewRouter::new();
        router.open_detail(Some(CrossViewIntent::scroll_to("old")));
        router.back_to_main();
        router.open_detail(None);
        assert_eq!(router.take_intent(), None);
    }

    #[test]
    fn heading_index_substring_match_and_miss() {
        let mut idx = HeadingIndex::new();
        idx.record("Hazel's Animal Talk", 0.0);
        idx.record("關於動物溝通 Ｑ&Ａ", 420.0);
        idx.record("什麼時候需要動物溝通?", 980.0);

        assert_eq!(idx.find("Ｑ&Ａ"), Some(420.0));
        assert_eq!(idx.find("什麼時候"), Some(980.0));
        assert_eq!(idx.find("no such heading"), None);

        idx.clear();
        assert_eq!(idx.find("Ｑ&Ａ"), None);
    }

    #[test]
    fn heading_index_first_match_wins() {
        let mut idx = HeadingIndex::new();
        idx.record("動物溝通介紹", 100.0);
        idx.record("動物溝通進階", 600.0);
        assert_eq!(idx.find("動物溝通"), Some(100.0));
    }
}
