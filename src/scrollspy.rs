//! Scroll-position-driven navigation state.
//!
//! The page body is a single vertical scroll region made of named sections.
//! Every frame the shell records where each section ended up (its span in
//! content coordinates) and feeds the current scroll offset back into
//! [`ScrollSpy::recompute`], which derives the active section with a probe a
//! fixed distance below the viewport top. Navigation produces an eased
//! [`SmoothScroll`] the shell applies to the scroll area until it finishes.

/// Lookahead added to the raw scroll offset so a section starting just above
/// the viewport top is still credited as active. Tuned, not derived.
pub const HEADER_PROBE_OFFSET: f32 = 100.0;

// ─── Sections ────────────────────────────────────────────────────────────────

/// The fixed, ordered set of page sections. Order is document order and is
/// what resolves probe ties (first match wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Introduction,
    About,
    Stories,
    Services,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Introduction,
        SectionId::About,
        SectionId::Stories,
        SectionId::Services,
        SectionId::Contact,
    ];

    /// English nav label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Introduction => "What is Animal Communication",
            SectionId::About => "About",
            SectionId::Stories => "Stories",
            SectionId::Services => "Services",
            SectionId::Contact => "Contact",
        }
    }

    /// Chinese nav label, shown alongside the English one in the mobile menu.
    pub fn label_zh(self) -> &'static str {
        match self {
            SectionId::Hero => "首頁",
            SectionId::Introduction => "動物溝通介紹",
            SectionId::About => "關於",
            SectionId::Stories => "個案故事",
            SectionId::Services => "服務",
            SectionId::Contact => "聯絡",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Vertical extent of one laid-out section, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, probe: f32) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

// ─── Scroll spy ──────────────────────────────────────────────────────────────

/// Derives the active section from the scroll offset and owns the mobile
/// menu flag. Spans are re-recorded every frame, so stale geometry never
/// outlives a relayout.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    active: SectionId,
    menu_open: bool,
    spans: [Option<SectionSpan>; SectionId::ALL.len()],
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self {
            active: SectionId::ALL[0],
            menu_open: false,
            spans: [None; SectionId::ALL.len()],
        }
    }

    /// Store where `id` was laid out this frame.
    pub fn record_span(&mut self, id: SectionId, span: SectionSpan) {
        self.spans[id.index()] = Some(span);
    }

    pub fn span(&self, id: SectionId) -> Option<SectionSpan> {
        self.spans[id.index()]
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Flip the mobile menu. Independent of scroll state.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Re-derive the active section from the current scroll offset.
    ///
    /// The first section (in document order) whose span contains
    /// `offset + HEADER_PROBE_OFFSET` wins. When nothing matches — above the
    /// first section or past the last — the previous value is retained.
    pub fn recompute(&mut self, scroll_offset: f32) {
        let probe = scroll_offset + HEADER_PROBE_OFFSET;
        for (id, span) in SectionId::ALL.iter().zip(self.spans.iter()) {
            if let Some(span) = span {
                if span.contains(probe) {
                    if self.active != *id {
                        log::debug!("active section -> {:?}", id);
                        self.active = *id;
                    }
                    return;
                }
            }
        }
    }

    /// Resolve a navigation request to a scroll target (the section's top).
    ///
    /// Returns `None` when the section has no recorded span yet; that is a
    /// silent no-op and leaves all state untouched. On success the mobile
    /// menu is closed as a side effect.
    pub fn go_to(&mut self, id: SectionId) -> Option<f32> {
        let span = self.spans[id.index()]?;
        self.menu_open = false;
        log::debug!("navigate to {:?} (top = {})", id, span.top);
        Some(span.top)
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Smooth scroll animation ─────────────────────────────────────────────────

/// Eased scroll-offset interpolation from the current offset to a target.
/// Sampled once per frame by the shell; purely a function of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
}

impl SmoothScroll {
    /// Fixed animation length in seconds.
    pub const DURATION: f32 = 0.6;

    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `elapsed` seconds since the animation started. Clamped to
    /// the target once the duration has passed.
    pub fn offset_at(&self, elapsed: f32) -> f32 {
        let t = (elapsed / Self::DURATION).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    pub fn is_done(&self, elapsed: f32) -> bool {
        elapsed >= Self::DURATION
    }
}

fn ease_in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        let u = -2.0 * x + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy_with_three_spans() -> ScrollSpy {
        let mut spy = ScrollSpy::new();
        spy.record_span(SectionId::Hero, SectionSpan { top: 0.0, height: 800.0 });
        spy.record_span(SectionId::About, SectionSpan { top: 800.0, height: 800.0 });
        spy.record_span(SectionId::Contact, SectionSpan { top: 1600.0, height: 800.0 });
        spy
    }

    #[test]
    fn probe_resolves_first_containing_section() {
        let mut spy = spy_with_three_spans();
        // raw offset 750 -> probe 850, inside about's [800, 1600)
        spy.recompute(750.0);
        assert_eq!(spy.active(), SectionId::About);
    }

    #[test]
    fn no_match_retains_previous_active() {
        let mut spy = spy_with_three_spans();
        spy.recompute(750.0);
        assert_eq!(spy.active(), SectionId::About);
        // raw offset 2500 -> probe 2600, past every span
        spy.recompute(2500.0);
        assert_eq!(spy.active(), SectionId::About);
    }

    #[test]
    fn defaults_to_first_section() {
        let spy = ScrollSpy::new();
        assert_eq!(spy.active(), SectionId::Hero);
    }

    #[test]
    fn document_order_breaks_overlap_ties() {
        let mut spy = ScrollSpy::new();
        // Overlapping spans: both contain probe 500; hero is first in order.
        spy.record_span(SectionId::Hero, SectionSpan { top: 0.0, height: 800.0 });
        spy.record_span(SectionId::Introduction, SectionSpan { top: 400.0, height: 800.0 });
        spy.recompute(400.0);
        assert_eq!(spy.active(), SectionId::Hero);
    }

    #[test]
    fn go_to_unrecorded_section_is_noop() {
        let mut spy = spy_with_three_spans();
        spy.toggle_menu();
        spy.recompute(750.0);
        // Stories never got a span this frame: silent no-op.
        assert_eq!(spy.go_to(SectionId::Stories), None);
        assert_eq!(spy.active(), SectionId::About);
        assert!(spy.menu_open());
    }

    #[test]
    fn go_to_returns_section_top_and_closes_menu() {
        let mut spy = spy_with_three_spans();
        spy.toggle_menu();
        assert!(spy.menu_open());
        assert_eq!(spy.go_to(SectionId::Contact), Some(1600.0));
        assert!(!spy.menu_open());
    }

    #[test]
    fn menu_toggle_round_trips_and_touches_nothing_else() {
        let mut spy = spy_with_three_spans();
        spy.recompute(750.0);
        let active_before = spy.active();
        let open_before = spy.menu_open();
        spy.toggle_menu();
        spy.toggle_menu();
        assert_eq!(spy.menu_open(), open_before);
        assert_eq!(spy.active(), active_before);
    }

    #[test]
    fn opening_menu_does_not_change_active_section() {
        let mut spy = spy_with_three_spans();
        spy.recompute(1700.0);
        assert_eq!(spy.active(), SectionId::Contact);
        spy.toggle_menu();
        assert_eq!(spy.active(), SectionId::Contact);
    }

    #[test]
    fn smooth_scroll_hits_endpoints_and_is_monotonic() {
        let anim = SmoothScroll::new(100.0, 900.0);
        assert_eq!(anim.offset_at(0.0), 100.0);
        assert_eq!(anim.offset_at(SmoothScroll::DURATION), 900.0);
        // Clamped past the end.
        assert_eq!(anim.offset_at(10.0), 900.0);
        let mut prev = anim.offset_at(0.0);
        for i in 1..=60 {
            let cur = anim.offset_at(SmoothScroll::DURATION * i as f32 / 60.0);
            assert!(cur >= prev);
            prev = cur;
        }
        assert!(anim.is_done(SmoothScroll::DURATION));
        assert!(!anim.is_done(SmoothScroll::DURATION * 0.5));
    }

    #[test]
    fn section_order_is_document_order() {
        assert_eq!(
            SectionId::ALL,
            [
                SectionId::Hero,
                SectionId::Introduction,
                SectionId::About,
                SectionId::Stories,
                SectionId::Services,
                SectionId::Contact,
            ]
        );
    }
}
