//! `SiteApp` — the top-level egui application state (the composition root).
//!
//! This module declares the `SiteApp` struct, its `Default` impl and the
//! `eframe::App` dispatch. Drawing is split across the sibling sub-modules:
//!
//! - `loading`   — loading screen and progress gate
//! - `header`    — fixed header, desktop nav, mobile menu
//! - `sections`  — the scrollable single-page body
//! - `detail`    — the animal-communication Q&A view
//! - `particles` — ambient heart / glyph layers

pub mod detail;
pub mod header;
pub mod loading;
pub mod particles;
pub mod sections;

use std::time::Instant;

use eframe::egui;

use hazel_animal_talk::motion::ParticleField;
use hazel_animal_talk::progress::{ProgressSequencer, TICK_INTERVAL};
use hazel_animal_talk::router::{
    CrossViewIntent, HeadingIndex, View, ViewRouter, DETAIL_SETTLE_DELAY,
};
use hazel_animal_talk::scrollspy::{ScrollSpy, SectionId, SmoothScroll};
use hazel_animal_talk::theme;

// ─── Smooth-scroll driver ────────────────────────────────────────────────────

/// A running [`SmoothScroll`] paired with its wall-clock start. Sampled once
/// per frame; dropped when finished.
pub struct ScrollAnim {
    anim: SmoothScroll,
    started: Instant,
}

impl ScrollAnim {
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            anim: SmoothScroll::new(from, to),
            started: Instant::now(),
        }
    }

    pub fn offset(&self) -> f32 {
        self.anim.offset_at(self.started.elapsed().as_secs_f32())
    }

    pub fn is_done(&self) -> bool {
        self.anim.is_done(self.started.elapsed().as_secs_f32())
    }
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct SiteApp {
    /// Loading gate. `Some` while the loading screen shows; dropped the
    /// moment the sequence completes, which also stops its tick source.
    pub progress: Option<ProgressSequencer>,
    /// Wall-clock anchor of the last applied progress tick.
    pub last_tick: Instant,

    // Decorative particle batches, each generated once per mount.
    pub loading_hearts: ParticleField,
    pub loading_glyphs: ParticleField,
    /// Hearts behind the main page; generated lazily when it first shows.
    pub main_hearts: Option<ParticleField>,

    // Scroll navigation (main page).
    pub spy: ScrollSpy,
    pub scroll_anim: Option<ScrollAnim>,
    /// Scroll offset of the main page as of the last drawn frame.
    pub main_offset: f32,

    // View routing.
    pub router: ViewRouter,
    /// When the detail view was entered; `None` while on the main page.
    pub detail_entered: Option<Instant>,
    /// Heading text the one-shot cross-view scroll still has to attempt.
    pub pending_heading: Option<String>,
    pub headings: HeadingIndex,
    pub detail_anim: Option<ScrollAnim>,
    pub detail_offset: f32,

    pub app_start: Instant,
}

impl Default for SiteApp {
    fn default() -> Self {
        let mut rng = fastrand::Rng::new();
        Self {
            progress: Some(ProgressSequencer::new()),
            last_tick: Instant::now(),
            loading_hearts: ParticleField::hearts(&mut rng),
            loading_glyphs: ParticleField::glyphs(&mut rng),
            main_hearts: None,
            spy: ScrollSpy::new(),
            scroll_anim: None,
            main_offset: 0.0,
            router: ViewRouter::new(),
            detail_entered: None,
            pending_heading: None,
            headings: HeadingIndex::new(),
            detail_anim: None,
            detail_offset: 0.0,
            app_start: Instant::now(),
        }
    }
}

impl SiteApp {
    /// Seconds since app start, the shared clock of all particle animation.
    pub fn ambient_time(&self) -> f32 {
        self.app_start.elapsed().as_secs_f32()
    }

    /// Start a smooth scroll to `id` on the main page. A section without a
    /// recorded span is a silent no-op.
    pub fn navigate_to(&mut self, id: SectionId) {
        if let Some(top) = self.spy.go_to(id) {
            self.scroll_anim = Some(ScrollAnim::new(self.main_offset, top));
        }
    }

    /// Switch to the detail view, carrying an optional one-shot scroll
    /// intent. The intent is consumed here; re-entering later without a new
    /// one scrolls nothing.
    pub fn enter_detail(&mut self, intent: Option<CrossViewIntent>) {
        self.router.open_detail(intent);
        self.pending_heading = self.router.take_intent().map(|i| i.heading);
        self.detail_entered = Some(Instant::now());
        self.detail_anim = None;
        self.detail_offset = 0.0;
        self.headings.clear();
    }

    /// Back action from the detail view.
    pub fn leave_detail(&mut self) {
        self.router.back_to_main();
        self.detail_entered = None;
        self.pending_heading = None;
        self.detail_anim = None;
    }

    /// Run the deferred cross-view scroll once the detail view has had
    /// [`DETAIL_SETTLE_DELAY`] to lay itself out. At most one attempt per
    /// entry; a missing heading skips silently.
    fn poll_detail_settle(&mut self, ctx: &egui::Context) {
        let Some(entered) = self.detail_entered else {
            return;
        };
        if self.pending_heading.is_none() {
            return;
        }
        let elapsed = entered.elapsed();
        if elapsed < DETAIL_SETTLE_DELAY {
            ctx.request_repaint_after(DETAIL_SETTLE_DELAY - elapsed);
            return;
        }
        if let Some(heading) = self.pending_heading.take() {
            match self.headings.find(&heading) {
                Some(top) => {
                    log::debug!("cross-view scroll to '{heading}' (top = {top})");
                    self.detail_anim = Some(ScrollAnim::new(self.detail_offset, top));
                }
                None => log::debug!("no heading matches '{heading}', skipping scroll"),
            }
        }
    }

    /// Drive the progress sequencer from wall-clock time. Returns `true`
    /// while the loading screen should still be shown.
    fn gate_on_loading(&mut self) -> bool {
        let Some(seq) = self.progress.as_mut() else {
            return false;
        };
        while self.last_tick.elapsed() >= TICK_INTERVAL && !seq.is_complete() {
            seq.tick();
            self.last_tick += TICK_INTERVAL;
        }
        if seq.is_complete() {
            log::info!("loading sequence complete, revealing main content");
            // Dropping the sequencer cancels its tick source for good.
            self.progress = None;
            return false;
        }
        true
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = theme::CREAM;
        visuals.window_fill = theme::CARD_CREAM;
        visuals.widgets.hovered.weak_bg_fill = theme::BLUSH;
        visuals.widgets.active.weak_bg_fill = theme::BLUSH;
        ctx.set_visuals(visuals);
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);

        if self.gate_on_loading() {
            self.draw_loading(ctx);
            ctx.request_repaint_after(TICK_INTERVAL);
            return;
        }

        match self.router.view() {
            View::Main => {
                self.draw_header(ctx);
                self.draw_main(ctx);
            }
            View::Detail => {
                self.poll_detail_settle(ctx);
                self.draw_detail(ctx);
            }
        }
    }
}
