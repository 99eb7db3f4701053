//! Fixed header: logo and title, desktop nav with active-section highlight,
//! narrow-window hamburger menu with bilingual labels.

use eframe::egui::{self, Color32, RichText};

use hazel_animal_talk::scrollspy::SectionId;
use hazel_animal_talk::{content, theme};

use super::SiteApp;

/// Window width below which the header collapses into the hamburger menu.
/// Stands in for the original layout's CSS breakpoint.
pub const MOBILE_BREAKPOINT: f32 = 700.0;

impl SiteApp {
    pub fn draw_header(&mut self, ctx: &egui::Context) {
        let narrow = ctx.screen_rect().width() < MOBILE_BREAKPOINT;
        // Desktop windows never show the menu overlay; forget a stale one
        // when the window is widened while it was open.
        if !narrow && self.spy.menu_open() {
            self.spy.toggle_menu();
        }

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(Color32::WHITE)
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🐾").size(26.0).color(theme::PLUM));
                    ui.label(
                        RichText::new(content::SITE_TITLE)
                            .size(20.0)
                            .strong()
                            .color(theme::PLUM),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if narrow {
                            let icon = if self.spy.menu_open() { "✕" } else { "☰" };
                            let button = egui::Button::new(
                                RichText::new(icon).size(20.0).color(theme::PLUM),
                            )
                            .frame(false);
                            if ui.add(button).clicked() {
                                self.spy.toggle_menu();
                            }
                        } else {
                            // Right-to-left layout, so iterate in reverse to
                            // keep document order on screen.
                            for id in SectionId::ALL.iter().rev() {
                                self.nav_button(ui, *id, false);
                            }
                        }
                    });
                });

                if narrow && self.spy.menu_open() {
                    ui.add_space(8.0);
                    egui::Frame::none()
                        .fill(theme::CARD_CREAM)
                        .rounding(egui::Rounding::same(8.0))
                        .inner_margin(egui::Margin::same(8.0))
                        .show(ui, |ui| {
                            for id in SectionId::ALL {
                                self.nav_button(ui, id, true);
                            }
                        });
                    ui.add_space(4.0);
                }
            });
    }

    /// One nav entry. Successful navigation closes the menu (inside
    /// `ScrollSpy::go_to`); the bilingual label only appears in the menu.
    fn nav_button(&mut self, ui: &mut egui::Ui, id: SectionId, in_menu: bool) {
        let active = self.spy.active() == id;
        let label = if in_menu {
            format!("{}  {}", id.label(), id.label_zh())
        } else {
            id.label().to_owned()
        };
        let mut text = RichText::new(label).size(15.0).color(theme::PLUM);
        if active {
            text = text.strong();
        }
        let mut button = egui::Button::new(text)
            .fill(if active { theme::BLUSH } else { Color32::TRANSPARENT });
        if in_menu {
            button = button.min_size(egui::vec2(ui.available_width(), 28.0));
        }
        if ui.add(button).clicked() {
            self.navigate_to(id);
        }
    }
}
