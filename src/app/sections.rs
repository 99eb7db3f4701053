//! The scrollable single-page body: hero, introduction, about, stories,
//! services, contact, footer.
//!
//! Every frame each section records the span it was laid out into, and the
//! resulting scroll offset feeds the scroll-spy recompute, so the active
//! nav item always reflects the latest scroll sample. Navigation applies an
//! eased offset to the scroll area until the animation finishes.

use eframe::egui::{self, Color32, RichText};

use hazel_animal_talk::motion::ParticleField;
use hazel_animal_talk::router::CrossViewIntent;
use hazel_animal_talk::scrollspy::{SectionId, SectionSpan};
use hazel_animal_talk::{content, theme};

use super::{particles, SiteApp};

/// Column count switches to one below this width.
const NARROW_GRID: f32 = 700.0;

impl SiteApp {
    pub fn draw_main(&mut self, ctx: &egui::Context) {
        let t = self.ambient_time();
        // Region left below the header; keeps the decoration off the nav bar.
        let body = ctx.available_rect();

        // The hearts behind the page mount together with it, once.
        if self.main_hearts.is_none() {
            let mut rng = fastrand::Rng::new();
            self.main_hearts = Some(ParticleField::hearts(&mut rng));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::CREAM))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical().auto_shrink([false; 2]);
                if let Some(anim) = &self.scroll_anim {
                    area = area.vertical_scroll_offset(anim.offset());
                    ctx.request_repaint();
                }

                let output = area.show(ui, |ui| {
                    let origin = ui.cursor().min.y;
                    self.section(ui, origin, SectionId::Hero, None, Self::hero_section);
                    self.section(
                        ui,
                        origin,
                        SectionId::Introduction,
                        Some(theme::SAND),
                        Self::introduction_section,
                    );
                    self.section(ui, origin, SectionId::About, Some(theme::SAND), Self::about_section);
                    self.section(ui, origin, SectionId::Stories, None, Self::stories_section);
                    self.section(ui, origin, SectionId::Services, None, Self::services_section);
                    self.section(
                        ui,
                        origin,
                        SectionId::Contact,
                        Some(theme::SAND),
                        Self::contact_section,
                    );
                    Self::footer(ui);
                });

                self.main_offset = output.state.offset.y;
                self.spy.recompute(self.main_offset);
            });

        // Keep the final clamped offset for one frame before dropping.
        if self.scroll_anim.as_ref().is_some_and(|a| a.is_done()) {
            self.scroll_anim = None;
        }

        if let Some(field) = &self.main_hearts {
            particles::draw_hearts(ctx, body, field, t);
        }
    }

    /// Lay out one named section and record its span for the scroll spy.
    fn section(
        &mut self,
        ui: &mut egui::Ui,
        origin: f32,
        id: SectionId,
        fill: Option<Color32>,
        add_contents: fn(&mut Self, &mut egui::Ui),
    ) {
        let top = ui.cursor().min.y - origin;
        egui::Frame::none()
            .fill(fill.unwrap_or(Color32::TRANSPARENT))
            .inner_margin(egui::Margin::symmetric(24.0, 56.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(920.0);
                    add_contents(self, ui);
                });
            });
        let bottom = ui.cursor().min.y - origin;
        self.spy.record_span(
            id,
            SectionSpan {
                top,
                height: bottom - top,
            },
        );
    }

    // ─── Sections ────────────────────────────────────────────────────────────

    fn hero_section(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui.label(RichText::new("🐾").size(110.0).color(theme::PLUM));
        ui.add_space(16.0);
        ui.label(
            RichText::new(content::SITE_TITLE)
                .size(46.0)
                .strong()
                .color(theme::PLUM),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(content::HERO_SUBTITLE_ZH)
                .size(26.0)
                .strong()
                .color(theme::PLUM),
        );
        ui.add_space(10.0);
        ui.label(RichText::new(content::HERO_TAGLINE).size(19.0).color(theme::GOLD));
        ui.add_space(24.0);
        if primary_button(ui, "Visit Instagram ↗").clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(content::INSTAGRAM_URL));
        }
        ui.add_space(48.0);
    }

    fn introduction_section(&mut self, ui: &mut egui::Ui) {
        ui.label(theme::heading(content::INTRO_HEADING));
        ui.add_space(6.0);
        ui.label(theme::tagline(content::INTRO_SUBLINE));
        ui.add_space(20.0);
        for paragraph in content::INTRO_PARAGRAPHS {
            ui.label(theme::body(paragraph));
            ui.add_space(12.0);
        }
        ui.add_space(12.0);
        if primary_button(ui, content::INTRO_CTA).clicked() {
            self.enter_detail(Some(CrossViewIntent::scroll_to(content::QA_HEADING)));
        }
    }

    fn about_section(&mut self, ui: &mut egui::Ui) {
        ui.label(theme::heading(content::ABOUT_HEADING));
        ui.add_space(6.0);
        ui.label(theme::tagline(content::ABOUT_SUBLINE));
        ui.add_space(20.0);
        for paragraph in content::ABOUT_PARAGRAPHS {
            ui.label(theme::body(paragraph));
            ui.add_space(12.0);
        }
    }

    fn stories_section(&mut self, ui: &mut egui::Ui) {
        ui.label(theme::heading(content::STORIES_HEADING));
        ui.add_space(6.0);
        for line in content::STORIES_SUBLINES {
            ui.label(theme::tagline(line));
        }
        ui.add_space(24.0);

        let columns = if ui.available_width() < NARROW_GRID { 1 } else { 2 };
        ui.columns(columns, |cols| {
            for (i, story) in content::STORIES.iter().enumerate() {
                let col = &mut cols[i % columns];
                card(col, theme::CARD_CREAM, |ui| {
                    ui.label(theme::body(story.text));
                    ui.add_space(10.0);
                    ui.hyperlink_to(
                        RichText::new("Visit Instagram ↗").size(13.0).color(theme::PLUM),
                        story.instagram_url,
                    );
                });
                col.add_space(16.0);
            }
        });
    }

    fn services_section(&mut self, ui: &mut egui::Ui) {
        ui.label(theme::heading(content::SERVICES_HEADING));
        ui.add_space(6.0);
        ui.label(theme::tagline(content::SERVICES_SUBLINE));
        ui.add_space(18.0);

        let booking = egui::Button::new(
            RichText::new(format!(
                "{}\n{} ↗",
                content::BOOKING_BUTTON_TITLE,
                content::BOOKING_BUTTON_SUBTITLE
            ))
            .size(16.0)
            .color(Color32::WHITE),
        )
        .fill(theme::PLUM)
        .rounding(egui::Rounding::same(8.0))
        .min_size(egui::vec2(200.0, 56.0));
        if ui.add(booking).clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(content::BOOKING_FORM_URL));
        }
        ui.add_space(24.0);

        let columns = if ui.available_width() < NARROW_GRID { 1 } else { 3 };
        ui.columns(columns, |cols| {
            for (i, service) in content::SERVICE_CARDS.iter().enumerate() {
                let col = &mut cols[i % columns];
                card(col, theme::CARD_CREAM, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(badge_icon(i)).size(26.0).color(theme::PLUM));
                        ui.add_space(6.0);
                        ui.label(theme::subheading(service.title));
                    });
                    ui.add_space(10.0);
                    for line in service.lines {
                        ui.label(theme::body(line));
                        ui.add_space(4.0);
                    }
                });
                col.add_space(16.0);
            }
        });
    }

    fn contact_section(&mut self, ui: &mut egui::Ui) {
        ui.label(theme::heading(content::CONTACT_HEADING));
        ui.add_space(6.0);
        ui.label(theme::subheading(content::CONTACT_SUBHEADING));
        ui.add_space(8.0);
        for line in content::CONTACT_SUBLINES {
            ui.label(theme::tagline(line));
        }
        ui.add_space(24.0);

        ui.label(theme::subheading(content::CONTACT_INFO_HEADING));
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(theme::body("IG :"));
            ui.hyperlink_to(
                RichText::new(content::INSTAGRAM_HANDLE).size(16.0).color(theme::PLUM),
                content::INSTAGRAM_URL,
            );
        });
        ui.label(theme::body(&format!("✉ {}", content::EMAIL)));
        ui.hyperlink_to(
            RichText::new(content::RESERVATION_LINK_LABEL)
                .size(16.0)
                .color(theme::PLUM),
            content::BOOKING_FORM_URL,
        );
        ui.label(theme::body(&format!("📍 {}", content::LOCATION)));
    }

    fn footer(ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(theme::CARD_CREAM)
            .inner_margin(egui::Margin::symmetric(24.0, 20.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("🐾 {}", content::SITE_TITLE))
                            .size(16.0)
                            .strong()
                            .color(theme::PLUM),
                    );
                    ui.label(RichText::new(content::FOOTER_TAGLINE).size(13.0).color(theme::PLUM));
                    ui.label(
                        RichText::new(content::FOOTER_COPYRIGHT)
                            .size(11.0)
                            .color(theme::PLUM),
                    );
                });
            });
    }
}

/// The plum call-to-action button used across the page.
fn primary_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).size(17.0).color(Color32::WHITE))
            .fill(theme::PLUM)
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(180.0, 44.0)),
    )
}

/// Rounded content card, the page's recurring container.
fn card(ui: &mut egui::Ui, fill: Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, add_contents);
}

fn badge_icon(index: usize) -> &'static str {
    match index {
        0 => "💗",
        1 => "⭐",
        _ => "💬",
    }
}
