//! Loading screen: bilingual title, paw-print loader, progress bar.
//!
//! Shown until the progress sequencer reaches 100 (a fixed 4 s); the gate
//! itself lives in `app::SiteApp::gate_on_loading`.

use std::f32::consts::TAU;

use eframe::egui::{self, RichText};

use hazel_animal_talk::{content, theme};

use super::{particles, SiteApp};

impl SiteApp {
    pub fn draw_loading(&mut self, ctx: &egui::Context) {
        let t = self.ambient_time();
        let screen = ctx.available_rect();
        let (fraction, value) = match &self.progress {
            Some(seq) => (seq.fraction(), seq.value()),
            None => (1.0, 100),
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::CREAM))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.16);

                    ui.label(RichText::new("🐾").size(84.0).color(theme::PLUM));
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(content::SITE_TITLE)
                            .size(42.0)
                            .strong()
                            .color(theme::PLUM),
                    );
                    ui.label(
                        RichText::new(content::SITE_TITLE_ZH)
                            .size(34.0)
                            .strong()
                            .color(theme::PLUM),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(content::SITE_TAGLINE_ZH).size(18.0).color(theme::PLUM));

                    ui.add_space(24.0);
                    draw_paw_loader(ui, t);
                    ui.add_space(24.0);

                    ui.add(
                        egui::ProgressBar::new(fraction)
                            .desired_width(360.0)
                            .desired_height(8.0)
                            .fill(theme::PLUM),
                    );
                    ui.add_space(12.0);
                    ui.label(RichText::new(content::LOADING_LINE).size(16.0).color(theme::PLUM));
                    ui.label(RichText::new(format!("{value}%")).size(13.0).color(theme::PLUM));
                });
            });

        particles::draw_hearts(ctx, screen, &self.loading_hearts, t);
        particles::draw_glyphs(ctx, screen, &self.loading_glyphs, t);
    }
}

/// The bobbing, gently wobbling paw print above the progress bar.
/// One 2-second cycle: ±10 points of lift, ±5° of tilt.
fn draw_paw_loader(ui: &mut egui::Ui, t: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(64.0, 64.0), egui::Sense::hover());
    let phase = t * TAU / 2.0;
    let lift = phase.sin() * 10.0;
    let tilt = (phase * 2.0).sin() * 5.0_f32.to_radians();

    let painter = ui.painter();
    let galley = painter.layout_no_wrap(
        "🐾".to_owned(),
        egui::FontId::proportional(56.0),
        theme::PLUM,
    );
    let pos = rect.center() - galley.size() * 0.5 - egui::vec2(0.0, lift);
    let mut shape = egui::epaint::TextShape::new(pos, galley, theme::PLUM);
    shape.angle = tilt;
    painter.add(shape);
}
