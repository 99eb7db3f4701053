//! The animal-communication detail view: Q&A card, "when to use" card,
//! back navigation.
//!
//! Headings are re-indexed from actual layout every frame; the one-shot
//! cross-view scroll (set up in `app::SiteApp::poll_detail_settle`) resolves
//! against that index, so a heading that never rendered simply never gets
//! scrolled to.

use eframe::egui::{self, RichText};

use hazel_animal_talk::{content, theme};

use super::SiteApp;

impl SiteApp {
    pub fn draw_detail(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("detail-header")
            .frame(
                egui::Frame::none()
                    .fill(theme::CARD_CREAM)
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let back = egui::Button::new(
                        RichText::new("←").size(22.0).color(theme::PLUM),
                    )
                    .frame(false);
                    if ui.add(back).clicked() {
                        self.leave_detail();
                        return;
                    }
                    ui.add_space(8.0);
                    ui.label(RichText::new("🐾").size(24.0).color(theme::PLUM));
                    ui.label(
                        RichText::new(content::SITE_TITLE)
                            .size(20.0)
                            .strong()
                            .color(theme::PLUM),
                    );
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::CREAM))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .id_salt("detail-scroll");
                if let Some(anim) = &self.detail_anim {
                    area = area.vertical_scroll_offset(anim.offset());
                    ctx.request_repaint();
                }

                let output = area.show(ui, |ui| {
                    self.headings.clear();
                    let origin = ui.cursor().min.y;
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(880.0);
                        ui.add_space(24.0);
                        self.qa_card(ui, origin);
                        ui.add_space(32.0);
                        self.when_card(ui, origin);
                        ui.add_space(32.0);

                        let back = egui::Button::new(
                            RichText::new(content::DETAIL_BACK_LABEL)
                                .size(17.0)
                                .color(egui::Color32::WHITE),
                        )
                        .fill(theme::PLUM)
                        .rounding(egui::Rounding::same(8.0))
                        .min_size(egui::vec2(180.0, 44.0));
                        if ui.add(back).clicked() {
                            self.leave_detail();
                        }
                        ui.add_space(40.0);
                    });
                });

                self.detail_offset = output.state.offset.y;
            });

        if self.detail_anim.as_ref().is_some_and(|a| a.is_done()) {
            self.detail_anim = None;
        }
    }

    fn qa_card(&mut self, ui: &mut egui::Ui, origin: f32) {
        let top = ui.cursor().min.y - origin;
        self.headings.record(content::QA_HEADING, top);

        detail_card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("💗").size(28.0));
                ui.label(
                    RichText::new(content::QA_HEADING)
                        .size(28.0)
                        .strong()
                        .color(theme::PLUM),
                );
            });
            ui.add_space(16.0);
            for item in content::QA_ITEMS {
                ui.label(
                    RichText::new(format!("Ｑ：{}", item.question))
                        .size(17.0)
                        .strong()
                        .color(theme::PLUM),
                );
                ui.add_space(4.0);
                ui.label(theme::body(&format!("Ａ：{}", item.answer)));
                ui.add_space(16.0);
            }
        });
    }

    fn when_card(&mut self, ui: &mut egui::Ui, origin: f32) {
        let top = ui.cursor().min.y - origin;
        self.headings.record(content::WHEN_HEADING, top);

        detail_card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("⭐").size(28.0));
                ui.label(
                    RichText::new(content::WHEN_HEADING)
                        .size(28.0)
                        .strong()
                        .color(theme::PLUM),
                );
            });
            ui.add_space(12.0);
            ui.label(theme::body(content::WHEN_INTRO));
            ui.add_space(16.0);

            let columns = if ui.available_width() < 640.0 { 1 } else { 2 };
            ui.columns(columns, |cols| {
                for (i, item) in content::WHEN_TO_USE.iter().enumerate() {
                    let col = &mut cols[i % columns];
                    egui::Frame::none()
                        .fill(egui::Color32::from_white_alpha(180))
                        .rounding(egui::Rounding::same(8.0))
                        .inner_margin(egui::Margin::same(12.0))
                        .show(col, |ui| {
                            ui.label(theme::body(item));
                        });
                    col.add_space(8.0);
                }
            });

            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label(theme::body(content::WHEN_CLOSING));
            });
        });
    }
}

/// The peach content card both detail blocks share.
fn detail_card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(theme::PEACH)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(24.0))
        .show(ui, add_contents);
}
