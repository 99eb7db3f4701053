//! Ambient particle layers: floating hearts and drifting animal glyphs.
//!
//! Painted onto a dedicated painter-only layer clipped to the content
//! region, so the decoration can never intercept pointer input meant for
//! the widgets it floats over (and never covers the fixed header).
//! Positions are sampled from `motion` every frame against the shared app
//! clock; the particle batches themselves are immutable.

use eframe::egui::{self, Align2, FontId, Pos2, Rect};

use hazel_animal_talk::motion::{self, ParticleField, ParticleKind};
use hazel_animal_talk::theme;

/// Paint the upward-drifting hearts across `rect`.
pub fn draw_hearts(ctx: &egui::Context, rect: Rect, field: &ParticleField, t: f32) {
    let painter = ctx
        .layer_painter(egui::LayerId::new(
            egui::Order::Middle,
            egui::Id::new("ambient-hearts"),
        ))
        .with_clip_rect(rect);
    for p in field.particles() {
        let Some(s) = motion::heart_at(p, t) else {
            continue;
        };
        if s.alpha <= 0.005 {
            continue;
        }
        let x = rect.left() + p.x / 100.0 * rect.width();
        let y = rect.bottom() - rect.height() * (1.0 - s.y_frac);
        painter.text(
            Pos2::new(x, y),
            Align2::CENTER_CENTER,
            "❤",
            FontId::proportional(p.size),
            theme::APRICOT.gamma_multiply(s.alpha),
        );
    }
    // The drift never stops while the layer is visible.
    ctx.request_repaint();
}

/// Paint the oscillating animal glyphs scattered over `rect`.
pub fn draw_glyphs(ctx: &egui::Context, rect: Rect, field: &ParticleField, t: f32) {
    let painter = ctx
        .layer_painter(egui::LayerId::new(
            egui::Order::Middle,
            egui::Id::new("ambient-glyphs"),
        ))
        .with_clip_rect(rect);
    for p in field.particles() {
        let ParticleKind::Glyph { emoji, .. } = p.kind else {
            continue;
        };
        let s = motion::glyph_at(p, t);
        let pos = Pos2::new(
            rect.left() + p.x / 100.0 * rect.width() + s.dx,
            rect.top() + p.y / 100.0 * rect.height() + s.dy,
        );
        let color = theme::PLUM.gamma_multiply(s.alpha);
        let galley = painter.layout_no_wrap(emoji.to_owned(), FontId::proportional(p.size), color);
        let mut shape = egui::epaint::TextShape::new(pos - galley.size() * 0.5, galley, color);
        shape.angle = s.rotation.to_radians();
        painter.add(shape);
    }
    ctx.request_repaint();
}
