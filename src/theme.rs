//! Site palette and text-style helpers.
//!
//! The same eight colors repeat across every view, so they live here once
//! instead of as scattered `from_rgb` literals.

use egui::{Color32, RichText};

/// Primary brand color (#B47A8F): headings, body text, buttons.
pub const PLUM: Color32 = Color32::from_rgb(0xB4, 0x7A, 0x8F);
/// Hover/pressed variant of [`PLUM`] (#9D6A7F).
pub const PLUM_DARK: Color32 = Color32::from_rgb(0x9D, 0x6A, 0x7F);
/// Heart tint and accent lines (#E8A87C).
pub const APRICOT: Color32 = Color32::from_rgb(0xE8, 0xA8, 0x7C);
/// English taglines (#EBB97A).
pub const GOLD: Color32 = Color32::from_rgb(0xEB, 0xB9, 0x7A);
/// Page background (#FFF7E5).
pub const CREAM: Color32 = Color32::from_rgb(0xFF, 0xF7, 0xE5);
/// Card background (#FFF7EA).
pub const CARD_CREAM: Color32 = Color32::from_rgb(0xFF, 0xF7, 0xEA);
/// Alternating section background (#F5EDE0).
pub const SAND: Color32 = Color32::from_rgb(0xF5, 0xED, 0xE0);
/// Icon-badge background (#F0E6D6).
pub const BEIGE: Color32 = Color32::from_rgb(0xF0, 0xE6, 0xD6);
/// Detail-view card fill (#F7E1C9).
pub const PEACH: Color32 = Color32::from_rgb(0xF7, 0xE1, 0xC9);
/// Active nav-item highlight (#FFE5D9).
pub const BLUSH: Color32 = Color32::from_rgb(0xFF, 0xE5, 0xD9);

pub fn heading(text: &str) -> RichText {
    RichText::new(text).size(34.0).strong().color(PLUM)
}

pub fn subheading(text: &str) -> RichText {
    RichText::new(text).size(22.0).strong().color(PLUM)
}

/// English accent line under a Chinese heading.
pub fn tagline(text: &str) -> RichText {
    RichText::new(text).size(18.0).italics().color(GOLD)
}

pub fn body(text: &str) -> RichText {
    RichText::new(text).size(16.0).color(PLUM)
}
