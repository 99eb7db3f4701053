//! Hazel's Animal Talk — 毛孩悄悄話.
//!
//! Application logic for the single-page promotional app: the loading-gate
//! progress sequencer, scroll-spy navigation, the main/detail view router,
//! the ambient particle generator, and the static site copy. The egui
//! rendering shell lives in the binary (`src/main.rs` + `src/app/`).

pub mod content;
pub mod motion;
pub mod progress;
pub mod router;
pub mod scrollspy;
pub mod theme;
