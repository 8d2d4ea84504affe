//! Kiosk GUI built on egui/eframe
//!
//! `run_kiosk` owns the window for the lifetime of the process. Everything
//! else in here is layout and decorative state for the campaign page.

mod app;
mod background;
mod cards;
pub mod constants;
mod effects;
mod hero;
mod stats_overlay;

pub use app::run_kiosk;
