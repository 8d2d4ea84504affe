//! GUI-specific constants for layout, campaign colors and effect timing

use egui;

/// Kiosk window dimensions
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const WINDOW_MIN_WIDTH: f32 = 800.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 48.0;
pub const ITEM_SPACING: f32 = 12.0;
pub const PADDING: f32 = 24.0;

/// Campaign palette
pub const CAMPAIGN_ORANGE: egui::Color32 = egui::Color32::from_rgb(0xf7, 0x9c, 0x1c);
pub const CAMPAIGN_BLUE: egui::Color32 = egui::Color32::from_rgb(0x10, 0xa8, 0xe0);
pub const BACKGROUND_FILL: egui::Color32 = egui::Color32::from_rgb(0x10, 0x16, 0x2a);
pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(0xf2, 0xf4, 0xf8);
pub const TEXT_WEAK: egui::Color32 = egui::Color32::from_rgb(0x9a, 0xa3, 0xb5);

/// Social card layout
pub const CARD_SIZE: egui::Vec2 = egui::vec2(210.0, 170.0);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(0x1a, 0x22, 0x3a);
pub const CARD_FILL_HOVER: egui::Color32 = egui::Color32::from_rgb(0x24, 0x2e, 0x4c);

/// Connectivity indicator colors
pub const STATUS_ONLINE: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const STATUS_OFFLINE: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
pub const STATUS_UNKNOWN: egui::Color32 = egui::Color32::from_rgb(130, 130, 130);

/// Click ripple animation
pub const RIPPLE_LIFETIME_SECS: f32 = 0.6;
pub const RIPPLE_MAX_RADIUS: f32 = 120.0;

/// Custom cursor ring
/// Easing factor is per 60fps frame; the ring is only shown on wide windows.
pub const CURSOR_EASE: f32 = 0.15;
pub const CURSOR_RADIUS: f32 = 10.0;
pub const CURSOR_HOVER_SCALE: f32 = 1.5;
pub const CURSOR_MIN_WINDOW_WIDTH: f32 = 1024.0;

/// Hero logo
pub const LOGO_RADIUS: f32 = 64.0;
pub const LOGO_PULSE_PERIOD_SECS: f32 = 0.5;
pub const LOGO_PULSE_TOTAL_SECS: f32 = 1.5;

/// Background shape drift and scroll parallax
pub const PARALLAX_BASE: f32 = 0.5;
pub const PARALLAX_STEP: f32 = 0.1;

/// Repaint cadence when no animation is running
pub const IDLE_REPAINT_MS: u64 = 50;
