//! Kiosk window implemented with egui/eframe
//!
//! One fullscreen scrollable page: hero section, social cards, footer. All
//! decorative state (particles, ripples, cursor ring, background drift) is
//! advanced from real frame time, so animation speed does not depend on the
//! refresh rate of whatever screen the kiosk lands on.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{info, warn};

use super::background::FloatingShapes;
use super::cards;
use super::constants::*;
use super::effects::{self, CursorRing, RippleLayer};
use super::hero::Hero;
use super::stats_overlay;
use crate::analytics::AnalyticsRecorder;
use crate::constants::particles::{CARD_BURST_COUNT, DEFAULT_BURST_COUNT, EGG_BURST_COUNT};
use crate::netwatch::NetStatus;
use crate::particles::ParticleEmitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollTarget {
    Top,
    Social,
}

/// Tracks how long the kiosk window has held focus
#[derive(Default)]
struct FocusTimer {
    focused_since: Option<Instant>,
}

impl FocusTimer {
    /// Feed the current focus state; returns the attended span when focus
    /// is lost.
    fn observe(&mut self, focused: bool, now: Instant) -> Option<Duration> {
        match (self.focused_since, focused) {
            (None, true) => {
                self.focused_since = Some(now);
                None
            }
            (Some(since), false) => {
                self.focused_since = None;
                Some(now.duration_since(since))
            }
            _ => None,
        }
    }
}

struct KioskApp {
    recorder: AnalyticsRecorder,
    net_rx: Receiver<NetStatus>,
    net_status: Option<NetStatus>,
    /// Process start, for the time-to-first-frame log line
    started: Instant,
    first_frame_logged: bool,
    emitter: ParticleEmitter,
    ripples: RippleLayer,
    cursor: CursorRing,
    shapes: FloatingShapes,
    hero: Hero,
    focus: FocusTimer,
    stats_open: bool,
    pending_scroll: Option<ScrollTarget>,
    scroll_offset: f32,
    /// Hover state from the previous frame, drives the cursor ring scale
    pointer_over_interactive: bool,
}

impl KioskApp {
    fn new(
        cc: &CreationContext<'_>,
        recorder: AnalyticsRecorder,
        net_rx: Receiver<NetStatus>,
        started: Instant,
    ) -> Self {
        info!("Initializing kiosk window");
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            recorder,
            net_rx,
            net_status: None,
            started,
            first_frame_logged: false,
            emitter: ParticleEmitter::new(),
            ripples: RippleLayer::new(),
            cursor: CursorRing::new(),
            shapes: FloatingShapes::new(),
            hero: Hero::new(),
            focus: FocusTimer::default(),
            stats_open: false,
            pending_scroll: None,
            scroll_offset: 0.0,
            pointer_over_interactive: false,
        }
    }

    fn drain_net_updates(&mut self) {
        while let Ok(status) = self.net_rx.try_recv() {
            let first = self.net_status.is_none();
            self.net_status = Some(status);
            match (first, status) {
                (true, _) => info!(status = ?status, "Connectivity probe"),
                (false, NetStatus::Online) => info!("Network connection restored"),
                (false, NetStatus::Offline) => warn!("Network connection lost"),
            }
        }
    }

    fn observe_focus(&mut self, ctx: &egui::Context, now: Instant) {
        let focused = ctx.input(|i| i.viewport().focused.unwrap_or(true));
        if let Some(spent) = self.focus.observe(focused, now) {
            info!(seconds = spent.as_secs(), "Time on kiosk");
        }
    }

    fn page(&mut self, ui: &mut egui::Ui, now: Instant) -> bool {
        let scroll = self.pending_scroll.take();
        let mut hovering = false;

        ui.add_space(PADDING);

        let hero_resp = self
            .hero
            .ui(ui, now, scroll == Some(ScrollTarget::Top));
        hovering |= hero_resp.any_hovered;
        if let Some(pos) = hero_resp.follow_clicked {
            self.emitter.emit(pos);
            self.pending_scroll = Some(ScrollTarget::Social);
        }
        if let Some(pos) = hero_resp.background_clicked {
            self.emitter.burst(pos, DEFAULT_BURST_COUNT);
        }

        let cards_resp = cards::ui(ui, scroll == Some(ScrollTarget::Social));
        hovering |= cards_resp.any_hovered;
        if let Some(click) = cards_resp.clicked {
            self.ripples.spawn(click.pos);
            self.emitter.burst(click.pos, CARD_BURST_COUNT);
            self.recorder.record_click(click.platform.as_str());
            ui.ctx()
                .open_url(egui::OpenUrl::new_tab(click.platform.campaign_url()));
        }

        hovering |= self.footer(ui);
        hovering
    }

    fn footer(&mut self, ui: &mut egui::Ui) -> bool {
        let mut hovering = false;

        ui.separator();
        ui.add_space(ITEM_SPACING);
        ui.vertical_centered(|ui| {
            let (color, label) = net_badge(self.net_status);
            ui.colored_label(color, label);
        });
        ui.add_space(ITEM_SPACING);

        let row_width = 2.0 * 150.0 + ITEM_SPACING;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = ITEM_SPACING;
            let pad = ((ui.available_width() - row_width) / 2.0).max(0.0);
            ui.add_space(pad);

            let stats = ui.add(
                egui::Button::new("\u{1F4CA}  Statistics").min_size(egui::vec2(150.0, 36.0)),
            );
            if stats.clicked() {
                self.stats_open = !self.stats_open;
            }
            hovering |= stats.hovered();

            let back = ui.add(
                egui::Button::new("\u{2B06}  Back to top").min_size(egui::vec2(150.0, 36.0)),
            );
            if back.clicked() {
                self.pending_scroll = Some(ScrollTarget::Top);
            }
            hovering |= back.hovered();
        });

        ui.add_space(ITEM_SPACING);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("\u{00A9} 2025 JCTT Digital Campaign")
                    .size(12.0)
                    .color(TEXT_WEAK),
            );
        });
        ui.add_space(PADDING);

        hovering
    }
}

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = ctx.input(|i| i.stable_dt);

        self.drain_net_updates();
        self.observe_focus(ctx, now);

        if ctx.input(|i| i.key_pressed(egui::Key::F12)) {
            self.stats_open = !self.stats_open;
        }

        if let Some(center) = self.hero.poll_easter_egg(now) {
            self.emitter.burst(center, EGG_BURST_COUNT);
            info!("Easter egg unlocked");
            info!("Thanks for exploring the campaign page");
        }

        self.hero.step(dt);
        self.shapes.step(dt);
        self.emitter.step(dt);
        self.ripples.step(dt);

        // Painted behind all widgets
        let screen = ctx.screen_rect();
        let bg = ctx.layer_painter(egui::LayerId::background());
        bg.rect_filled(screen, egui::CornerRadius::ZERO, BACKGROUND_FILL);
        self.shapes.draw(&bg, screen, self.scroll_offset);

        let mut hovering = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.page(ui, now));
                hovering = output.inner;
                self.scroll_offset = output.state.offset.y;
            });
        self.pointer_over_interactive = hovering;

        if self.stats_open {
            let stats = self.recorder.statistics();
            stats_overlay::show(ctx, &mut self.stats_open, &stats);
        }

        // Effects sit above everything, including the overlay window
        let ring_enabled = screen.width() > CURSOR_MIN_WINDOW_WIDTH;
        let pointer = ctx.input(|i| i.pointer.latest_pos());
        self.cursor.step(
            dt,
            if ring_enabled { pointer } else { None },
            self.pointer_over_interactive,
        );
        let fg = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("kiosk_effects"),
        ));
        effects::draw_particles(&fg, &self.emitter);
        self.ripples.draw(&fg);
        if ring_enabled && pointer.is_some() {
            self.cursor.draw(&fg);
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        if !self.first_frame_logged {
            self.first_frame_logged = true;
            let elapsed_ms = self.started.elapsed().as_millis() as u64;
            info!(elapsed_ms, "Kiosk ready");
        }

        let animating = !self.emitter.is_idle()
            || !self.ripples.is_idle()
            || self.cursor.is_settling()
            || self.hero.is_pulsing();
        if animating {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_millis(IDLE_REPAINT_MS));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let stats = self.recorder.statistics();
        info!(
            session = %self.recorder.session_id(),
            visits = stats.total_visits,
            clicks = stats.total_clicks,
            "Kiosk closing"
        );
    }
}

fn net_badge(status: Option<NetStatus>) -> (egui::Color32, String) {
    match status {
        Some(NetStatus::Online) => (STATUS_ONLINE, "\u{25CF}  Online".to_string()),
        Some(NetStatus::Offline) => (STATUS_OFFLINE, "\u{25CF}  Offline".to_string()),
        None => (STATUS_UNKNOWN, "\u{25CF}  Checking connection...".to_string()),
    }
}

pub fn run_kiosk(
    recorder: AnalyticsRecorder,
    net_rx: Receiver<NetStatus>,
    started: Instant,
) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("JCTT Digital Campaign"),
        ..Default::default()
    };

    eframe::run_native(
        "jctt-campaign-kiosk",
        options,
        Box::new(move |cc| Ok(Box::new(KioskApp::new(cc, recorder, net_rx, started)))),
    )
    .map_err(|err| anyhow!("Failed to launch kiosk window: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_timer_reports_span_on_blur() {
        let t0 = Instant::now();
        let mut timer = FocusTimer::default();

        assert_eq!(timer.observe(true, t0), None);
        // Staying focused reports nothing
        assert_eq!(timer.observe(true, t0 + Duration::from_secs(5)), None);

        let spent = timer.observe(false, t0 + Duration::from_secs(90));
        assert_eq!(spent, Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_focus_timer_ignores_blur_without_focus() {
        let t0 = Instant::now();
        let mut timer = FocusTimer::default();
        assert_eq!(timer.observe(false, t0), None);
        assert_eq!(timer.observe(false, t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_focus_timer_restarts_after_blur() {
        let t0 = Instant::now();
        let mut timer = FocusTimer::default();
        timer.observe(true, t0);
        timer.observe(false, t0 + Duration::from_secs(10));

        timer.observe(true, t0 + Duration::from_secs(60));
        let spent = timer.observe(false, t0 + Duration::from_secs(75));
        assert_eq!(spent, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_net_badge_colors_by_status() {
        let (online_color, online_label) = net_badge(Some(NetStatus::Online));
        let (offline_color, offline_label) = net_badge(Some(NetStatus::Offline));
        let (unknown_color, _) = net_badge(None);

        assert_eq!(online_color, STATUS_ONLINE);
        assert_eq!(offline_color, STATUS_OFFLINE);
        assert_eq!(unknown_color, STATUS_UNKNOWN);
        assert!(online_label.contains("Online"));
        assert!(offline_label.contains("Offline"));
    }
}
