//! Hero section: campaign identity, the hexagon logo and its hidden interaction
//!
//! Five quick clicks on the logo trigger the easter egg. A streak is judged
//! only after a two second quiet gap, matching how people actually rattle off
//! clicks: the count keeps growing while the gap stays short.

use egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, UiBuilder, Vec2};
use std::time::{Duration, Instant};

use crate::constants::logo::{EGG_CLICK_THRESHOLD, EGG_WINDOW_MS};
use crate::gui::constants::{
    CAMPAIGN_BLUE, CAMPAIGN_ORANGE, ITEM_SPACING, LOGO_PULSE_PERIOD_SECS, LOGO_PULSE_TOTAL_SECS,
    LOGO_RADIUS, SECTION_SPACING, TEXT_PRIMARY, TEXT_WEAK,
};

/// Click streak tracker for the logo easter egg
#[derive(Default)]
struct LogoStreak {
    clicks: u32,
    last_click: Option<Instant>,
}

impl LogoStreak {
    fn register_click(&mut self, now: Instant) {
        if let Some(last) = self.last_click {
            if now.duration_since(last) >= quiet_gap() {
                // The previous streak was already judged (or never qualified)
                self.clicks = 0;
            }
        }
        self.clicks += 1;
        self.last_click = Some(now);
    }

    /// Judge a finished streak. Fires at most once per streak, and only after
    /// the quiet gap has passed since the last click.
    fn poll(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_click else {
            return false;
        };
        if now.duration_since(last) < quiet_gap() {
            return false;
        }
        let fired = self.clicks >= EGG_CLICK_THRESHOLD;
        self.clicks = 0;
        self.last_click = None;
        fired
    }
}

fn quiet_gap() -> Duration {
    Duration::from_millis(EGG_WINDOW_MS)
}

pub struct HeroResponse {
    pub any_hovered: bool,
    /// Click on the call-to-action button, with the pointer position
    pub follow_clicked: Option<Pos2>,
    /// Click on empty hero space, for ambient touch feedback
    pub background_clicked: Option<Pos2>,
}

pub struct Hero {
    streak: LogoStreak,
    pulse_left: f32,
    logo_center: Option<Pos2>,
}

impl Hero {
    pub fn new() -> Self {
        Self {
            streak: LogoStreak::default(),
            pulse_left: 0.0,
            logo_center: None,
        }
    }

    pub fn step(&mut self, dt: f32) {
        if self.pulse_left > 0.0 {
            self.pulse_left = (self.pulse_left - dt).max(0.0);
        }
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse_left > 0.0
    }

    /// Check whether a qualifying streak just finished. On trigger, starts
    /// the logo pulse and returns where the celebration burst should go.
    pub fn poll_easter_egg(&mut self, now: Instant) -> Option<Pos2> {
        if self.streak.poll(now) {
            self.pulse_left = LOGO_PULSE_TOTAL_SECS;
            self.logo_center
        } else {
            None
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, now: Instant, scroll_into_view: bool) -> HeroResponse {
        let mut any_hovered = false;
        let mut follow_clicked = None;

        // The section Ui itself senses clicks. Widgets added inside register
        // on top of it in the hit test, so this response only fires on empty
        // hero space.
        let scope = ui.scope_builder(
            UiBuilder::new().id_salt("hero_background").sense(Sense::click()),
            |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(SECTION_SPACING);
                    let heading = ui.heading(
                        RichText::new("JCTT Digital Campaign")
                            .size(40.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    if scroll_into_view {
                        heading.scroll_to_me(Some(egui::Align::TOP));
                    }
                    ui.label(
                        RichText::new("Official campaign page")
                            .size(18.0)
                            .color(TEXT_WEAK),
                    );
                    ui.add_space(ITEM_SPACING * 2.0);

                    let logo_hovered = self.logo(ui, now);
                    any_hovered |= logo_hovered;

                    ui.add_space(ITEM_SPACING * 2.0);
                    let follow = ui.add(
                        egui::Button::new(
                            RichText::new("Follow the campaign")
                                .size(18.0)
                                .color(Color32::WHITE),
                        )
                        .fill(CAMPAIGN_ORANGE)
                        .min_size(Vec2::new(240.0, 44.0)),
                    );
                    any_hovered |= follow.hovered();
                    if follow.clicked() {
                        follow_clicked =
                            Some(follow.interact_pointer_pos().unwrap_or(follow.rect.center()));
                    }
                    ui.add_space(SECTION_SPACING);
                });
            },
        );

        let background = scope.response;
        let background_clicked = background
            .clicked()
            .then(|| background.interact_pointer_pos())
            .flatten();

        HeroResponse {
            any_hovered,
            follow_clicked,
            background_clicked,
        }
    }

    /// The clickable hexagon logo. Grows briefly while the pulse runs.
    fn logo(&mut self, ui: &mut egui::Ui, now: Instant) -> bool {
        let side = LOGO_RADIUS * 2.0 + 24.0;
        let (rect, resp) = ui.allocate_exact_size(Vec2::splat(side), Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = LOGO_RADIUS * self.pulse_scale();
            let center = rect.center();
            let points: Vec<Pos2> = (0..6)
                .map(|i| {
                    let angle =
                        std::f32::consts::TAU * i as f32 / 6.0 - std::f32::consts::FRAC_PI_2;
                    center + radius * Vec2::new(angle.cos(), angle.sin())
                })
                .collect();
            let painter = ui.painter();
            painter.add(Shape::convex_polygon(
                points,
                CAMPAIGN_ORANGE,
                Stroke::new(3.0, CAMPAIGN_BLUE),
            ));
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "JCTT",
                FontId::proportional(28.0),
                Color32::WHITE,
            );
        }

        self.logo_center = Some(rect.center());
        if resp.clicked() {
            self.streak.register_click(now);
        }
        resp.hovered()
    }

    fn pulse_scale(&self) -> f32 {
        if self.pulse_left <= 0.0 {
            return 1.0;
        }
        let elapsed = LOGO_PULSE_TOTAL_SECS - self.pulse_left;
        let cycle = (elapsed / LOGO_PULSE_PERIOD_SECS).fract();
        1.0 + 0.15 * (cycle * std::f32::consts::PI).sin()
    }
}
