//! Pointer feedback effects: click ripples and the custom cursor ring

use egui::{Color32, Painter, Pos2, Stroke};

use crate::gui::constants::{
    CAMPAIGN_BLUE, CAMPAIGN_ORANGE, CURSOR_EASE, CURSOR_HOVER_SCALE, CURSOR_RADIUS,
    RIPPLE_LIFETIME_SECS, RIPPLE_MAX_RADIUS,
};
use crate::particles::ParticleEmitter;

struct Ripple {
    center: Pos2,
    age: f32,
}

impl Ripple {
    fn progress(&self) -> f32 {
        (self.age / RIPPLE_LIFETIME_SECS).clamp(0.0, 1.0)
    }

    fn radius(&self) -> f32 {
        // Ease-out: fast expansion that settles at the rim
        let t = self.progress();
        RIPPLE_MAX_RADIUS * t * (2.0 - t)
    }

    fn opacity(&self) -> f32 {
        1.0 - self.progress()
    }
}

/// Expanding translucent circles spawned at click positions
#[derive(Default)]
pub struct RippleLayer {
    ripples: Vec<Ripple>,
}

impl RippleLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, at: Pos2) {
        self.ripples.push(Ripple {
            center: at,
            age: 0.0,
        });
    }

    pub fn step(&mut self, dt: f32) {
        for ripple in &mut self.ripples {
            ripple.age += dt;
        }
        self.ripples.retain(|r| r.age < RIPPLE_LIFETIME_SECS);
    }

    pub fn draw(&self, painter: &Painter) {
        for ripple in &self.ripples {
            let alpha = ripple.opacity();
            painter.circle_filled(
                ripple.center,
                ripple.radius(),
                Color32::WHITE.gamma_multiply(0.25 * alpha),
            );
        }
    }

    pub fn is_idle(&self) -> bool {
        self.ripples.is_empty()
    }
}

/// Ring that trails the pointer with an eased follow, enlarged over
/// interactive elements. Only used on wide windows.
pub struct CursorRing {
    pos: Option<Pos2>,
    target: Option<Pos2>,
    scale: f32,
    hovering: bool,
}

impl CursorRing {
    pub fn new() -> Self {
        Self {
            pos: None,
            target: None,
            scale: 1.0,
            hovering: false,
        }
    }

    /// Move toward the pointer. `None` hides the ring (pointer left the
    /// window, or the window is too narrow for the effect).
    pub fn step(&mut self, dt: f32, target: Option<Pos2>, hovering: bool) {
        self.target = target;
        let Some(target) = target else {
            self.pos = None;
            return;
        };
        let t = ease_factor(dt);
        self.pos = Some(match self.pos {
            Some(pos) => pos.lerp(target, t),
            None => target,
        });
        self.hovering = hovering;
        let target_scale = if hovering { CURSOR_HOVER_SCALE } else { 1.0 };
        self.scale += (target_scale - self.scale) * t;
    }

    pub fn draw(&self, painter: &Painter) {
        let Some(pos) = self.pos else { return };
        let color = if self.hovering {
            CAMPAIGN_BLUE
        } else {
            CAMPAIGN_ORANGE
        };
        painter.circle_stroke(pos, CURSOR_RADIUS * self.scale, Stroke::new(2.0, color));
        painter.circle_filled(pos, 2.0, color);
    }

    /// True while the ring is still visibly catching up with the pointer
    pub fn is_settling(&self) -> bool {
        let lagging = match (self.pos, self.target) {
            (Some(pos), Some(target)) => (pos - target).length() > 0.5,
            _ => false,
        };
        let scale_target = if self.hovering {
            CURSOR_HOVER_SCALE
        } else {
            1.0
        };
        lagging || (self.pos.is_some() && (self.scale - scale_target).abs() > 0.01)
    }
}

/// Frame-rate independent easing: equals `CURSOR_EASE` at exactly 60fps
fn ease_factor(dt: f32) -> f32 {
    1.0 - (1.0 - CURSOR_EASE).powf(dt * 60.0)
}

/// Paint live particles: a soft glow under a solid core, both fading with age
pub fn draw_particles(painter: &Painter, emitter: &ParticleEmitter) {
    for p in emitter.live() {
        let alpha = p.opacity();
        painter.circle_filled(p.pos, p.radius * 2.0, p.color.gamma_multiply(0.25 * alpha));
        painter.circle_filled(p.pos, p.radius, p.color.gamma_multiply(alpha));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_ripple_expires_after_lifetime() {
        let mut layer = RippleLayer::new();
        layer.spawn(Pos2::new(10.0, 10.0));
        assert!(!layer.is_idle());

        for _ in 0..40 {
            layer.step(FRAME);
        }
        assert!(layer.is_idle());
    }

    #[test]
    fn test_ripple_grows_while_fading() {
        let young = Ripple {
            center: Pos2::ZERO,
            age: 0.1,
        };
        let old = Ripple {
            center: Pos2::ZERO,
            age: 0.5,
        };

        assert!(old.radius() > young.radius());
        assert!(old.opacity() < young.opacity());
        assert!(young.radius() <= RIPPLE_MAX_RADIUS);
    }

    #[test]
    fn test_ripple_opacity_bounds() {
        let fresh = Ripple {
            center: Pos2::ZERO,
            age: 0.0,
        };
        let spent = Ripple {
            center: Pos2::ZERO,
            age: RIPPLE_LIFETIME_SECS,
        };

        assert_eq!(fresh.opacity(), 1.0);
        assert_eq!(spent.opacity(), 0.0);
        assert_eq!(fresh.radius(), 0.0);
    }

    #[test]
    fn test_cursor_converges_on_target() {
        let mut cursor = CursorRing::new();
        let target = Pos2::new(300.0, 200.0);

        cursor.step(FRAME, Some(Pos2::ZERO), false);
        for _ in 0..180 {
            cursor.step(FRAME, Some(target), false);
        }

        let pos = cursor.pos.unwrap();
        assert!((pos - target).length() < 0.5);
    }

    #[test]
    fn test_cursor_scale_follows_hover() {
        let mut cursor = CursorRing::new();
        for _ in 0..180 {
            cursor.step(FRAME, Some(Pos2::ZERO), true);
        }
        assert!((cursor.scale - CURSOR_HOVER_SCALE).abs() < 0.01);

        for _ in 0..180 {
            cursor.step(FRAME, Some(Pos2::ZERO), false);
        }
        assert!((cursor.scale - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_cursor_hides_without_target() {
        let mut cursor = CursorRing::new();
        cursor.step(FRAME, Some(Pos2::ZERO), false);
        assert!(cursor.pos.is_some());

        cursor.step(FRAME, None, false);
        assert!(cursor.pos.is_none());
    }

    #[test]
    fn test_cursor_settles_once_caught_up() {
        let mut cursor = CursorRing::new();
        cursor.step(FRAME, Some(Pos2::ZERO), false);
        cursor.step(FRAME, Some(Pos2::new(400.0, 0.0)), false);
        assert!(cursor.is_settling());

        for _ in 0..240 {
            cursor.step(FRAME, Some(Pos2::new(400.0, 0.0)), false);
        }
        assert!(!cursor.is_settling());
    }

    #[test]
    fn test_ease_factor_matches_reference_frame_rate() {
        assert!((ease_factor(FRAME) - CURSOR_EASE).abs() < 1e-4);
        // Longer frames ease further, shorter frames less
        assert!(ease_factor(2.0 * FRAME) > CURSOR_EASE);
        assert!(ease_factor(0.5 * FRAME) < CURSOR_EASE);
    }
}
