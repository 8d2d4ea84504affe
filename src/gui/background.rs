//! Decorative floating shapes behind the page content
//!
//! Shapes drift slowly on their own and shift against the scroll direction,
//! each with a slightly deeper parallax factor than the one before it.

use egui::{Color32, Painter, Pos2, Rect};

use crate::gui::constants::{CAMPAIGN_BLUE, CAMPAIGN_ORANGE, PARALLAX_BASE, PARALLAX_STEP};

struct ShapeSpec {
    /// Position as a fraction of the screen rect
    rel: Pos2,
    radius: f32,
    color: Color32,
    /// Phase offset so the shapes do not bob in unison
    phase: f32,
}

pub struct FloatingShapes {
    shapes: Vec<ShapeSpec>,
    time: f32,
}

impl FloatingShapes {
    pub fn new() -> Self {
        let orange = CAMPAIGN_ORANGE.gamma_multiply(0.10);
        let blue = CAMPAIGN_BLUE.gamma_multiply(0.10);
        let white = Color32::WHITE.gamma_multiply(0.05);
        Self {
            shapes: vec![
                shape(0.12, 0.18, 90.0, orange, 0.0),
                shape(0.85, 0.12, 60.0, blue, 1.3),
                shape(0.70, 0.45, 120.0, white, 2.1),
                shape(0.20, 0.70, 70.0, blue, 3.4),
                shape(0.90, 0.80, 100.0, orange, 4.2),
                shape(0.45, 0.92, 50.0, white, 5.0),
            ],
            time: 0.0,
        }
    }

    pub fn step(&mut self, dt: f32) {
        self.time += dt;
    }

    pub fn draw(&self, painter: &Painter, screen: Rect, scroll: f32) {
        for (index, shape) in self.shapes.iter().enumerate() {
            let bob = (self.time * 0.4 + shape.phase).sin() * 10.0;
            let center = Pos2::new(
                screen.left() + shape.rel.x * screen.width(),
                screen.top()
                    + shape.rel.y * screen.height()
                    + bob
                    + parallax_shift(scroll, index),
            );
            painter.circle_filled(center, shape.radius, shape.color);
        }
    }
}

fn shape(x: f32, y: f32, radius: f32, color: Color32, phase: f32) -> ShapeSpec {
    ShapeSpec {
        rel: Pos2::new(x, y),
        radius,
        color,
        phase,
    }
}

/// Vertical offset for a shape given the scroll position. Later shapes get a
/// deeper factor and move further against the scroll.
fn parallax_shift(scroll: f32, index: usize) -> f32 {
    -(scroll * (PARALLAX_BASE + PARALLAX_STEP * index as f32))
}
