//! Decorative particle effects
//!
//! Pure simulation state, advanced by real elapsed time each frame. Drawing
//! lives in the GUI layer. Spawns within a burst are staggered, and each
//! particle's lifetime is counted from its own first simulation step, not
//! from when the burst was requested.

use egui::{Color32, Pos2, Vec2};
use rand::Rng;

use crate::constants::particles::{
    GRAVITY, LIFETIME_SECS, MAX_LIVE, MAX_STEP_SECS, SIZE_MAX, SIZE_MIN, SPAWN_STAGGER_SECS,
    SPEED_MAX, SPEED_MIN,
};

/// Campaign palette particles are drawn from
const PALETTE: [Color32; 3] = [
    Color32::from_rgb(0xf7, 0x9c, 0x1c),
    Color32::from_rgb(0x10, 0xa8, 0xe0),
    Color32::WHITE,
];

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Pos2,
    vel: Vec2,
    pub radius: f32,
    pub color: Color32,
    age: f32,
}

impl Particle {
    /// Fades linearly from 1 to 0 across the lifetime
    pub fn opacity(&self) -> f32 {
        (1.0 - self.age / LIFETIME_SECS).clamp(0.0, 1.0)
    }

    fn expired(&self) -> bool {
        self.age >= LIFETIME_SECS
    }
}

struct PendingSpawn {
    origin: Pos2,
    delay: f32,
}

/// Live particles plus the queue of scheduled spawns
#[derive(Default)]
pub struct ParticleEmitter {
    live: Vec<Particle>,
    pending: Vec<PendingSpawn>,
}

impl ParticleEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a single particle immediately
    pub fn emit(&mut self, at: Pos2) {
        self.spawn_at(at);
    }

    /// Schedule `count` spawns at `at`, one every stagger interval
    pub fn burst(&mut self, at: Pos2, count: usize) {
        for i in 0..count {
            self.pending.push(PendingSpawn {
                origin: at,
                delay: i as f32 * SPAWN_STAGGER_SECS,
            });
        }
    }

    /// Advance by `dt` seconds of real elapsed time
    /// Runaway frame gaps are clamped so a stalled window cannot teleport
    /// particles or expire a whole burst in one step.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_STEP_SECS);

        // Semi-implicit Euler: velocity first, then position
        for p in &mut self.live {
            p.vel.y += GRAVITY * dt;
            p.pos += p.vel * dt;
            p.age += dt;
        }
        self.live.retain(|p| !p.expired());

        // Release due spawns; their first integration happens next step
        let mut due = Vec::new();
        self.pending.retain_mut(|s| {
            s.delay -= dt;
            if s.delay <= 0.0 {
                due.push(s.origin);
                false
            } else {
                true
            }
        });
        for origin in due {
            self.spawn_at(origin);
        }
    }

    pub fn live(&self) -> &[Particle] {
        &self.live
    }

    /// True when there is nothing to animate and nothing scheduled
    pub fn is_idle(&self) -> bool {
        self.live.is_empty() && self.pending.is_empty()
    }

    fn spawn_at(&mut self, origin: Pos2) {
        // Hard cap on simultaneous particles; excess spawns are dropped
        if self.live.len() >= MAX_LIVE {
            return;
        }
        let mut rng = rand::thread_rng();
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        let diameter = rng.gen_range(SIZE_MIN..SIZE_MAX);
        let speed = rng.gen_range(SPEED_MIN..SPEED_MAX);
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        self.live.push(Particle {
            pos: origin,
            vel: Vec2::new(angle.cos() * speed, angle.sin() * speed),
            radius: diameter / 2.0,
            color,
            age: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2^-6 seconds: partial sums of this step are exact in f32
    const FRAME: f32 = 1.0 / 64.0;

    fn still_particle() -> Particle {
        Particle {
            pos: Pos2::ZERO,
            vel: Vec2::ZERO,
            radius: 3.0,
            color: PALETTE[0],
            age: 0.0,
        }
    }

    #[test]
    fn test_burst_staggers_spawns() {
        let mut emitter = ParticleEmitter::new();
        emitter.burst(Pos2::new(100.0, 100.0), 3);
        assert!(emitter.live().is_empty());

        // Due times are 0ms, 20ms and 40ms; frames land at ~15.6ms each
        emitter.step(FRAME);
        assert_eq!(emitter.live().len(), 1);
        emitter.step(FRAME);
        assert_eq!(emitter.live().len(), 2);
        emitter.step(FRAME);
        assert_eq!(emitter.live().len(), 3);
    }

    #[test]
    fn test_particle_lives_one_second_of_steps() {
        let mut emitter = ParticleEmitter::new();
        emitter.emit(Pos2::ZERO);

        for _ in 0..63 {
            emitter.step(FRAME);
        }
        assert_eq!(emitter.live().len(), 1);

        // The 64th step brings the age to exactly one second
        emitter.step(FRAME);
        assert!(emitter.live().is_empty());
    }

    #[test]
    fn test_lifetimes_are_independent() {
        let mut emitter = ParticleEmitter::new();
        emitter.emit(Pos2::ZERO);
        for _ in 0..32 {
            emitter.step(FRAME);
        }

        emitter.emit(Pos2::ZERO);
        for _ in 0..32 {
            emitter.step(FRAME);
        }
        // The first particle is gone, the second is mid-life
        assert_eq!(emitter.live().len(), 1);

        for _ in 0..32 {
            emitter.step(FRAME);
        }
        assert!(emitter.live().is_empty());
    }

    #[test]
    fn test_opacity_fades_with_age() {
        let mut particle = still_particle();
        assert_eq!(particle.opacity(), 1.0);

        particle.age = 0.25;
        assert!((particle.opacity() - 0.75).abs() < 1e-6);

        particle.age = 1.5;
        assert_eq!(particle.opacity(), 0.0);
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let mut emitter = ParticleEmitter::new();
        emitter.live.push(still_particle());

        emitter.step(0.1);

        // v = g * dt = 20; y = v * dt = 2 (new velocity moves the particle)
        let p = &emitter.live()[0];
        assert!((p.vel.y - 20.0).abs() < 1e-4);
        assert!((p.pos.y - 2.0).abs() < 1e-4);
        assert!(p.pos.x.abs() < 1e-6);
    }

    #[test]
    fn test_spawn_parameter_ranges() {
        let mut emitter = ParticleEmitter::new();
        for _ in 0..200 {
            emitter.emit(Pos2::new(50.0, 50.0));
        }

        for p in emitter.live() {
            assert!(p.radius >= SIZE_MIN / 2.0 && p.radius < SIZE_MAX / 2.0);
            let speed = p.vel.length();
            assert!(speed >= SPEED_MIN - 0.01 && speed < SPEED_MAX + 0.01);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_live_particle_cap() {
        let mut emitter = ParticleEmitter::new();
        for _ in 0..MAX_LIVE + 100 {
            emitter.emit(Pos2::ZERO);
        }
        assert_eq!(emitter.live().len(), MAX_LIVE);
    }

    #[test]
    fn test_runaway_dt_is_clamped() {
        let mut emitter = ParticleEmitter::new();
        emitter.emit(Pos2::ZERO);

        // A five second stall advances the simulation by at most the clamp
        emitter.step(5.0);
        assert_eq!(emitter.live().len(), 1);
        assert!(emitter.live()[0].age <= MAX_STEP_SECS + 1e-6);
    }

    #[test]
    fn test_idle_tracking() {
        let mut emitter = ParticleEmitter::new();
        assert!(emitter.is_idle());

        emitter.burst(Pos2::ZERO, 2);
        // Nothing live yet, but spawns are scheduled
        assert!(!emitter.is_idle());

        for _ in 0..120 {
            emitter.step(FRAME);
        }
        assert!(emitter.is_idle());
    }
}
