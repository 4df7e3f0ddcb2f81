use bevy::log::{debug, info};
use bevy::prelude::Resource;
use horizon_core::config::sanitize;
use horizon_core::constants::{MIN_FRAME_MS, NUDGE_STEP, REPLENISH_THRESHOLD};
use horizon_core::{Body, Bounds, ConfigPatch, Particle, SimConfig};
use horizon_physics::particle::{SpawnProfile, generate_population, spawn_particle};
use horizon_physics::{GravityStrength, schwarzschild_radius_km};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::integrator::{self, StepStats};
use crate::presets::Preset;
use crate::quality::{QualityController, QualityState};
use crate::scheduler::{FrameDecision, FrameScheduler};

/// Run state and time bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    pub running: bool,
    /// Simulated seconds, advances only while running
    pub simulation_time: f64,
    /// Host time of the last tick (sum of reported frame durations, ms)
    pub last_tick_timestamp: f64,
}

/// Renderer signals produced by one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Draw tick: the simulation advanced (if running) and a frame should be drawn
    pub drawn: bool,
    /// Expensive decorative layers are due this frame
    pub draw_heavy_layers: bool,
    /// Static background cache should be rebuilt
    pub rebuild_background: bool,
    /// Display scale moved; scale-sized caches are stale
    pub display_scale_changed: bool,
    pub tier_changed: bool,
}

/// One self-contained simulation: body, particle pool, quality state and clock.
/// All mutation happens through these methods, one caller at a time.
#[derive(Resource)]
pub struct Simulation {
    /// Values restored by `reset()`
    defaults: SimConfig,
    body: Body,
    bounds: Bounds,
    particles: Vec<Particle>,
    particle_cap: u32,
    simulation_speed: f32,
    /// Cap in force for the next integration step
    effective_cap: u32,
    quality: QualityController,
    scheduler: FrameScheduler,
    clock: SimulationClock,
    rng: ChaCha8Rng,
    /// Set by resize; reported on the next tick
    caches_dirty: bool,
    /// Removal counts from the last integration step
    last_step: StepStats,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let defaults = config.clamped();
        let bounds = Bounds::new(defaults.width, defaults.height);
        let body = Body::new(
            bounds.center(),
            defaults.mass,
            defaults.spin,
            defaults.body_radius,
        );
        let quality = QualityController::new(defaults.native_display_scale);
        let effective_cap = quality.effective_cap(defaults.particle_cap);

        let mut sim = Self {
            body,
            bounds,
            particles: Vec::new(),
            particle_cap: defaults.particle_cap,
            simulation_speed: defaults.simulation_speed,
            effective_cap,
            quality,
            scheduler: FrameScheduler::new(),
            clock: SimulationClock::default(),
            rng: ChaCha8Rng::seed_from_u64(defaults.seed),
            caches_dirty: false,
            last_step: StepStats::default(),
            defaults,
        };
        sim.regenerate();
        sim
    }

    // --- Run control ---

    pub fn start(&mut self) {
        self.clock.running = true;
    }

    pub fn pause(&mut self) {
        self.clock.running = false;
    }

    pub fn toggle_running(&mut self) {
        self.clock.running = !self.clock.running;
    }

    pub fn is_running(&self) -> bool {
        self.clock.running
    }

    /// Restore configuration, clock and top quality tier, then reseed the
    /// population from the configured seed. Body position and bounds are kept.
    pub fn reset(&mut self) {
        let defaults = self.defaults.clone();
        self.clock.running = false;
        self.clock.simulation_time = 0.0;
        self.body.mass = defaults.mass;
        self.body.spin = defaults.spin;
        self.body.radius = defaults.body_radius;
        self.particle_cap = defaults.particle_cap;
        self.simulation_speed = defaults.simulation_speed;
        self.quality.reset_tier();
        self.rng = ChaCha8Rng::seed_from_u64(defaults.seed);
        self.regenerate();
        info!("Simulation reset to defaults (seed {})", defaults.seed);
    }

    // --- Configuration ---

    /// Apply a partial configuration. Values are clamped; a mass or cap change
    /// regenerates the population.
    pub fn configure(&mut self, patch: ConfigPatch) {
        if self.apply_patch(&patch) {
            self.regenerate();
        }
    }

    /// Returns true when the population needs regenerating
    fn apply_patch(&mut self, patch: &ConfigPatch) -> bool {
        let mut regenerate = false;

        if let Some(mass) = patch.mass {
            let applied = SimConfig::clamp_mass(mass, self.body.mass);
            log_clamp("mass", mass, applied);
            regenerate |= applied != self.body.mass;
            self.body.mass = applied;
        }

        if let Some(spin) = patch.spin {
            let applied = SimConfig::clamp_spin(spin, self.body.spin);
            log_clamp("spin", spin, applied);
            self.body.spin = applied;
        }

        if let Some(cap) = patch.particle_cap {
            let applied = SimConfig::clamp_cap(cap);
            if applied != cap {
                debug!("Clamped particle_cap {} -> {}", cap, applied);
            }
            regenerate |= applied != self.particle_cap;
            self.particle_cap = applied;
        }

        if let Some(speed) = patch.simulation_speed {
            let applied = SimConfig::clamp_speed(speed, self.simulation_speed);
            log_clamp("simulation_speed", speed, applied);
            self.simulation_speed = applied;
        }

        if let Some(position) = patch.body_position {
            self.body.position = self.clamp_to_bounds(position);
        }

        regenerate
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.configure(ConfigPatch::default().mass(mass));
    }

    pub fn set_spin(&mut self, spin: f32) {
        self.configure(ConfigPatch::default().spin(spin));
    }

    pub fn set_particle_cap(&mut self, cap: u32) {
        self.configure(ConfigPatch::default().particle_cap(cap));
    }

    pub fn set_simulation_speed(&mut self, speed: f32) {
        self.configure(ConfigPatch::default().simulation_speed(speed));
    }

    pub fn set_body_position(&mut self, position: [f32; 2]) {
        self.configure(ConfigPatch::default().body_position(position));
    }

    /// Pointer placement: ignored when the target is within three radii of the body
    pub fn move_body_to(&mut self, position: [f32; 2]) -> bool {
        if self.body.distance_to(position) <= self.body.radius * 3.0 {
            return false;
        }
        self.set_body_position(position);
        true
    }

    /// Step the body by whole nudges, keeping it a radius away from every edge
    pub fn nudge_body(&mut self, dx: i32, dy: i32) {
        let r = self.body.radius;
        let max_x = (self.bounds.width - r).max(r);
        let max_y = (self.bounds.height - r).max(r);
        self.body.position[0] = (self.body.position[0] + dx as f32 * NUDGE_STEP).clamp(r, max_x);
        self.body.position[1] = (self.body.position[1] + dy as f32 * NUDGE_STEP).clamp(r, max_y);
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        info!("Applying preset {}", preset.name);
        self.apply_patch(
            &ConfigPatch::default()
                .mass(preset.mass)
                .spin(preset.spin)
                .particle_cap(preset.particles),
        );
        // Unchanged values still get a fresh population
        self.regenerate();
    }

    /// Random mass, spin and cap drawn from the simulation's own RNG
    pub fn randomize(&mut self) {
        let mass = self.rng.gen_range(5..55_u32) as f32;
        let spin = self.rng.gen_range(0..=10_u32) as f32 / 10.0;
        let cap: u32 = self.rng.gen_range(200..1200);
        info!("Randomized: mass {}, spin {:.1}, cap {}", mass, spin, cap);
        self.apply_patch(
            &ConfigPatch::default()
                .mass(mass)
                .spin(spin)
                .particle_cap(cap),
        );
        self.regenerate();
    }

    /// New working area. Rebuilds the population and marks caches stale.
    pub fn resize(&mut self, width: f32, height: f32, recenter: bool) {
        let width = sanitize(width, self.bounds.width, 1.0, f32::MAX);
        let height = sanitize(height, self.bounds.height, 1.0, f32::MAX);
        self.bounds = Bounds::new(width, height);
        if recenter {
            self.body.position = self.bounds.center();
        } else {
            self.body.position = self.clamp_to_bounds(self.body.position);
        }
        self.caches_dirty = true;
        self.regenerate();
    }

    // --- Tick ---

    /// Advance by one host frame of `frame_ms` milliseconds.
    ///
    /// The quality controller updates on every call. The integrator and
    /// replenishment run only on draw ticks while running, and use the cap
    /// that was in force before this tick's quality update.
    pub fn tick(&mut self, frame_ms: f64) -> TickReport {
        let frame_ms = if frame_ms.is_finite() {
            frame_ms.max(MIN_FRAME_MS)
        } else {
            MIN_FRAME_MS
        };

        self.clock.last_tick_timestamp += frame_ms;
        if self.clock.running {
            self.clock.simulation_time += frame_ms * 0.001 * self.simulation_speed as f64;
        }

        let step_cap = self.effective_cap;
        let update = self.quality.update(frame_ms);
        self.effective_cap = self.quality.effective_cap(self.particle_cap);

        let decision = self
            .scheduler
            .advance(frame_ms, self.quality.state().target_fps);
        let drawn = decision == FrameDecision::Draw;

        if drawn && self.clock.running {
            self.step(step_cap);
        }

        let heavy_interval = self.quality.state().heavy_layer_interval.max(1) as u64;
        let report = TickReport {
            drawn,
            draw_heavy_layers: drawn && self.scheduler.draw_count() % heavy_interval == 0,
            rebuild_background: update.rebuild_background || self.caches_dirty,
            display_scale_changed: update.display_scale_changed,
            tier_changed: update.tier_change.is_some(),
        };
        self.caches_dirty = false;
        report
    }

    /// Integrate, trim to the cap, then top the pool back up
    fn step(&mut self, cap: u32) {
        self.last_step = integrator::integrate(
            &mut self.particles,
            &self.body,
            &self.bounds,
            self.simulation_speed,
        );

        let cap = cap as usize;
        if self.particles.len() > cap {
            self.particles.truncate(cap);
        }

        if (self.particles.len() as f32) < cap as f32 * REPLENISH_THRESHOLD {
            let needed = cap - self.particles.len();
            for _ in 0..needed {
                let particle = spawn_particle(
                    &self.body,
                    &self.bounds,
                    SpawnProfile::Replenish,
                    &mut self.rng,
                );
                self.particles.push(particle);
            }
            debug!("Replenished {} particles ({} live)", needed, self.particles.len());
        }
    }

    /// Replace the pool with a freshly seeded population at the effective cap
    pub fn regenerate(&mut self) {
        self.effective_cap = self.quality.effective_cap(self.particle_cap);
        self.particles = generate_population(
            self.effective_cap as usize,
            &self.body,
            &self.bounds,
            &mut self.rng,
        );
        info!("Generated {} particles", self.particles.len());
    }

    fn clamp_to_bounds(&self, position: [f32; 2]) -> [f32; 2] {
        let [cx, cy] = self.body.position;
        [
            sanitize(position[0], cx, 0.0, self.bounds.width),
            sanitize(position[1], cy, 0.0, self.bounds.height),
        ]
    }

    // --- Renderer-facing views ---

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Pool as raw bytes for GPU upload
    pub fn particle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn quality(&self) -> &QualityState {
        self.quality.state()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn particle_cap(&self) -> u32 {
        self.particle_cap
    }

    pub fn effective_cap(&self) -> u32 {
        self.effective_cap
    }

    pub fn simulation_speed(&self) -> f32 {
        self.simulation_speed
    }

    pub fn last_step(&self) -> StepStats {
        self.last_step
    }

    pub fn schwarzschild_radius_km(&self) -> f64 {
        schwarzschild_radius_km(self.body.mass)
    }

    pub fn gravity_strength(&self) -> GravityStrength {
        GravityStrength::classify(self.body.mass)
    }

    /// Mutable pool access for hosts that inject particles directly (tests, tooling)
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

fn log_clamp(field: &str, requested: f32, applied: f32) {
    if requested != applied {
        debug!("Clamped {} {} -> {}", field, requested, applied);
    }
}
