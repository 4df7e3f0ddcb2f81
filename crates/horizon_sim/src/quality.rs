use bevy::log::info;
use horizon_core::constants::{
    DISPLAY_SCALE_EPSILON, FRAME_EMA_DECAY, FRAME_EMA_SAMPLE_WEIGHT, INITIAL_FRAME_TIME_MS,
    MIN_EFFECTIVE_CAP, TIER_DOWN_MS, TIER_UP_MS,
};
use horizon_core::QualityTier;
use serde::{Deserialize, Serialize};

/// Quality parameters for the current tick, read by renderers and the lifecycle manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityState {
    pub tier: QualityTier,
    /// Exponential moving average of frame time, always > 0
    pub frame_time_avg_ms: f64,
    /// 60, 30 or 20
    pub target_fps: u32,
    pub segments: u32,
    pub redraw_interval_frames: u32,
    /// Rendering resolution multiplier
    pub display_scale: f32,
    pub particle_cap_scale: f64,
    pub heavy_layer_interval: u32,
    /// Controller updates since creation
    pub frame_count: u64,
}

impl QualityState {
    fn new(native_display_scale: f32) -> Self {
        let mut state = Self {
            tier: QualityTier::High,
            frame_time_avg_ms: INITIAL_FRAME_TIME_MS,
            target_fps: 60,
            segments: 0,
            redraw_interval_frames: 0,
            display_scale: native_display_scale,
            particle_cap_scale: 1.0,
            heavy_layer_interval: 1,
            frame_count: 0,
        };
        state.apply_tier();
        state
    }

    fn apply_tier(&mut self) {
        let params = self.tier.params();
        self.segments = params.segments;
        self.redraw_interval_frames = params.redraw_interval_frames;
        self.particle_cap_scale = params.particle_cap_scale;
        self.heavy_layer_interval = params.heavy_layer_interval;
    }

    /// Frame budget implied by the target frame rate
    pub fn frame_budget_ms(&self) -> f64 {
        1000.0 / self.target_fps as f64
    }
}

/// What changed during one controller update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QualityUpdate {
    /// (from, to) when the tier moved
    pub tier_change: Option<(QualityTier, QualityTier)>,
    /// Resolution multiplier moved; scale-sized caches are stale
    pub display_scale_changed: bool,
    /// Periodic static background rebuild is due
    pub rebuild_background: bool,
}

/// Effective particle cap for a configured cap under a tier's scale
pub fn effective_cap(configured_cap: u32, particle_cap_scale: f64) -> u32 {
    let scaled = (configured_cap as f64 * particle_cap_scale).floor() as u32;
    scaled.max(MIN_EFFECTIVE_CAP)
}

/// Target frame rate for a smoothed frame time
pub fn target_fps_for(frame_time_avg_ms: f64) -> u32 {
    if frame_time_avg_ms > 28.0 {
        20
    } else if frame_time_avg_ms > 20.0 {
        30
    } else {
        60
    }
}

/// Display scale for a smoothed frame time
pub fn display_scale_for(frame_time_avg_ms: f64, native_display_scale: f32) -> f32 {
    if frame_time_avg_ms > 26.0 {
        1.25
    } else if frame_time_avg_ms > 20.0 {
        1.5
    } else {
        native_display_scale
    }
}

/// Closed feedback loop holding the frame budget.
///
/// Each update folds one frame time into the EMA, moves the tier by at most
/// one step (down above TIER_DOWN_MS, up below TIER_UP_MS) and re-derives the
/// tier table, target frame rate and display scale.
#[derive(Debug, Clone)]
pub struct QualityController {
    state: QualityState,
    native_display_scale: f32,
}

impl QualityController {
    pub fn new(native_display_scale: f32) -> Self {
        Self {
            state: QualityState::new(native_display_scale),
            native_display_scale,
        }
    }

    pub fn state(&self) -> &QualityState {
        &self.state
    }

    pub fn tier(&self) -> QualityTier {
        self.state.tier
    }

    pub fn effective_cap(&self, configured_cap: u32) -> u32 {
        effective_cap(configured_cap, self.state.particle_cap_scale)
    }

    /// Back to the top tier; the frame-time average keeps its history
    pub fn reset_tier(&mut self) {
        self.state.tier = QualityTier::High;
        self.state.apply_tier();
    }

    /// Fold one measured frame time (ms) into the controller
    pub fn update(&mut self, frame_ms: f64) -> QualityUpdate {
        let mut update = QualityUpdate::default();
        let state = &mut self.state;

        state.frame_time_avg_ms =
            state.frame_time_avg_ms * FRAME_EMA_DECAY + frame_ms * FRAME_EMA_SAMPLE_WEIGHT;
        state.frame_count = state.frame_count.wrapping_add(1);

        let previous = state.tier;
        if state.frame_time_avg_ms > TIER_DOWN_MS && state.tier > QualityTier::Low {
            state.tier = state.tier.step_down();
        } else if state.frame_time_avg_ms < TIER_UP_MS && state.tier < QualityTier::High {
            state.tier = state.tier.step_up();
        }
        if state.tier != previous {
            info!(
                "Quality tier {} -> {} (avg frame {:.2} ms)",
                previous.name(),
                state.tier.name(),
                state.frame_time_avg_ms
            );
            update.tier_change = Some((previous, state.tier));
        }
        state.apply_tier();

        state.target_fps = target_fps_for(state.frame_time_avg_ms);

        let desired = display_scale_for(state.frame_time_avg_ms, self.native_display_scale);
        if (state.display_scale - desired).abs() > DISPLAY_SCALE_EPSILON {
            info!(
                "Display scale {:.2} -> {:.2} (avg frame {:.2} ms)",
                state.display_scale, desired, state.frame_time_avg_ms
            );
            state.display_scale = desired;
            update.display_scale_changed = true;
        }

        update.rebuild_background = update.display_scale_changed
            || state.frame_count % state.redraw_interval_frames as u64 == 0;

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_high() {
        let controller = QualityController::new(2.0);
        let state = controller.state();
        assert_eq!(state.tier, QualityTier::High);
        assert_eq!(state.segments, 100);
        assert_eq!(state.target_fps, 60);
        assert_eq!(state.display_scale, 2.0);
        assert!(state.frame_time_avg_ms > 0.0);
    }

    #[test]
    fn test_ema_step() {
        let mut controller = QualityController::new(2.0);
        controller.update(30.0);
        let expected = INITIAL_FRAME_TIME_MS * 0.9 + 30.0 * 0.1;
        assert!((controller.state().frame_time_avg_ms - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ema_converges_from_below() {
        let mut controller = QualityController::new(2.0);
        let mut last = controller.state().frame_time_avg_ms;
        for _ in 0..300 {
            controller.update(30.0);
            let avg = controller.state().frame_time_avg_ms;
            assert!(avg >= last, "EMA moved away from the input");
            assert!(avg <= 30.0 + 1e-9, "EMA overshot");
            last = avg;
        }
        assert!((last - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_steady_push_to_low() {
        let mut controller = QualityController::new(2.0);
        for _ in 0..20 {
            controller.update(30.0);
        }
        assert_eq!(controller.tier(), QualityTier::Low);
        assert_eq!(controller.effective_cap(500), 225);
    }

    #[test]
    fn test_one_step_per_update() {
        let mut controller = QualityController::new(2.0);
        let inputs = [500.0, 500.0, 0.1, 0.1, 0.1, 250.0, 1.0, 90.0, 0.5, 0.5];
        let mut previous = controller.tier().level() as i32;
        for frame_ms in inputs.iter().cycle().take(200) {
            let update = controller.update(*frame_ms);
            let level = controller.tier().level() as i32;
            assert!((level - previous).abs() <= 1);
            assert!((1..=3).contains(&level));
            assert_eq!(update.tier_change.is_some(), level != previous);
            previous = level;
        }
    }

    #[test]
    fn test_recovers_to_high() {
        let mut controller = QualityController::new(2.0);
        for _ in 0..40 {
            controller.update(40.0);
        }
        assert_eq!(controller.tier(), QualityTier::Low);
        for _ in 0..80 {
            controller.update(5.0);
        }
        assert_eq!(controller.tier(), QualityTier::High);
        assert_eq!(controller.state().target_fps, 60);
        assert_eq!(controller.state().display_scale, 2.0);
    }

    #[test]
    fn test_hysteresis_band_holds_tier() {
        let mut controller = QualityController::new(2.0);
        for _ in 0..200 {
            controller.update(18.0);
        }
        assert_eq!(controller.tier(), QualityTier::High);
    }

    #[test]
    fn test_target_fps_and_scale_thresholds() {
        assert_eq!(target_fps_for(29.0), 20);
        assert_eq!(target_fps_for(25.0), 30);
        assert_eq!(target_fps_for(20.0), 60);
        assert_eq!(display_scale_for(27.0, 2.0), 1.25);
        assert_eq!(display_scale_for(21.0, 2.0), 1.5);
        assert_eq!(display_scale_for(16.0, 2.0), 2.0);
    }

    #[test]
    fn test_display_scale_change_requests_rebuild() {
        let mut controller = QualityController::new(2.0);
        let mut saw_change = false;
        for _ in 0..30 {
            let update = controller.update(30.0);
            if update.display_scale_changed {
                assert!(update.rebuild_background);
                saw_change = true;
            }
        }
        assert!(saw_change);
        assert_eq!(controller.state().display_scale, 1.25);
    }

    #[test]
    fn test_periodic_background_rebuild() {
        let mut controller = QualityController::new(2.0);
        let rebuilds = (0..480)
            .filter(|_| controller.update(16.0).rebuild_background)
            .count();
        assert_eq!(rebuilds, 2);
    }

    #[test]
    fn test_effective_cap_floor() {
        assert_eq!(effective_cap(50, 1.0), 100);
        assert_eq!(effective_cap(500, 0.7), 350);
        assert_eq!(effective_cap(1000, 0.45), 450);
    }

    #[test]
    fn test_reset_tier_keeps_average() {
        let mut controller = QualityController::new(2.0);
        for _ in 0..20 {
            controller.update(30.0);
        }
        let avg = controller.state().frame_time_avg_ms;
        controller.reset_tier();
        assert_eq!(controller.tier(), QualityTier::High);
        assert_eq!(controller.state().redraw_interval_frames, 240);
        assert_eq!(controller.state().frame_time_avg_ms, avg);
    }
}
