/// Outcome of one scheduler step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDecision {
    /// Advance the simulation and draw
    Draw,
    /// Bookkeeping only
    Skip,
}

/// Converts the controller's target frame rate into draw/skip decisions.
/// Time is accumulated from the host-reported frame durations.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    /// Host time since the last draw tick (ms)
    since_last_draw_ms: f64,
    /// Draw ticks issued so far
    draw_count: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_budget_ms(target_fps: u32) -> f64 {
        1000.0 / target_fps.max(1) as f64
    }

    pub fn advance(&mut self, frame_ms: f64, target_fps: u32) -> FrameDecision {
        self.since_last_draw_ms += frame_ms;
        if self.since_last_draw_ms < Self::frame_budget_ms(target_fps) {
            return FrameDecision::Skip;
        }
        self.since_last_draw_ms = 0.0;
        self.draw_count = self.draw_count.wrapping_add(1);
        FrameDecision::Draw
    }

    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    pub fn since_last_draw_ms(&self) -> f64 {
        self.since_last_draw_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_every_frame_at_budget() {
        let mut scheduler = FrameScheduler::new();
        for _ in 0..10 {
            assert_eq!(scheduler.advance(17.0, 60), FrameDecision::Draw);
        }
        assert_eq!(scheduler.draw_count(), 10);
    }

    #[test]
    fn test_skips_until_budget_spent() {
        // 30 fps budget is ~33.3 ms: 10 ms frames draw every 4th tick
        let mut scheduler = FrameScheduler::new();
        let decisions: Vec<_> = (0..8).map(|_| scheduler.advance(10.0, 30)).collect();
        let draws = decisions.iter().filter(|d| **d == FrameDecision::Draw).count();
        assert_eq!(draws, 2);
        assert_eq!(decisions[3], FrameDecision::Draw);
        assert_eq!(decisions[7], FrameDecision::Draw);
    }

    #[test]
    fn test_draw_resets_accumulator() {
        let mut scheduler = FrameScheduler::new();
        assert_eq!(scheduler.advance(60.0, 20), FrameDecision::Draw);
        assert_eq!(scheduler.since_last_draw_ms(), 0.0);
        assert_eq!(scheduler.advance(10.0, 20), FrameDecision::Skip);
    }
}
