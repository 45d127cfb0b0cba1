// Entrance animation for the grid: the container fades in while each card
// fades and rises with a per-index start delay. Pure time math lives here so
// the grid code only asks "how transparent / how far down is card i now".

use std::time::Instant;

use crate::ui_constants::entrance::{CARD_FADE_S, CONTAINER_FADE_S, RISE_PX, STAGGER_S};

/// Per-card pose for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    /// 0.0 = invisible, 1.0 = fully shown. Already includes the container fade.
    pub alpha: f32,
    /// Downward offset in logical px; settles at 0.
    pub rise: f32,
}

/// Wall-clock anchor for the running entrance. Restarted whenever the grid
/// remounts (startup or projects reload).
pub struct Entrance {
    started: Option<Instant>,
}

impl Entrance {
    pub fn new() -> Self {
        Self { started: None }
    }

    /// Arm the clock on the first frame the grid is actually drawn.
    pub fn ensure_started(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    pub fn restart(&mut self) {
        self.started = None;
    }

    pub fn elapsed(&self) -> f32 {
        self.started.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0)
    }

    pub fn card_pose(&self, index: usize) -> CardPose {
        card_pose_at(self.elapsed(), index)
    }

    /// True once every card of an `count`-item grid has finished animating.
    pub fn is_settled(&self, count: usize) -> bool {
        is_settled_at(self.elapsed(), count)
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::new()
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

fn container_alpha_at(elapsed: f32) -> f32 {
    (elapsed / CONTAINER_FADE_S).clamp(0.0, 1.0)
}

fn card_pose_at(elapsed: f32, index: usize) -> CardPose {
    let local = elapsed - STAGGER_S * index as f32;
    let progress = ease_out_cubic((local / CARD_FADE_S).clamp(0.0, 1.0));
    CardPose {
        alpha: container_alpha_at(elapsed) * progress,
        rise: RISE_PX * (1.0 - progress),
    }
}

fn is_settled_at(elapsed: f32, count: usize) -> bool {
    if count == 0 {
        return elapsed >= CONTAINER_FADE_S;
    }
    let last_start = STAGGER_S * (count - 1) as f32;
    elapsed >= (last_start + CARD_FADE_S).max(CONTAINER_FADE_S)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_risen() {
        let pose = card_pose_at(0.0, 0);
        assert_eq!(pose.alpha, 0.0);
        assert_eq!(pose.rise, RISE_PX);
    }

    #[test]
    fn card_waits_for_its_stagger_slot() {
        // Just before card 2's slot opens it must still be fully offset.
        let before = card_pose_at(STAGGER_S * 2.0 - 0.01, 2);
        assert_eq!(before.rise, RISE_PX);
        // Once its fade has run, it is settled.
        let after = card_pose_at(STAGGER_S * 2.0 + CARD_FADE_S, 2);
        assert_eq!(after.alpha, 1.0);
        assert_eq!(after.rise, 0.0);
    }

    #[test]
    fn pose_is_monotone_over_time() {
        let mut last = card_pose_at(0.0, 1);
        let mut t = 0.0;
        while t < STAGGER_S + CARD_FADE_S + 0.1 {
            t += 0.016;
            let pose = card_pose_at(t, 1);
            assert!(pose.alpha >= last.alpha);
            assert!(pose.rise <= last.rise);
            last = pose;
        }
    }

    #[test]
    fn settles_exactly_after_last_card() {
        let count = 5;
        let done = STAGGER_S * (count - 1) as f32 + CARD_FADE_S;
        assert!(!is_settled_at(done - 0.01, count));
        assert!(is_settled_at(done, count));
    }

    #[test]
    fn empty_grid_settles_with_the_container() {
        assert!(!is_settled_at(CONTAINER_FADE_S - 0.01, 0));
        assert!(is_settled_at(CONTAINER_FADE_S, 0));
    }

    #[test]
    fn ease_stays_in_unit_range() {
        for i in 0..=100 {
            let v = ease_out_cubic(i as f32 / 100.0);
            assert!((0.0..=1.0).contains(&v));
        }
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }
}
