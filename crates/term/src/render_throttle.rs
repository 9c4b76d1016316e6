//! Frame pacing for the terminal loop.
//!
//! A frame is drawn when something visible changed (fingerprint), while
//! effects are animating, or once per idle interval so the play clock keeps
//! ticking on screen.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last: None,
        }
    }

    /// Force the next call to render (after a resize).
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let due = match self.last {
            None => true,
            Some((at_ms, fp)) => {
                animating || fp != fingerprint || now_ms.saturating_sub(at_ms) >= self.idle_interval_ms
            }
        };
        if due {
            self.last = Some((now_ms, fingerprint));
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_and_changes_render() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, false));
        assert!(!t.should_render(16, 1, false));
        assert!(t.should_render(32, 2, false));
    }

    #[test]
    fn idle_frames_are_paced() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, false));
        assert!(!t.should_render(249, 1, false));
        assert!(t.should_render(250, 1, false));
        assert!(!t.should_render(260, 1, false));
    }

    #[test]
    fn animation_renders_every_tick() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, true));
        assert!(t.should_render(16, 1, true));
        t.reset();
        assert!(t.should_render(17, 1, false));
    }
}
