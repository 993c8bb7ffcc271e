/// Why a redraw was requested.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RedrawReason {
    /// Continuous animation while running.
    Animation,
    /// The surface size changed.
    Resize,
    /// The theme changed.
    Theme,
    /// The clock resumed from pause.
    Resume,
    /// State was restored onto a re-created surface.
    Restore,
}

/// Explicit redraw scheduling for one clock face.
///
/// The host polls [`take`](Self::take) on each display refresh and paints
/// when it yields a reason. After painting, [`after_frame`](Self::after_frame)
/// re-arms the loop while running and lets it lapse while paused; external
/// events re-arm it through [`request`](Self::request).
///
/// Pending requests coalesce: only the first reason is kept.
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    pending: Option<RedrawReason>,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, reason: RedrawReason) {
        if self.pending.is_none() {
            log::trace!("redraw requested: {reason:?}");
            self.pending = Some(reason);
        }
    }

    /// Called once a frame has been produced.
    ///
    /// Returns `true` if another frame was scheduled.
    pub fn after_frame(&mut self, paused: bool) -> bool {
        if paused {
            return self.pending.is_some();
        }
        self.request(RedrawReason::Animation);
        true
    }

    /// Cancels any pending frame.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes the pending request, if any.
    pub fn take(&mut self) -> Option<RedrawReason> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_reschedules_every_frame() {
        let mut s = RedrawScheduler::new();
        for _ in 0..3 {
            assert!(s.after_frame(false));
            assert_eq!(s.take(), Some(RedrawReason::Animation));
        }
    }

    #[test]
    fn paused_loop_lapses() {
        let mut s = RedrawScheduler::new();
        assert!(!s.after_frame(true));
        assert_eq!(s.take(), None);
    }

    #[test]
    fn external_request_survives_paused_frame() {
        let mut s = RedrawScheduler::new();
        s.request(RedrawReason::Resize);
        assert!(s.after_frame(true));
        assert_eq!(s.take(), Some(RedrawReason::Resize));
    }

    #[test]
    fn requests_coalesce_keeping_first_reason() {
        let mut s = RedrawScheduler::new();
        s.request(RedrawReason::Theme);
        s.request(RedrawReason::Resize);
        assert_eq!(s.take(), Some(RedrawReason::Theme));
        assert!(!s.is_pending());
    }

    #[test]
    fn cancel_drops_pending() {
        let mut s = RedrawScheduler::new();
        s.request(RedrawReason::Resume);
        s.cancel();
        assert_eq!(s.take(), None);
    }
}
