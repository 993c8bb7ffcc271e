use dialface_engine::time::TimeSource;

/// Running/paused state of a clock face.
///
/// `frozen_instant` is only meaningful while paused. It is captured on the
/// running → paused transition and otherwise left as is, so a resumed clock
/// still carries (and saves) the last frozen value.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PauseState {
    paused: bool,
    frozen_instant: i64,
}

/// What a call to [`PauseState::toggled`] did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PauseTransition {
    /// Running → paused; the face now shows `at`.
    Paused { at: i64 },
    /// Paused → running; the face shows live time again.
    Resumed,
}

impl PauseState {
    #[inline]
    pub const fn running() -> Self {
        Self { paused: false, frozen_instant: 0 }
    }

    #[inline]
    pub const fn paused_at(instant: i64) -> Self {
        Self { paused: true, frozen_instant: instant }
    }

    /// Rebuilds a state verbatim, e.g. from a snapshot.
    #[inline]
    pub const fn from_parts(paused: bool, frozen_instant: i64) -> Self {
        Self { paused, frozen_instant }
    }

    #[inline]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// The instant shown while paused; `None` while running.
    #[inline]
    pub const fn frozen_instant(&self) -> Option<i64> {
        if self.paused { Some(self.frozen_instant) } else { None }
    }

    /// The stored instant regardless of state, for saving.
    #[inline]
    pub const fn raw_frozen_instant(&self) -> i64 {
        self.frozen_instant
    }

    /// Flips the paused bit. `now` is captured only when pausing.
    #[must_use]
    pub fn toggled(self, now: i64) -> (PauseState, PauseTransition) {
        if self.paused {
            (Self { paused: false, ..self }, PauseTransition::Resumed)
        } else {
            (Self::paused_at(now), PauseTransition::Paused { at: now })
        }
    }

    /// The instant a frame should render: frozen while paused, live otherwise.
    ///
    /// Read it once per frame and share the value between all hands.
    #[inline]
    pub fn current_instant<C: TimeSource + ?Sized>(&self, clock: &C) -> i64 {
        match self.frozen_instant() {
            Some(frozen) => frozen,
            None => clock.now_millis(),
        }
    }
}
