//! Saved widget state for carrying a clock across surface re-creation.
//!
//! The record is flat with a fixed field order:
//!
//! | offset | field               | encoding     |
//! |--------|---------------------|--------------|
//! | 0      | second hand color   | u32 LE ARGB  |
//! | 4      | minute hand color   | u32 LE ARGB  |
//! | 8      | hour hand color     | u32 LE ARGB  |
//! | 12     | text color          | u32 LE ARGB  |
//! | 16     | face color          | u32 LE ARGB  |
//! | 20     | shape reference     | u32 LE       |
//! | 24     | paused              | u8, 0 or 1   |
//! | 25     | frozen instant      | i64 LE ms    |

use dialface_engine::scene::ShapeRef;

use super::error::SnapshotError;
use super::pause::PauseState;
use super::theme::{Argb, Theme};

/// Theme and pause state of one clock, in saved-state field order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ClockSnapshot {
    pub second_hand_color: Argb,
    pub minute_hand_color: Argb,
    pub hour_hand_color: Argb,
    pub text_color: Argb,
    pub face_color: Argb,
    pub shape: ShapeRef,
    pub paused: bool,
    pub frozen_instant: i64,
}

impl ClockSnapshot {
    /// Size of an encoded record in bytes.
    pub const ENCODED_LEN: usize = 6 * 4 + 1 + 8;

    pub fn capture(theme: &Theme, pause: &PauseState) -> Self {
        Self {
            second_hand_color: theme.second_hand_color,
            minute_hand_color: theme.minute_hand_color,
            hour_hand_color: theme.hour_hand_color,
            text_color: theme.text_color,
            face_color: theme.face_color,
            shape: theme.shape,
            paused: pause.is_paused(),
            frozen_instant: pause.raw_frozen_instant(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme {
            text_color: self.text_color,
            face_color: self.face_color,
            second_hand_color: self.second_hand_color,
            minute_hand_color: self.minute_hand_color,
            hour_hand_color: self.hour_hand_color,
            shape: self.shape,
        }
    }

    pub fn pause_state(&self) -> PauseState {
        PauseState::from_parts(self.paused, self.frozen_instant)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        for word in [
            self.second_hand_color.0,
            self.minute_hand_color.0,
            self.hour_hand_color.0,
            self.text_color.0,
            self.face_color.0,
            self.shape.id(),
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.push(u8::from(self.paused));
        out.extend_from_slice(&self.frozen_instant.to_le_bytes());
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        match bytes.len() {
            n if n < Self::ENCODED_LEN => return Err(SnapshotError::Truncated { len: n }),
            n if n > Self::ENCODED_LEN => return Err(SnapshotError::TrailingBytes { len: n }),
            _ => {}
        }

        let mut reader = Reader { bytes, pos: 0 };
        let second_hand_color = Argb(reader.u32());
        let minute_hand_color = Argb(reader.u32());
        let hour_hand_color = Argb(reader.u32());
        let text_color = Argb(reader.u32());
        let face_color = Argb(reader.u32());
        let shape = ShapeRef(reader.u32());
        let paused = match reader.u8() {
            0 => false,
            1 => true,
            other => return Err(SnapshotError::InvalidPausedFlag(other)),
        };
        let frozen_instant = reader.i64();

        Ok(Self {
            second_hand_color,
            minute_hand_color,
            hour_hand_color,
            text_color,
            face_color,
            shape,
            paused,
            frozen_instant,
        })
    }
}

/// Cursor over a record whose length was already checked.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        buf
    }

    fn u8(&mut self) -> u8 {
        self.take::<1>()[0]
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    fn i64(&mut self) -> i64 {
        i64::from_le_bytes(self.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClockSnapshot {
        ClockSnapshot {
            second_hand_color: Argb(0xFF11_2233),
            minute_hand_color: Argb(0x8044_5566),
            hour_hand_color: Argb(0x0077_8899),
            text_color: Argb::GRAY,
            face_color: Argb(0xFFFF_E0B2),
            shape: ShapeRef::CLOCK_FACE_ALT,
            paused: true,
            frozen_instant: -1_234_567_890_123,
        }
    }

    #[test]
    fn round_trip_is_exact() {
        let snap = sample();
        let bytes = snap.encode();
        assert_eq!(bytes.len(), ClockSnapshot::ENCODED_LEN);
        assert_eq!(ClockSnapshot::decode(&bytes).unwrap(), snap);
    }

    #[test]
    fn field_order_is_fixed() {
        let bytes = sample().encode();
        assert_eq!(&bytes[0..4], &0xFF11_2233u32.to_le_bytes());
        assert_eq!(&bytes[12..16], &Argb::GRAY.0.to_le_bytes());
        assert_eq!(&bytes[20..24], &2u32.to_le_bytes());
        assert_eq!(bytes[24], 1);
        assert_eq!(&bytes[25..33], &(-1_234_567_890_123i64).to_le_bytes());
    }

    #[test]
    fn capture_and_split_preserve_state() {
        let theme = Theme { text_color: Argb::GRAY, ..Theme::default() };
        // Running, but with a stale frozen instant from an earlier pause.
        let pause = PauseState::from_parts(false, 77);
        let snap = ClockSnapshot::capture(&theme, &pause);
        let back = ClockSnapshot::decode(&snap.encode()).unwrap();
        assert_eq!(back.theme(), theme);
        assert_eq!(back.pause_state(), pause);
        assert_eq!(back.pause_state().raw_frozen_instant(), 77);
    }

    #[test]
    fn short_record_is_truncated() {
        let bytes = sample().encode();
        assert_eq!(
            ClockSnapshot::decode(&bytes[..20]),
            Err(SnapshotError::Truncated { len: 20 })
        );
    }

    #[test]
    fn long_record_has_trailing_bytes() {
        let mut bytes = sample().encode();
        bytes.push(0);
        assert_eq!(
            ClockSnapshot::decode(&bytes),
            Err(SnapshotError::TrailingBytes { len: 34 })
        );
    }

    #[test]
    fn paused_flag_must_be_boolean() {
        let mut bytes = sample().encode();
        bytes[24] = 2;
        let err = ClockSnapshot::decode(&bytes).unwrap_err();
        assert_eq!(err, SnapshotError::InvalidPausedFlag(2));
        assert!(err.to_string().contains("got 2"));
    }
}
