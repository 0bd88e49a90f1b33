use std::fmt;

use crate::midi;

/// A Control Change message.
///
/// `value` is a plain byte: the expression pedal path is unclamped and
/// readings outside the calibrated range scale to values outside 0..=127.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CC {
    pub chan: midi::Channel,
    pub nb: Number,
    pub value: u8,
}

impl CC {
    pub const TAG: u8 = 0xb0;

    pub fn new(chan: midi::Channel, nb: Number, value: u8) -> Self {
        CC { chan, nb, value }
    }

    /// The 3 bytes for this message on the wire.
    pub fn to_bytes(self) -> [u8; 3] {
        [
            Self::TAG | self.chan.into_inner(),
            self.nb.into_inner(),
            self.value,
        ]
    }
}

/// A CC controller number (0..=127).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(try_from = "u8")]
pub struct Number(u8);

impl Number {
    pub const MAX: Self = Number(0x7f);

    pub fn into_inner(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Number {
    type Error = midi::Error;

    fn try_from(nb: u8) -> Result<Self, Self::Error> {
        if nb > Self::MAX.0 {
            return Err(midi::Error::CCNumberOutOfRange(nb));
        }

        Ok(Number(nb))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
