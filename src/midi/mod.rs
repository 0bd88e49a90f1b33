mod error;
pub use error::Error;

pub mod cc;
pub use cc::CC;

pub mod port;
pub use port::PortsOut;

use std::fmt;

/// A MIDI channel (0..=15).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(try_from = "u8")]
pub struct Channel(u8);

impl Channel {
    pub const MAX: Self = Channel(15);

    pub fn into_inner(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Channel {
    type Error = Error;

    fn try_from(chan: u8) -> Result<Self, Self::Error> {
        if chan > Self::MAX.0 {
            return Err(Error::ChannelOutOfRange(chan));
        }

        Ok(Channel(chan))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
