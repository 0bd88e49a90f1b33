use std::sync::Arc;

use super::{cc, Channel};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("MIDI channel {} out of range (max {})", .0, Channel::MAX)]
    ChannelOutOfRange(u8),

    #[error("CC number {} out of range (max {})", .0, cc::Number::MAX)]
    CCNumberOutOfRange(u8),

    #[error("MIDI initialization failed")]
    Init(#[from] midir::InitError),

    #[error("Couldn't retrieve a MIDI port name")]
    PortInfo(#[from] midir::PortInfoError),

    #[error("Couldn't find MIDI port {}", .0)]
    PortNotFound(Arc<str>),

    #[error("MIDI port connection failed")]
    PortConnection,

    #[error("Couldn't send MIDI message: {}", .0)]
    Send(#[from] midir::SendError),
}
