use std::{io, path::PathBuf};

use crate::{config, midi};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", .0)]
    Config(#[from] config::Error),

    #[error("Couldn't open rig device {}: {}", .path.display(), .source)]
    DeviceOpen { path: PathBuf, source: io::Error },

    #[error("{}", .0)]
    Midi(#[from] midi::Error),
}
