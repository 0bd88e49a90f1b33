use std::{io, path::Path};

use evdev::InputEvent;

/// The rig input device (the foot switch box).
pub struct Device(evdev::Device);

impl Device {
    pub fn open(path: &Path) -> io::Result<Self> {
        let dev = evdev::Device::open(path)?;

        match dev.name() {
            Some(name) => log::info!("Reading rig events from {} ({name})", path.display()),
            None => log::info!("Reading rig events from {}", path.display()),
        }

        Ok(Device(dev))
    }

    /// Blocks until at least one event can be read.
    ///
    /// `Err` means the device is gone and the stream is over.
    pub fn fetch_events(&mut self) -> io::Result<impl Iterator<Item = InputEvent> + '_> {
        self.0.fetch_events()
    }
}
