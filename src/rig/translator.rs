use std::collections::HashMap;

use evdev::{AbsoluteAxisType, InputEvent, InputEventKind, Key};

use crate::{midi, rig::Switch};

/// How a bound switch drives its CC.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwitchMode {
    /// Mirrors the physical state: 127 on press, 0 on release.
    Momentary,
    /// Each press flips the latch and sends the new value, releases are inert.
    Toggle,
}

/// The CC a physical switch drives.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SwitchBinding {
    pub nb: midi::cc::Number,
    pub mode: SwitchMode,
}

/// Expression pedal assignment and calibration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pedal {
    nb: midi::cc::Number,
    min: i32,
    scale: f32,
}

impl Pedal {
    /// The axis the pedal reports on.
    pub const AXIS: AbsoluteAxisType = AbsoluteAxisType::ABS_X;

    pub fn new(nb: midi::cc::Number, min: i32, max: i32) -> Self {
        Pedal {
            nb,
            min,
            scale: 127.0 / (max - min) as f32,
        }
    }
}

struct BoundSwitch {
    nb: midi::cc::Number,
    mode: SwitchMode,
    latched: bool,
}

/// Translates raw rig events into CC messages for the Axe-Fx.
///
/// Owns all the runtime state: the toggle latches and the last raw
/// pedal value for which a message was emitted.
pub struct Translator {
    chan: midi::Channel,
    switches: HashMap<Switch, BoundSwitch>,
    pedal: Option<Pedal>,
    last_pedal: i32,
}

impl Translator {
    pub fn new(
        chan: midi::Channel,
        bindings: impl IntoIterator<Item = (Switch, SwitchBinding)>,
        pedal: Option<Pedal>,
    ) -> Self {
        Translator {
            chan,
            switches: bindings
                .into_iter()
                .map(|(sw, binding)| {
                    (
                        sw,
                        BoundSwitch {
                            nb: binding.nb,
                            mode: binding.mode,
                            latched: false,
                        },
                    )
                })
                .collect(),
            pedal,
            // 0 also suppresses an initial reading at the low stop.
            last_pedal: 0,
        }
    }

    /// Translates a raw input event into at most one CC message.
    pub fn translate(&mut self, event: &InputEvent) -> Option<midi::CC> {
        match event.kind() {
            InputEventKind::Key(key) => self.translate_key(key, event.value()),
            InputEventKind::AbsAxis(axis) => self.translate_pedal(axis, event.value()),
            _ => None,
        }
    }

    fn translate_key(&mut self, key: Key, value: i32) -> Option<midi::CC> {
        let sw = Switch::from_key(key)?;
        let bound = self.switches.get_mut(&sw)?;

        // Auto-repeat (value 2) counts as a press.
        let pressed = value != 0;

        let value = match bound.mode {
            SwitchMode::Momentary => {
                if pressed {
                    0x7f
                } else {
                    0
                }
            }
            SwitchMode::Toggle => {
                if !pressed {
                    return None;
                }

                bound.latched = !bound.latched;
                if bound.latched {
                    0x7f
                } else {
                    0
                }
            }
        };

        Some(midi::CC::new(self.chan, bound.nb, value))
    }

    fn translate_pedal(&mut self, axis: AbsoluteAxisType, raw: i32) -> Option<midi::CC> {
        let pedal = self.pedal.as_ref()?;

        if axis != Pedal::AXIS || raw == self.last_pedal {
            return None;
        }

        self.last_pedal = raw;

        // Unclamped: an uncalibrated pedal can produce values outside 0..=127.
        let scaled = ((raw - pedal.min) as f32 * pedal.scale).round() as i32;

        Some(midi::CC::new(self.chan, pedal.nb, scaled as u8))
    }
}
