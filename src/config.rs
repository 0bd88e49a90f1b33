use std::{collections::BTreeMap, fs, io, path::PathBuf, sync::Arc};

use serde::Deserialize;

use crate::{
    midi,
    rig::{Pedal, Switch, SwitchBinding, SwitchMode},
};

/// The configuration file, looked up in the current directory.
pub const FILE_NAME: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Couldn't read {FILE_NAME}: {}", .0)]
    Read(#[from] io::Error),

    #[error("Couldn't parse {FILE_NAME}: {}", .0)]
    Parse(#[from] serde_json::Error),

    #[error("Empty pedal range {min}..{max}")]
    PedalRange { min: i32, max: i32 },
}

/// Validated configuration, immutable once loaded.
#[derive(Debug)]
pub struct Config {
    pub rig_device: PathBuf,
    pub port: Arc<str>,
    pub chan: midi::Channel,
    pub switches: Vec<(Switch, SwitchBinding)>,
    pub pedal: Option<Pedal>,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        Self::parse(&fs::read_to_string(FILE_NAME)?)
    }

    fn parse(json: &str) -> Result<Self, Error> {
        let mut doc: Document = serde_json::from_str(json)?;

        let mut switches = Vec::new();
        for sw in Switch::ALL {
            if let Some(entry) = doc.switch.get(sw.as_str()) {
                match switch_binding(entry) {
                    Some(binding) => switches.push((sw, binding)),
                    None => log::warn!("No cc assigned to switch {sw}, leaving it unbound"),
                }
            }
        }

        if switches.is_empty() {
            log::warn!("No switches are configured");
        }

        let pedal = match doc.switch.remove("pedal") {
            Some(entry) => pedal_config(serde_json::from_value(entry)?)?,
            None => None,
        };

        Ok(Config {
            rig_device: doc.rig_device,
            port: doc.axe_midi.port.into(),
            chan: doc.axe_midi.channel,
            switches,
            pedal,
        })
    }
}

/// The raw `config.json` document.
///
/// The `switch` table is kept untyped: a switch entry without a usable
/// `cc` leaves that switch unbound instead of failing the whole load.
#[derive(Debug, Deserialize)]
struct Document {
    rig_device: PathBuf,
    #[serde(default)]
    axe_midi: AxeMidi,
    #[serde(default)]
    switch: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct AxeMidi {
    port: String,
    channel: midi::Channel,
}

impl Default for AxeMidi {
    fn default() -> Self {
        AxeMidi {
            port: "AXE-FX II".to_string(),
            channel: midi::Channel::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PedalEntry {
    #[serde(default)]
    cc: midi::cc::Number,
    #[serde(default = "default_pedal_min")]
    min: i32,
    #[serde(default = "default_pedal_max")]
    max: i32,
}

fn default_pedal_min() -> i32 {
    264
}

fn default_pedal_max() -> i32 {
    3620
}

fn switch_binding(entry: &serde_json::Value) -> Option<SwitchBinding> {
    let nb = entry
        .get("cc")?
        .as_u64()
        .and_then(|cc| u8::try_from(cc).ok())
        .and_then(|cc| midi::cc::Number::try_from(cc).ok())?;

    let mode = if entry
        .get("toggle")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false)
    {
        SwitchMode::Toggle
    } else {
        SwitchMode::Momentary
    };

    Some(SwitchBinding { nb, mode })
}

fn pedal_config(entry: PedalEntry) -> Result<Option<Pedal>, Error> {
    // cc 0 means no pedal.
    if entry.cc.into_inner() == 0 {
        return Ok(None);
    }

    if entry.min >= entry.max {
        return Err(Error::PedalRange {
            min: entry.min,
            max: entry.max,
        });
    }

    Ok(Some(Pedal::new(entry.cc, entry.min, entry.max)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nb(nb: u8) -> midi::cc::Number {
        midi::cc::Number::try_from(nb).unwrap()
    }

    #[test]
    fn full_document() {
        let config = Config::parse(
            r#"{
                "rig_device": "/dev/input/event7",
                "axe_midi": { "port": "Axe-Fx II MIDI In", "channel": 2 },
                "switch": {
                    "1": { "cc": 20 },
                    "2": { "cc": 21, "toggle": true },
                    "7": { "cc": 26, "toggle": false },
                    "pedal": { "cc": 11, "min": 0, "max": 1000 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.rig_device, PathBuf::from("/dev/input/event7"));
        assert_eq!(config.port.as_ref(), "Axe-Fx II MIDI In");
        assert_eq!(config.chan, midi::Channel::try_from(2).unwrap());
        assert_eq!(
            config.switches,
            vec![
                (
                    Switch::One,
                    SwitchBinding {
                        nb: nb(20),
                        mode: SwitchMode::Momentary,
                    },
                ),
                (
                    Switch::Two,
                    SwitchBinding {
                        nb: nb(21),
                        mode: SwitchMode::Toggle,
                    },
                ),
                (
                    Switch::Seven,
                    SwitchBinding {
                        nb: nb(26),
                        mode: SwitchMode::Momentary,
                    },
                ),
            ],
        );
        assert_eq!(config.pedal, Some(Pedal::new(nb(11), 0, 1000)));
    }

    #[test]
    fn defaults() {
        let config = Config::parse(r#"{ "rig_device": "/dev/input/event7" }"#).unwrap();

        assert_eq!(config.port.as_ref(), "AXE-FX II");
        assert_eq!(config.chan, midi::Channel::default());
        assert!(config.switches.is_empty());
        assert_eq!(config.pedal, None);
    }

    #[test]
    fn missing_rig_device_fails() {
        match Config::parse("{}").unwrap_err() {
            Error::Parse(_) => (),
            other => panic!("{other}"),
        }
    }

    #[test]
    fn channel_out_of_range_fails() {
        let res = Config::parse(
            r#"{
                "rig_device": "/dev/input/event7",
                "axe_midi": { "channel": 16 }
            }"#,
        );

        match res.unwrap_err() {
            Error::Parse(_) => (),
            other => panic!("{other}"),
        }
    }

    #[test]
    fn unusable_switch_entries_degrade_to_unbound() {
        let config = Config::parse(
            r#"{
                "rig_device": "/dev/input/event7",
                "switch": {
                    "1": { "cc": "twenty" },
                    "2": { "cc": 200 },
                    "3": 5,
                    "4": { "toggle": true },
                    "5": { "cc": 24 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.switches,
            vec![(
                Switch::Five,
                SwitchBinding {
                    nb: nb(24),
                    mode: SwitchMode::Momentary,
                },
            )],
        );
    }

    #[test]
    fn unknown_switch_entries_are_ignored() {
        let config = Config::parse(
            r#"{
                "rig_device": "/dev/input/event7",
                "switch": { "9": { "cc": 20 } }
            }"#,
        )
        .unwrap();

        assert!(config.switches.is_empty());
    }

    #[test]
    fn pedal_range_defaults() {
        let config = Config::parse(
            r#"{
                "rig_device": "/dev/input/event7",
                "switch": { "pedal": { "cc": 11 } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.pedal, Some(Pedal::new(nb(11), 264, 3620)));
    }

    #[test]
    fn pedal_cc_0_is_disabled() {
        let config = Config::parse(
            r#"{
                "rig_device": "/dev/input/event7",
                "switch": { "pedal": { "cc": 0, "min": 0, "max": 1000 } }
            }"#,
        )
        .unwrap();
        assert_eq!(config.pedal, None);

        let config = Config::parse(
            r#"{
                "rig_device": "/dev/input/event7",
                "switch": { "pedal": {} }
            }"#,
        )
        .unwrap();
        assert_eq!(config.pedal, None);
    }

    #[test]
    fn pedal_cc_out_of_range_fails() {
        let res = Config::parse(
            r#"{
                "rig_device": "/dev/input/event7",
                "switch": { "pedal": { "cc": 200 } }
            }"#,
        );

        match res.unwrap_err() {
            Error::Parse(_) => (),
            other => panic!("{other}"),
        }
    }

    #[test]
    fn empty_pedal_range_fails() {
        let res = Config::parse(
            r#"{
                "rig_device": "/dev/input/event7",
                "switch": { "pedal": { "cc": 11, "min": 1000, "max": 1000 } }
            }"#,
        );

        match res.unwrap_err() {
            Error::PedalRange { min, max } => {
                assert_eq!(min, 1000);
                assert_eq!(max, 1000);
            }
            other => panic!("{other}"),
        }
    }
}
