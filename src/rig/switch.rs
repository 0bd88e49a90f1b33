use std::fmt;

use evdev::Key;

/// One of the rig's physical foot switches.
///
/// The switch box shows up as a keyboard reporting KEY_1..KEY_7.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Switch {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
}

impl Switch {
    pub const ALL: [Self; 7] = [
        Switch::One,
        Switch::Two,
        Switch::Three,
        Switch::Four,
        Switch::Five,
        Switch::Six,
        Switch::Seven,
    ];

    /// The evdev key code this switch reports.
    pub fn key(self) -> Key {
        use Switch::*;
        match self {
            One => Key::KEY_1,
            Two => Key::KEY_2,
            Three => Key::KEY_3,
            Four => Key::KEY_4,
            Five => Key::KEY_5,
            Six => Key::KEY_6,
            Seven => Key::KEY_7,
        }
    }

    /// The switch for `key`, if any.
    pub fn from_key(key: Key) -> Option<Self> {
        Self::ALL.into_iter().find(|sw| sw.key() == key)
    }

    /// The label on the switch box, as used in `config.json`.
    pub fn as_str(self) -> &'static str {
        use Switch::*;
        match self {
            One => "1",
            Two => "2",
            Three => "3",
            Four => "4",
            Five => "5",
            Six => "6",
            Seven => "7",
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
