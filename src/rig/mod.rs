pub mod device;
pub use device::Device;

mod switch;
pub use switch::Switch;

pub mod translator;
pub use translator::{Pedal, SwitchBinding, SwitchMode, Translator};
