//! ハードウェア制御モジュール

pub mod environment_sensor;
pub mod light_sensor;

#[cfg(target_os = "espidf")]
pub mod display;
#[cfg(target_os = "espidf")]
pub mod pins;
#[cfg(target_os = "espidf")]
pub mod sound_sensor;

pub use environment_sensor::EnvironmentSensor;
pub use light_sensor::LightSensor;

#[cfg(target_os = "espidf")]
pub use display::{init_display, Backlight, MeterDisplay};
#[cfg(target_os = "espidf")]
pub use pins::{DisplayPins, I2cPins};
#[cfg(target_os = "espidf")]
pub use sound_sensor::SoundSensor;
