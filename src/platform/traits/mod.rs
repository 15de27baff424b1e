//! Platform interface traits

pub mod board;
pub mod gpio;
pub mod platform;
pub mod sysinfo;

pub use board::BoardDescriptor;
pub use gpio::{GpioInterface, GpioMode};
pub use platform::Platform;
pub use sysinfo::{FlashStats, SystemInfo};
