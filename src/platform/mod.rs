//! Platform abstraction layer
//!
//! This module provides hardware abstraction for different microcontroller
//! platforms. All platform-specific code is isolated here; the scan and
//! pinout modules only ever see the traits.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{GpioError, PlatformError, Result};
pub use traits::{BoardDescriptor, FlashStats, GpioInterface, GpioMode, Platform, SystemInfo};
