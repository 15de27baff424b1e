//! Mock platform implementation for testing
//!
//! This module provides mock implementations of the platform traits that can
//! be used for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! Available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod platform;
mod sysinfo;

pub use gpio::{MockGpio, PinBehavior};
pub use platform::MockPlatform;
pub use sysinfo::MockSystemInfo;
