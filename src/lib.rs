#![cfg_attr(not(test), no_std)]

//! pinscan - GPIO pin diagnostic scanner
//!
//! Probes every GPIO pin of a microcontroller through a fixed sequence of
//! electrical configurations (pull-up, pull-down, driven high, driven low),
//! classifies the readings against the expected defaults, and cross-references
//! each pin index with a per-board pinout table to label its designated
//! function.
//!
//! All decision logic sits behind the platform abstraction in [`platform`],
//! so the scanner is unit-tested on the host against a mock platform and runs
//! unchanged on real hardware (Pico 2 W via the `pico2_w` feature).

// Platform abstraction layer: GPIO access, board data, system information
pub mod platform;

// Core systems: logging abstraction
pub mod core;

// Pin capability prober, classification, and the scan driver
pub mod scan;

// Per-MCU pinout table and pin function resolution
pub mod pinout;

// Human-readable report formatting
pub mod report;
