//! Core cross-cutting systems

pub mod logging;
