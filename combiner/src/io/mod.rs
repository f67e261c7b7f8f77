//! Filesystem side of combining: reading inputs, writing output, config.

pub mod collect;
pub mod config;
pub mod write;
