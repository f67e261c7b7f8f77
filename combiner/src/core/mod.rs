//! Pure combining logic: outcome types and output framing.
//!
//! Nothing here touches the filesystem; `io` feeds it and drains it.

pub mod frame;
pub mod outcome;
