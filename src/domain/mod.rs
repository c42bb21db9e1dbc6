//! Domain layer - pure scoring logic with no I/O.

pub mod foundation;
pub mod personality;
pub mod sentiment;
pub mod spending;
