//! Embassy tasks
//!
//! The display is owned by a single task; the driver is blocking, so the
//! task only yields between demo stages.

pub mod display;

pub use display::{display_task, Display};
