//! # System Module
//!
//! Stage calculation: points in, stage and progress percentage out.
//!
//! Everything here is a pure function of `(points, &StageTable)`. The table is
//! read-only configuration and no result is cached, so calls can be repeated
//! from any number of callers and always yield identical output.

mod stage;

pub use stage::*;
