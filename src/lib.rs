//! Disk head scheduling simulator.
//!
//! Each strategy walks the head from a starting track over its own copy of a
//! request batch and reports the visiting order and the total seek distance.

pub mod trace;

pub mod config;
pub mod error;
pub mod schedule;
pub mod schedulers;
pub mod utils;

/// A track number on the simulated disk.
pub type Track = u32;

pub use config::{Boundary, Direction, SweepConfig};
pub use error::{Error, InvalidInput, Result};
pub use schedule::{Schedule, Stop};
pub use schedulers::{cscan, fcfs, scan, sstf, Algorithm, DiskScheduler};
