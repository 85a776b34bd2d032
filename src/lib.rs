//! Tilt Cycle - rock platform simulator with cycle-detecting fast-forward

pub mod core;
pub mod platform;
pub mod simulation;

pub use crate::core::{Result, SimError, SimulationConfig};
pub use crate::platform::{Cell, Direction, Grid};
pub use crate::simulation::{simulate, CycleAccelerator, RunReport};
