//! Core value types for the marga-search pathfinding engine.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`Coords`]: grid position with row-major ordering
//! - [`Cell`] and [`CellKind`]: per-cell search state and role

mod cell;
mod coords;

pub use cell::{Cell, CellKind};
pub use coords::Coords;
