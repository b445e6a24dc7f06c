//! Core data structures representing parsed molecular graphs.
//!
//! - [`types`] – Periodic table elements and bond order classifications.
//! - [`atom`] – Minimal atom representation with element and Cartesian coordinates.
//! - [`molecule`] – One molecule's atoms and bonds, the unit of collation.
//!
//! These types are deliberately transient: readers in [`crate::io`] produce
//! them and [`crate::pack`] consumes them into the columnar layout that the
//! rest of the system works with.

pub mod atom;
pub mod molecule;
pub mod types;
