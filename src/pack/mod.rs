//! The packed columnar engine: collation, target attachment and subsetting.
//!
//! A dataset of many variable-sized molecular graphs is stored as one flat
//! buffer per field plus an offset table per field unit (atoms, bonds,
//! target rows) — see [`PackedDataset`] and [`SliceTable`]. The three
//! operations here only ever build new pairs:
//!
//! - [`collate`] — pack an ordered sequence of [`Molecule`](crate::Molecule)s;
//! - [`attach`] — merge an external per-graph [`TargetTable`] into a pair;
//! - [`select`] — rebuild a pair restricted to an ordered list of graph
//!   indices (named splits and invalid-entry removal alike).

mod attach;
mod collate;
mod dataset;
mod error;
mod select;

pub use attach::{attach, TargetTable};
pub use collate::collate;
pub use dataset::{GraphView, PackedDataset, SliceTable, TargetColumn};
pub use error::Error;
pub use select::select;
