//! A pure Rust engine for packing collections of molecular graphs into a
//! single contiguous columnar representation with per-field slice tables,
//! and for rebuilding packed datasets restricted to arbitrary graph subsets.
//!
//! # Features
//!
//! - **SDF parsing** — Multi-record V2000 structure files parsed into
//!   per-molecule atom/bond/position lists
//! - **Collation** — Struct-of-arrays packing: one flat buffer per field
//!   plus offset tables, O(1) random access to any graph with no per-graph
//!   allocation
//! - **Target attachment** — External fixed-width regression-target tables
//!   merged in as uniformly sliceable per-graph fields
//! - **Subsetting** — Named splits and invalid-entry removal via one
//!   operation: rebuild the pair for an ordered list of graph indices
//!
//! # Quick Start
//!
//! ```
//! use molgrid::{Atom, Bond, BondOrder, Element, Molecule};
//! use molgrid::pack::{attach, collate, select, TargetTable};
//!
//! // Two tiny molecules: carbon monoxide and dinitrogen.
//! let co = Molecule {
//!     atoms: vec![
//!         Atom::new(Element::C, [0.0, 0.0, 0.0]),
//!         Atom::new(Element::O, [1.128, 0.0, 0.0]),
//!     ],
//!     bonds: vec![Bond::new(0, 1, BondOrder::Triple)],
//! };
//! let n2 = Molecule {
//!     atoms: vec![
//!         Atom::new(Element::N, [0.0, 0.0, 0.0]),
//!         Atom::new(Element::N, [1.098, 0.0, 0.0]),
//!     ],
//!     bonds: vec![Bond::new(0, 1, BondOrder::Triple)],
//! };
//!
//! // Pack them into one columnar pair.
//! let (dataset, slices) = collate(&[co, n2]);
//! assert_eq!(dataset.atomic_numbers, vec![6, 8, 7, 7]);
//! assert_eq!(slices.atoms, vec![0, 2, 4]);
//!
//! // Attach one target row per graph; the new field slices by identity.
//! let table = TargetTable::from_rows(1, &[vec![-0.27], vec![0.0]])?;
//! let (dataset, slices) = attach(dataset, slices, "y", table)?;
//! assert_eq!(slices.targets["y"], vec![0, 1, 2]);
//!
//! // Keep only the second graph, as a fresh self-contained pair.
//! let (subset, subset_slices) = select(&dataset, &slices, &[1])?;
//! assert_eq!(subset.atomic_numbers, vec![7, 7]);
//! assert_eq!(subset.targets["y"].values, vec![0.0]);
//!
//! // Any graph is an O(1) borrow out of the flat buffers.
//! let view = subset.graph(&subset_slices, 0).unwrap();
//! assert_eq!(view.positions.len(), 2);
//! # Ok::<(), molgrid::pack::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Readers for the raw inputs: the structure file, the target
//!   table and the skip list
//! - [`pack`] — The columnar engine: [`pack::collate`], [`pack::attach`],
//!   [`pack::select`]
//! - [`process`] — End-to-end pipeline from the three raw inputs to the
//!   final packed pair
//!
//! Downloading source archives, extracting them and persisting the packed
//! pair are wrapper concerns; everything here works on [`std::io::BufRead`]
//! sources and in-memory values. The packed types derive serde traits so a
//! wrapper can persist the pair in whatever format it likes.

mod model;

pub mod io;
pub mod pack;
pub mod process;

pub use model::atom::Atom;
pub use model::molecule::{Bond, Molecule};
pub use model::types::{BondOrder, Element, ParseBondOrderError, ParseElementError};

pub use pack::{GraphView, PackedDataset, SliceTable, TargetColumn, TargetTable};

pub use process::{process, Indexing, ProcessConfig, TARGET_FIELD};
