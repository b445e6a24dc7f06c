//! Readers for the three raw input files a packed dataset is built from.
//!
//! - [`sdf`] – Multi-record SDF structure files (`$$$$`-delimited V2000 records).
//! - [`targets`] – The per-molecule regression-target table (CSV).
//! - [`exclusions`] – The fixed-format skip list of molecule ids to drop.
//!
//! All readers are generic over [`std::io::BufRead`]; opening files and any
//! caching of the results is the caller's concern.

use std::fmt;

pub mod error;
pub mod exclusions;
pub mod sdf;
pub mod targets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Sdf,
    TargetCsv,
    SkipList,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Sdf => write!(f, "SDF"),
            Format::TargetCsv => write!(f, "target CSV"),
            Format::SkipList => write!(f, "skip list"),
        }
    }
}
