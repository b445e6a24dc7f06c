use crate::io;
use crate::io::targets::DEFAULT_COLUMNS;
use crate::pack::{self, PackedDataset, SliceTable};
use std::io::BufRead;
use std::ops::Range;
use thiserror::Error;

/// Field name the regression targets are attached under.
pub const TARGET_FIELD: &str = "y";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::error::Error),

    #[error(transparent)]
    Pack(#[from] pack::Error),
}

/// Numbering convention of the skip list's molecule ids.
///
/// The published skip list counts molecules the way the target table does;
/// whether that count starts at 0 or 1 is a property of the data drop, not
/// of this crate, so it is a configuration point. The published QM9 skip
/// list is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indexing {
    ZeroBased,
    #[default]
    OneBased,
}

#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Column window of the target table parsed as regression targets.
    pub target_columns: Range<usize>,
    /// Id convention of the skip list.
    pub indexing: Indexing,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            target_columns: DEFAULT_COLUMNS,
            indexing: Indexing::default(),
        }
    }
}

/// Builds the final packed pair from the three raw inputs.
///
/// Parses every structural record, collates the molecules, attaches the
/// target table under [`TARGET_FIELD`], then drops the skip-listed
/// molecules by selecting the ascending complement of their ids. The first
/// error anywhere aborts the whole build; a packed file is all-or-nothing.
/// Persisting the returned pair (and re-deriving named splits from it with
/// [`pack::select`]) is the caller's concern.
pub fn process<S, T, X>(
    structures: S,
    targets: T,
    skip_list: X,
    config: &ProcessConfig,
) -> Result<(PackedDataset, SliceTable), Error>
where
    S: BufRead,
    T: BufRead,
    X: BufRead,
{
    let molecules = io::sdf::read(structures)?;
    let (dataset, slices) = pack::collate(&molecules);

    let table = io::targets::read(targets, config.target_columns.clone())?;
    let (dataset, slices) = pack::attach(dataset, slices, TARGET_FIELD, table)?;

    let excluded = io::exclusions::read(skip_list)?;
    let retained = retained_indices(&excluded, slices.graph_count(), config.indexing)?;
    let pair = pack::select(&dataset, &slices, &retained)?;
    Ok(pair)
}

/// Ascending complement of the excluded ids over `0..graph_count`.
///
/// Ids are translated to 0-based graph indices per `indexing` and checked
/// against the graph range; an id that names no graph is an error rather
/// than a silent no-op.
pub fn retained_indices(
    excluded: &[usize],
    graph_count: usize,
    indexing: Indexing,
) -> Result<Vec<usize>, pack::Error> {
    let mut keep = vec![true; graph_count];
    for &id in excluded {
        let index = match indexing {
            Indexing::ZeroBased => id,
            Indexing::OneBased => id.checked_sub(1).ok_or(pack::Error::IndexOutOfRange {
                index: id,
                graph_count,
            })?,
        };
        if index >= graph_count {
            return Err(pack::Error::IndexOutOfRange {
                index,
                graph_count,
            });
        }
        keep[index] = false;
    }
    Ok(keep
        .iter()
        .enumerate()
        .filter_map(|(i, &kept)| kept.then_some(i))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn retained_indices_one_based_complement() {
        let retained = retained_indices(&[2, 4], 5, Indexing::OneBased).unwrap();
        assert_eq!(retained, vec![0, 2, 4]);
    }

    #[test]
    fn retained_indices_zero_based_complement() {
        let retained = retained_indices(&[2, 4], 5, Indexing::ZeroBased).unwrap();
        assert_eq!(retained, vec![0, 1, 3]);
    }

    #[test]
    fn retained_indices_rejects_out_of_range_id() {
        let err = retained_indices(&[6], 5, Indexing::OneBased).unwrap_err();
        assert_eq!(
            err,
            pack::Error::IndexOutOfRange {
                index: 5,
                graph_count: 5
            }
        );

        let err = retained_indices(&[0], 5, Indexing::OneBased).unwrap_err();
        assert!(matches!(err, pack::Error::IndexOutOfRange { index: 0, .. }));
    }

    #[test]
    fn retained_indices_ignores_duplicate_exclusions() {
        let retained = retained_indices(&[3, 3], 3, Indexing::OneBased).unwrap();
        assert_eq!(retained, vec![0, 1]);
    }

    fn record(title: &str, symbol: &str) -> String {
        format!(
            "{title}\n  prog\n comment\n  1  0  0  0999 V2000\n\
             \u{20}   0.0000    0.0000    0.0000 {symbol:<3} 0  0\n\
             M  END\n$$$$\n"
        )
    }

    fn skip_list(ids: &[usize]) -> String {
        let mut text = String::new();
        for _ in 0..9 {
            text.push_str("preamble\n");
        }
        for id in ids {
            text.push_str(&format!("{id:>8}\n"));
        }
        text.push_str("summary\n");
        text
    }

    #[test]
    fn end_to_end_drops_skip_listed_molecules() {
        let sdf = format!(
            "{}{}{}",
            record("one", "C"),
            record("two", "N"),
            record("three", "O")
        );
        let csv = "\
mol_id,a,b,c,t0,t1
gdb_1,0,0,0,1.0,10.0
gdb_2,0,0,0,2.0,20.0
gdb_3,0,0,0,3.0,30.0
";
        let skip = skip_list(&[2]);

        let config = ProcessConfig {
            target_columns: 4..6,
            indexing: Indexing::OneBased,
        };
        let (dataset, slices) = process(
            Cursor::new(sdf),
            Cursor::new(csv),
            Cursor::new(skip),
            &config,
        )
        .unwrap();

        assert_eq!(slices.graph_count(), 2);
        assert_eq!(dataset.atomic_numbers, vec![6, 8]);
        assert_eq!(dataset.targets[TARGET_FIELD].values, vec![1.0, 10.0, 3.0, 30.0]);
        assert_eq!(slices.targets[TARGET_FIELD], vec![0, 1, 2]);
    }

    #[test]
    fn end_to_end_fails_on_target_count_mismatch() {
        let sdf = record("only", "C");
        let csv = "mol_id,a,b,c,t0,t1\ngdb_1,0,0,0,1.0,10.0\ngdb_2,0,0,0,2.0,20.0\n";
        let skip = skip_list(&[]);

        let config = ProcessConfig {
            target_columns: 4..6,
            indexing: Indexing::OneBased,
        };
        let err = process(
            Cursor::new(sdf),
            Cursor::new(csv),
            Cursor::new(skip),
            &config,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Pack(pack::Error::TargetCountMismatch { expected: 1, got: 2 })
        ));
    }
}
