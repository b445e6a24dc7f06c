use crate::io::{error::Error, Format};
use crate::pack::TargetTable;
use std::io::BufRead;
use std::ops::Range;

/// Column window of the published QM9 target table: columns 4 through 15
/// hold the twelve regression targets.
pub const DEFAULT_COLUMNS: Range<usize> = 4..16;

/// Reads the per-molecule regression-target table.
///
/// The table is CSV with one header line and one line per molecule; only
/// the `columns` window is kept, parsed as `f64`. Rows outside the window's
/// reach and unparseable values are hard errors, not skipped rows, so the
/// resulting table always lines up with the structure file.
pub fn read<R: BufRead>(reader: R, columns: Range<usize>) -> Result<TargetTable, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut table = TargetTable::new(columns.len());
    let mut row = Vec::with_capacity(columns.len());

    for record in csv_reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();

        row.clear();
        for col in columns.clone() {
            let field = record.get(col).ok_or_else(|| {
                Error::parse(
                    Format::TargetCsv,
                    line,
                    format!("row has no column {col}"),
                )
            })?;
            let value = field.trim().parse::<f64>().map_err(|_| {
                Error::parse(
                    Format::TargetCsv,
                    line,
                    format!("invalid target value '{field}' in column {col}"),
                )
            })?;
            row.push(value);
        }

        table
            .push_row(&row)
            .map_err(|e| Error::parse(Format::TargetCsv, line, e.to_string()))?;
    }

    Ok(table)
}
