use crate::io::{error::Error, Format};
use std::io::BufRead;

/// Fixed framing of the published skip list: nine lines of prose before
/// the ids, two trailing lines (summary plus final newline) after them.
const PREAMBLE_LINES: usize = 9;
const SUFFIX_LINES: usize = 2;

/// Reads the skip list of molecule ids to exclude from a dataset.
///
/// The format is fixed: after the preamble, each retained line carries a
/// molecule id as its first whitespace-separated token. The ids use the
/// target table's row numbering; whether that numbering is 0- or 1-based
/// is decided by the caller (see [`crate::process::Indexing`]).
pub fn read<R: BufRead>(mut reader: R) -> Result<Vec<usize>, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    // Split on '\n' rather than lines() so a trailing newline counts as one
    // of the trimmed suffix lines, matching the published file's framing.
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < PREAMBLE_LINES + SUFFIX_LINES {
        return Err(Error::parse(
            Format::SkipList,
            lines.len(),
            "file is shorter than its fixed preamble and suffix",
        ));
    }

    let body = &lines[PREAMBLE_LINES..lines.len() - SUFFIX_LINES];
    let mut ids = Vec::with_capacity(body.len());
    for (offset, line) in body.iter().enumerate() {
        let line_no = PREAMBLE_LINES + offset + 1;
        let token = line.split_whitespace().next().ok_or_else(|| {
            Error::parse(Format::SkipList, line_no, "missing molecule id")
        })?;
        let id = token.parse::<usize>().map_err(|_| {
            Error::parse(
                Format::SkipList,
                line_no,
                format!("invalid molecule id '{token}'"),
            )
        })?;
        ids.push(id);
    }
    Ok(ids)
}
