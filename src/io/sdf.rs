use crate::io::{error::Error, Format};
use crate::model::{
    atom::Atom,
    molecule::{Bond, Molecule},
    types::{BondOrder, Element},
};
use std::io::BufRead;
use std::str::FromStr;

/// Number of header lines preceding the counts line in a V2000 record.
const HEADER_LINES: usize = 3;

/// Reads every record of a multi-molecule SDF stream.
///
/// Records are separated by `$$$$` delimiter lines. Each record's three
/// header lines are skipped and the rest of the body is handed to
/// [`parse_record`]. The first malformed record aborts the whole read;
/// a packed dataset is all-or-nothing, so no partial result is returned.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<Molecule>, Error> {
    let mut molecules = Vec::new();
    let mut record: Vec<(usize, String)> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let content = line.map_err(|e| Error::Io { source: e })?;
        if content.trim_end() == "$$$$" {
            if !record.is_empty() {
                molecules.push(parse_framed(&record)?);
                record.clear();
            }
            continue;
        }
        record.push((i + 1, content));
    }

    // Trailing lines after the final delimiter are not a record.
    Ok(molecules)
}

fn parse_framed(record: &[(usize, String)]) -> Result<Molecule, Error> {
    if record.len() <= HEADER_LINES {
        let ln = record.last().map(|(ln, _)| *ln).unwrap_or(0);
        return Err(Error::parse(
            Format::Sdf,
            ln,
            "record ended before its counts line",
        ));
    }
    parse_record(&record[HEADER_LINES..])
}

/// Parses the body of one structural record into a [`Molecule`].
///
/// `lines` must start at the counts line (file framing already stripped):
/// the declared number of atom lines follows, then the declared number of
/// bond lines. Anything after the bond block (`M  END`, the property
/// annotations) is ignored. Bond endpoints are 1-based in the file and come
/// back 0-based.
pub fn parse_record(lines: &[(usize, String)]) -> Result<Molecule, Error> {
    let (counts_line_no, counts_line) = lines
        .first()
        .map(|(ln, l)| (*ln, l.as_str()))
        .ok_or_else(|| Error::parse(Format::Sdf, 0, "record body is empty"))?;

    if counts_line.contains("V3000") {
        return Err(Error::parse(
            Format::Sdf,
            counts_line_no,
            "V3000 is not supported",
        ));
    }

    let (atom_count, bond_count) = parse_counts(counts_line, counts_line_no)?;
    let atom_start = 1;
    let bond_start = atom_start + atom_count;

    if lines.len() < bond_start + bond_count {
        return Err(Error::parse(
            Format::Sdf,
            lines.last().map(|(ln, _)| *ln).unwrap_or(counts_line_no),
            "record ended before atoms/bonds were fully specified",
        ));
    }

    let atoms = parse_atoms(&lines[atom_start..atom_start + atom_count])?;
    let bonds = parse_bonds(&lines[bond_start..bond_start + bond_count], atom_count)?;

    Ok(Molecule { atoms, bonds })
}

fn parse_counts(line: &str, line_no: usize) -> Result<(usize, usize), Error> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(Error::parse(
            Format::Sdf,
            line_no,
            "counts line must contain atom and bond counts",
        ));
    }
    let atoms = tokens[0]
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Sdf, line_no, "invalid atom count"))?;
    let bonds = tokens[1]
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Sdf, line_no, "invalid bond count"))?;
    Ok((atoms, bonds))
}

fn parse_atoms(lines: &[(usize, String)]) -> Result<Vec<Atom>, Error> {
    let mut atoms = Vec::with_capacity(lines.len());
    for (ln, raw) in lines {
        let padded = format!("{raw:<40}");
        let x = padded[0..10]
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid x coordinate in atom line"))?;
        let y = padded[10..20]
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid y coordinate in atom line"))?;
        let z = padded[20..30]
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid z coordinate in atom line"))?;
        let symbol = padded[31..34].trim();
        let element = Element::from_str(symbol).map_err(|_| Error::UnknownElement {
            line: *ln,
            symbol: symbol.to_string(),
        })?;
        atoms.push(Atom::new(element, [x, y, z]));
    }
    Ok(atoms)
}

fn parse_bonds(lines: &[(usize, String)], atom_count: usize) -> Result<Vec<Bond>, Error> {
    let mut bonds = Vec::with_capacity(lines.len());
    for (ln, raw) in lines {
        let tokens: Vec<_> = raw.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(Error::parse(Format::Sdf, *ln, "invalid bond line"));
        }

        let a1 = tokens[0]
            .parse::<usize>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid first atom index"))?;
        let a2 = tokens[1]
            .parse::<usize>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid second atom index"))?;
        let order_val = tokens[2]
            .parse::<i32>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid bond order value"))?;

        let order = BondOrder::from_ctfile(order_val)
            .map_err(|e| Error::parse(Format::Sdf, *ln, e.to_string()))?;

        if a1 == 0 || a2 == 0 || a1 > atom_count || a2 > atom_count {
            return Err(Error::parse(
                Format::Sdf,
                *ln,
                "bond references atom outside declared range",
            ));
        }

        bonds.push(Bond::new(a1 - 1, a2 - 1, order));
    }
    Ok(bonds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const METHANOL: &str = "\
methanol
  test
 commentary
  6  5  0  0  0  0  0  0  0  0999 V2000
   -0.0127    1.0858    0.0080 C   0  0  0  0  0  0  0  0  0  0  0  0
    0.0021   -0.0041    0.0020 O   0  0  0  0  0  0  0  0  0  0  0  0
    1.0117    1.4637    0.0003 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.5408    1.4475   -0.8766 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.5238    1.4379    0.9064 H   0  0  0  0  0  0  0  0  0  0  0  0
    0.8660   -0.3631    0.0011 H   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0
  1  3  1  0
  1  4  1  0
  1  5  1  0
  2  6  1  0
M  END
$$$$
";

    fn record_lines(src: &str) -> Vec<(usize, String)> {
        src.lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.to_string()))
            .collect()
    }

    #[test]
    fn parses_single_record() {
        let molecules = read(Cursor::new(METHANOL)).unwrap();
        assert_eq!(molecules.len(), 1);

        let mol = &molecules[0];
        assert_eq!(mol.atom_count(), 6);
        assert_eq!(mol.bond_count(), 5);
        assert_eq!(mol.atoms[0].element, Element::C);
        assert_eq!(mol.atoms[1].element, Element::O);
        assert_eq!(mol.atoms[0].position, [-0.0127, 1.0858, 0.0080]);
        assert_eq!(mol.bonds[0], Bond::new(0, 1, BondOrder::Single));
        assert_eq!(mol.bonds[4], Bond::new(1, 5, BondOrder::Single));
    }

    #[test]
    fn parses_multiple_records() {
        let two = format!("{METHANOL}{METHANOL}");
        let molecules = read(Cursor::new(two)).unwrap();
        assert_eq!(molecules.len(), 2);
        assert_eq!(molecules[0], molecules[1]);
    }

    #[test]
    fn ignores_trailing_property_block() {
        let with_props = METHANOL.replace("M  END", "M  END\n>  <dipole>\n1.69\n");
        let molecules = read(Cursor::new(with_props)).unwrap();
        assert_eq!(molecules[0].atom_count(), 6);
    }

    #[test]
    fn ignores_content_after_last_delimiter() {
        let trailing = format!("{METHANOL}orphaned line\n");
        let molecules = read(Cursor::new(trailing)).unwrap();
        assert_eq!(molecules.len(), 1);
    }

    #[test]
    fn rejects_unknown_element() {
        let bad = METHANOL.replace(" O  ", " Qq ");
        let err = read(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, Error::UnknownElement { ref symbol, .. } if symbol == "Qq"));
    }

    #[test]
    fn rejects_malformed_counts() {
        let bad = METHANOL.replace("  6  5  0", "  x  5  0");
        let err = read(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn rejects_truncated_record() {
        let lines = record_lines("  2  1  0  0999 V2000\n    0.0       0.0       0.0     C");
        let err = parse_record(&lines).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn rejects_bond_outside_declared_range() {
        let bad = METHANOL.replace("  2  6  1  0", "  2  7  1  0");
        let err = read(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn converts_bond_indices_to_zero_based() {
        let lines = record_lines(
            "  2  1  0  0999 V2000\n\
             \u{20}   0.0000    0.0000    0.0000 N   0  0\n\
             \u{20}   1.1000    0.0000    0.0000 N   0  0\n\
             \u{20} 1  2  3  0",
        );
        let mol = parse_record(&lines).unwrap();
        assert_eq!(mol.bonds[0], Bond::new(0, 1, BondOrder::Triple));
    }
}
