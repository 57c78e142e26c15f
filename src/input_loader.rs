use calamine::{open_workbook_auto, Reader};
use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

/// Character stripped from registration codes (`10-1-12345-5-0001` -> `1011234550001`).
pub const SEPARATOR: char = '-';

/// Header label skipped when identifiers come from a workbook.
const HEADER_LABEL: &str = "fda";

/// Removes every separator and surrounding whitespace.
pub fn normalize(raw: &str) -> String {
    raw.replace(SEPARATOR, "").trim().to_string()
}

/// Reads identifiers from `path`, one per line (or one per row of the first column
/// for `.xlsx`/`.xls` files). Empty entries are dropped; order is preserved.
pub fn load_identifiers<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();

    let is_excel = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xls")
        });

    let identifiers = if is_excel {
        load_excel(path)?
    } else {
        load_text(path)?
    };

    if identifiers.is_empty() {
        warn!("No identifiers found in {:?}", path);
    } else {
        info!("Loaded {} identifiers from {:?}", identifiers.len(), path);
    }
    Ok(identifiers)
}

fn load_text(path: &Path) -> Result<Vec<String>, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(normalize)
        .filter(|id| !id.is_empty())
        .collect())
}

fn load_excel(path: &Path) -> Result<Vec<String>, LoadError> {
    let workbook_error = |source| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(workbook_error)?;

    let mut identifiers = Vec::new();
    for (row_idx, row) in range.rows().enumerate() {
        let Some(cell) = row.first() else { continue };
        let id = normalize(&cell.to_string());
        if row_idx == 0 && id.eq_ignore_ascii_case(HEADER_LABEL) {
            continue;
        }
        if !id.is_empty() {
            identifiers.push(id);
        }
    }
    Ok(identifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn normalize_removes_every_separator() {
        assert_eq!(normalize("  10-1-12345-5-0001 \n"), "1011234550001");
        assert_eq!(normalize("AB-123"), "AB123");
        assert_eq!(normalize("--A-B--"), "AB");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["AB-123", " - CD-456 ", "plain", "", "-", "x - y"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input {:?}", raw);
            assert!(!once.contains(SEPARATOR));
        }
    }

    #[test]
    fn loads_text_file_in_order_skipping_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\u{feff}AB-123\n\n   \nCD-456\r\n-\nAB-123\n").unwrap();

        let ids = load_identifiers(file.path()).unwrap();
        assert_eq!(ids, vec!["AB123", "CD456", "AB123"]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_identifiers(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x41, 0xff, 0xfe, 0x0a]).unwrap();
        let err = load_identifiers(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn loads_first_column_of_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "FDA").unwrap();
        sheet.write_string(0, 1, "Note").unwrap();
        sheet.write_string(1, 0, "AB-123").unwrap();
        sheet.write_string(2, 0, " CD-456 ").unwrap();
        sheet.write_string(3, 1, "no code here").unwrap();
        workbook.save(&path).unwrap();

        let ids = load_identifiers(&path).unwrap();
        assert_eq!(ids, vec!["AB123", "CD456"]);
    }
}
