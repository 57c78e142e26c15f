use log::info;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::path::Path;

use crate::error::ReportError;
use crate::results::ResultTable;

pub const IDENTIFIER_HEADER: &str = "FDA";
pub const URL_HEADER: &str = "URL";

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "FDA")]
    identifier: &'a str,
    #[serde(rename = "URL")]
    url: Option<&'a str>,
}

/// Writes the table to `path`, replacing any existing file.
///
/// A `.csv` extension selects CSV; anything else is written as an xlsx workbook.
/// Missing links are left as empty cells.
pub fn write_table(table: &ResultTable, path: &Path) -> Result<(), ReportError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        write_csv(table, path)?;
    } else {
        write_xlsx(table, path)?;
    }
    info!("Saved {} rows to {:?}", table.len(), path);
    Ok(())
}

fn write_xlsx(table: &ResultTable, path: &Path) -> Result<(), ReportError> {
    let wrap = |source| ReportError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        let header = Format::new().set_bold();
        sheet
            .write_string_with_format(0, 0, IDENTIFIER_HEADER, &header)
            .map_err(wrap)?;
        sheet
            .write_string_with_format(0, 1, URL_HEADER, &header)
            .map_err(wrap)?;

        for (i, (identifier, link)) in table.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write_string(row, 0, identifier).map_err(wrap)?;
            if let Some(url) = link.url() {
                sheet.write_string(row, 1, url).map_err(wrap)?;
            }
        }
    }
    workbook.save(path).map_err(wrap)
}

fn write_csv(table: &ResultTable, path: &Path) -> Result<(), ReportError> {
    let wrap = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    for (identifier, link) in table.iter() {
        writer
            .serialize(Row {
                identifier,
                url: link.url(),
            })
            .map_err(wrap)?;
    }
    // An empty table still gets its header row.
    if table.is_empty() {
        writer
            .write_record([IDENTIFIER_HEADER, URL_HEADER])
            .map_err(wrap)?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// One `<identifier>: <url>` line per entry, `None` for missing links.
pub fn render_summary(table: &ResultTable) -> String {
    let lines: String = table
        .iter()
        .map(|(identifier, link)| format!("{}: {}\n", identifier, link))
        .collect();
    format!("Summary\n{}", lines)
}
