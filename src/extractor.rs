use scraper::{Html, Selector};

use crate::error::SetupError;

/// Id of the search result table on the FDA keyword search page.
pub const RESULT_TABLE_ID: &str = "table_list";

const TABLE_SELECTOR: &str = "#table_list";
const ANCHOR_SELECTOR: &str = "a";

/// Pulls the detail link out of a search result page.
pub struct Extractor {
    table: Selector,
    anchor: Selector,
}

impl Extractor {
    pub fn new() -> Result<Self, SetupError> {
        Ok(Extractor {
            table: parse_selector(TABLE_SELECTOR)?,
            anchor: parse_selector(ANCHOR_SELECTOR)?,
        })
    }

    /// `href` of the first anchor inside the result table.
    ///
    /// `None` when the table is missing, holds no anchor, or the first anchor has no
    /// (or an empty) `href`.
    pub fn detail_link(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let table = document.select(&self.table).next()?;
        let anchor = table.select(&self.anchor).next()?;
        anchor
            .value()
            .attr("href")
            .filter(|href| !href.is_empty())
            .map(str::to_string)
    }
}

fn parse_selector(selector: &'static str) -> Result<Selector, SetupError> {
    Selector::parse(selector).map_err(|e| SetupError::Selector {
        selector,
        message: format!("{:?}", e),
    })
}
