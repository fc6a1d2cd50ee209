// src/services/extractor.rs

//! Disclosure table extraction.
//!
//! The listing renders one `div.disclosure_box > table.stock_table`. Each body
//! row has six cells: code, company, market, category, title (with link) and
//! time. Rows of any other shape are decorative and skipped.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result, TableNotFound};
use crate::models::{CleaningConfig, RawRow};

const TABLE_SELECTOR: &str = "div.disclosure_box > table.stock_table";
const ROW_SELECTOR: &str = "tbody > tr";
const LINK_SELECTOR: &str = "a";

const CELL_COUNT: usize = 6;
const CODE_CELL: usize = 0;
const COMPANY_CELL: usize = 1;
const TITLE_CELL: usize = 4;
const TIME_CELL: usize = 5;

/// Parses listing markup into raw rows.
pub struct RecordExtractor {
    cleaning: CleaningConfig,
    table_sel: Selector,
    row_sel: Selector,
    link_sel: Selector,
}

impl RecordExtractor {
    /// Create an extractor with the given text cleaning rules.
    pub fn new(cleaning: CleaningConfig) -> Result<Self> {
        Ok(Self {
            cleaning,
            table_sel: Self::parse_selector(TABLE_SELECTOR)?,
            row_sel: Self::parse_selector(ROW_SELECTOR)?,
            link_sel: Self::parse_selector(LINK_SELECTOR)?,
        })
    }

    /// Extract all well-formed rows from one page, in document order.
    pub fn extract(&self, markup: &str) -> std::result::Result<Vec<RawRow>, TableNotFound> {
        let document = Html::parse_document(markup);
        let table = document.select(&self.table_sel).next().ok_or(TableNotFound)?;

        let rows = table
            .select(&self.row_sel)
            .filter_map(|row| self.parse_row(&row))
            .collect();
        Ok(rows)
    }

    fn parse_row(&self, row: &ElementRef) -> Option<RawRow> {
        let cells: Vec<ElementRef> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| matches!(el.value().name(), "td" | "th"))
            .collect();

        if cells.len() != CELL_COUNT {
            return None;
        }

        let link = cells[TITLE_CELL].select(&self.link_sel).next()?;
        // A title anchor without a target carries no identity.
        let href = link
            .value()
            .attr("href")
            .map(str::trim)
            .filter(|href| !href.is_empty())?;

        Some(RawRow {
            code: self.cell_text(&cells[CODE_CELL]),
            company_name: self.cell_text(&cells[COMPANY_CELL]),
            title: self.cleaning.clean_title(&Self::text_of(&link)),
            href: href.to_string(),
            time_str: self.cell_text(&cells[TIME_CELL]),
        })
    }

    fn cell_text(&self, cell: &ElementRef) -> String {
        self.cleaning.clean_cell(&Self::text_of(cell))
    }

    fn text_of(el: &ElementRef) -> String {
        el.text().collect()
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new(CleaningConfig::default()).expect("built-in selectors are valid")
    }
}
