//! Quotation document layout and output
//!
//! Renders a paginated plain-text quotation: branding header, client
//! details, one table per vehicle type with a subtotal, and the grand total.
//! Pages are separated by a form feed and end with a page-number footer.

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::client::ClientDetails;
use super::format::{format_kshs, format_optional_kshs, format_tonnage, NOT_APPLICABLE};
use super::summary::{QuoteLine, QuoteSummary, RatedVehicle};
use crate::error::Result;
use crate::vehicle::VehicleType;

/// Characters per line used for centering
pub const PAGE_WIDTH: usize = 100;

pub const DEFAULT_PAGE_LINES: usize = 60;

/// Smallest page that still fits the header and client blocks
pub const MIN_PAGE_LINES: usize = 20;

/// Separator between pages
pub const PAGE_BREAK: char = '\u{0C}';

const FOOTER_LINES: usize = 2;

const PRIVATE_COLUMNS: &[&str] = &["Make", "Model", "Sum Insured", "Premium", "Excess", "PVT", "Total"];

const COMMERCIAL_COLUMNS: &[&str] = &[
    "Subclass", "Cover", "Sum Insured", "Unit Type", "Tonnage",
    "Premium", "Excess", "PVT", "PLL", "Total",
];

/// Company details printed around the quotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub company_name: String,
    pub address_lines: Vec<String>,
    pub email: String,
    pub title: String,
    pub closing: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            company_name: "Heritage Insurance Company".to_string(),
            address_lines: vec![
                "LIBERTY HOUSE - MAMLAKA ROAD".to_string(),
                "P.O BOX 30390 - 00100 GPO NAIROBI".to_string(),
            ],
            email: "info@heritage.co.ke".to_string(),
            title: "Premium Quotation".to_string(),
            closing: "Thank you for choosing Heritage Insurance Company.".to_string(),
        }
    }
}

/// Page geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLayout {
    page_lines: usize,
}

impl DocumentLayout {
    /// Lines per page including the footer, never below `MIN_PAGE_LINES`
    pub fn new(page_lines: usize) -> Self {
        Self {
            page_lines: page_lines.max(MIN_PAGE_LINES),
        }
    }

    pub fn page_lines(&self) -> usize {
        self.page_lines
    }

    fn body_lines(&self) -> usize {
        self.page_lines - FOOTER_LINES
    }
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LINES)
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Centre a line on the page without trailing padding
fn center_on_page(text: &str) -> String {
    center(text, PAGE_WIDTH).trim_end().to_string()
}

/// Grid table with centred cells
struct Table {
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl Table {
    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render(&self) -> Vec<String> {
        let widths = self.widths();
        let rule = format!(
            "+{}+",
            widths.iter().map(|w| "-".repeat(w + 2)).collect::<Vec<_>>().join("+")
        );

        let mut lines = vec![rule.clone()];
        lines.push(format_row(self.headers.iter().copied(), &widths));
        lines.push(rule.clone());
        for row in &self.rows {
            lines.push(format_row(row.iter().map(String::as_str), &widths));
        }
        lines.push(rule);
        lines
    }
}

fn format_row<'s>(cells: impl Iterator<Item = &'s str>, widths: &[usize]) -> String {
    let inner: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| center(cell, width))
        .collect();
    format!("| {} |", inner.join(" | "))
}

fn private_row(line: &QuoteLine) -> Option<Vec<String>> {
    let RatedVehicle::Private { input, result } = &line.vehicle else {
        return None;
    };
    Some(vec![
        input.normalized_make(),
        input.normalized_model(),
        format_kshs(input.sum_insured),
        format_kshs(result.base_premium),
        format_kshs(result.excess_premium),
        format_kshs(result.pvt_premium),
        format_kshs(result.total_premium),
    ])
}

fn commercial_row(line: &QuoteLine) -> Option<Vec<String>> {
    let RatedVehicle::Commercial { input, result } = &line.vehicle else {
        return None;
    };
    Some(vec![
        input.subclass.label().to_string(),
        input.cover_type().label().to_string(),
        format_optional_kshs(input.cover.sum_insured()),
        input
            .cover
            .unit_type()
            .map_or_else(|| NOT_APPLICABLE.to_string(), |u| u.label().to_string()),
        format_tonnage(input.cover.tonnage()),
        format_kshs(result.base_premium),
        format_kshs(result.excess_premium),
        format_kshs(result.pvt_premium),
        format_kshs(result.pll_premium),
        format_kshs(result.total_premium),
    ])
}

/// A rendered quotation for one client
pub struct QuotationDocument<'a> {
    branding: &'a Branding,
    client: &'a ClientDetails,
    date: NaiveDate,
    summary: &'a QuoteSummary,
    layout: DocumentLayout,
}

impl<'a> QuotationDocument<'a> {
    pub fn new(
        branding: &'a Branding,
        client: &'a ClientDetails,
        date: NaiveDate,
        summary: &'a QuoteSummary,
    ) -> Self {
        Self {
            branding,
            client,
            date,
            summary,
            layout: DocumentLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: DocumentLayout) -> Self {
        self.layout = layout;
        self
    }

    fn header_block(&self) -> Vec<String> {
        let mut lines = vec![center_on_page(&self.branding.company_name.to_uppercase())];
        lines.extend(self.branding.address_lines.iter().map(|l| center_on_page(l)));
        lines.push(center_on_page(&format!("Email: {}", self.branding.email)));
        lines.push(String::new());
        lines.push(center_on_page(&self.branding.title));
        lines.push(format!("Date: {}", self.date.format("%d %b %Y")));
        lines.push(String::new());
        lines
    }

    fn client_block(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .client
            .printed_fields()
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        lines.push(String::new());
        lines
    }

    /// Section for one vehicle type, `None` when the quotation has none
    fn vehicle_block(&self, vehicle_type: VehicleType) -> Option<Vec<String>> {
        let (headers, rows): (&'static [&'static str], Vec<Vec<String>>) = match vehicle_type {
            VehicleType::Private => (
                PRIVATE_COLUMNS,
                self.summary.lines_of(vehicle_type).filter_map(private_row).collect(),
            ),
            VehicleType::Commercial => (
                COMMERCIAL_COLUMNS,
                self.summary.lines_of(vehicle_type).filter_map(commercial_row).collect(),
            ),
        };
        if rows.is_empty() {
            return None;
        }

        let table = Table { headers, rows }.render();
        let table: Vec<String> = match vehicle_type {
            VehicleType::Private => table.iter().map(|l| center_on_page(l)).collect(),
            VehicleType::Commercial => table,
        };

        let mut lines = vec![center_on_page(&format!("Motor {}", vehicle_type)), String::new()];
        lines.extend(table);
        lines.push(String::new());
        lines.push(format!("Total: {}", format_kshs(self.summary.subtotal(vehicle_type))));
        lines.push(String::new());
        Some(lines)
    }

    fn closing_block(&self) -> Vec<String> {
        vec![
            center_on_page(&format!("Grand Total: {}", format_kshs(self.summary.grand_total()))),
            String::new(),
            center_on_page(&self.branding.closing),
        ]
    }

    /// Groups of lines kept on one page where they fit
    fn blocks(&self) -> Vec<Vec<String>> {
        let mut blocks = vec![self.header_block(), self.client_block()];
        blocks.extend(VehicleType::ALL.iter().filter_map(|&t| self.vehicle_block(t)));
        blocks.push(self.closing_block());
        blocks
    }

    /// Lay the document out into pages of exactly `page_lines` lines
    pub fn pages(&self) -> Vec<Vec<String>> {
        let body = self.layout.body_lines();
        let mut pages: Vec<Vec<String>> = vec![Vec::new()];

        for block in self.blocks() {
            let used = pages.last().map_or(0, Vec::len);
            if used > 0 && used + block.len() > body {
                pages.push(Vec::new());
            }
            for line in block {
                if pages.last().map_or(0, Vec::len) >= body {
                    pages.push(Vec::new());
                }
                if let Some(page) = pages.last_mut() {
                    page.push(line);
                }
            }
        }

        let total = pages.len();
        for (i, page) in pages.iter_mut().enumerate() {
            page.resize(body, String::new());
            page.push(String::new());
            page.push(center_on_page(&format!("Page {} of {}", i + 1, total)));
        }
        pages
    }

    /// Full document text
    pub fn render(&self) -> String {
        let pages: Vec<String> = self.pages().iter().map(|p| p.join("\n")).collect();
        let separator = format!("\n{}", PAGE_BREAK);
        let mut text = pages.join(separator.as_str());
        text.push('\n');
        text
    }

    /// Write the document to a file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        info!("Quotation written to {}", path.display());
        Ok(())
    }

    /// Write the document into a directory under the client's file name
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.client.document_file_name("txt"));
        self.write_to(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::{CommercialRater, PrivateRater};
    use crate::vehicle::{CommercialRatingInput, PrivateRatingInput, Subclass, UnitType};

    fn quote_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn client() -> ClientDetails {
        ClientDetails {
            address: "P.O. Box 100, Nairobi".to_string(),
            producer: "Direct".to_string(),
            ..ClientDetails::new("Acme Ltd")
        }
    }

    fn summary(private: bool, commercial: bool) -> QuoteSummary {
        let mut summary = QuoteSummary::new();
        if private {
            let input = PrivateRatingInput::new("toyota", "probox", 800_000.0).with_excess(true).with_pvt(true);
            let result = PrivateRater::default().rate(&input);
            summary.add_vehicle(RatedVehicle::Private { input, result });
        }
        if commercial {
            let input = CommercialRatingInput::third_party_only(Subclass::OwnGoods, 3.0, UnitType::SingleUnit);
            let result = CommercialRater::default().rate(&input);
            summary.add_vehicle(RatedVehicle::Commercial { input, result });
        }
        summary
    }

    #[test]
    fn test_render_contents() {
        let branding = Branding::default();
        let client = client();
        let summary = summary(true, true);
        let text = QuotationDocument::new(&branding, &client, quote_date(), &summary).render();

        assert!(text.contains("LIBERTY HOUSE - MAMLAKA ROAD"));
        assert!(text.contains("Email: info@heritage.co.ke"));
        assert!(text.contains("Date: 16 Oct 2026"));
        assert!(text.contains("Client Name: Acme Ltd"));
        assert!(text.contains("Producer: Direct"));
        assert!(text.contains("Motor Private"));
        assert!(text.contains("Motor Commercial"));
        assert!(text.contains("Total: KShs 64,500"));
        assert!(text.contains("Total: KShs 12,000"));
        assert!(text.contains("Grand Total: KShs 76,500"));
        assert!(text.contains("Thank you for choosing Heritage Insurance Company."));
        // Make and model are printed title-cased
        assert!(text.contains("| Toyota |"));
        assert!(text.contains("| Probox |"));
    }

    #[test]
    fn test_commercial_columns_and_not_applicable_fields() {
        let branding = Branding::default();
        let client = client();
        let summary = summary(false, true);
        let text = QuotationDocument::new(&branding, &client, quote_date(), &summary).render();

        let header = text
            .lines()
            .find(|l| l.contains("Subclass"))
            .expect("commercial header row");
        let columns: Vec<&str> = header.trim_matches('|').split('|').map(str::trim).collect();
        assert_eq!(columns, COMMERCIAL_COLUMNS);

        // TPO row has no sum insured
        let row = text.lines().find(|l| l.contains("Own Goods")).expect("commercial row");
        assert!(row.contains("N/A"));
        assert!(row.contains("Single Unit"));
        assert!(row.contains("3.0"));

        assert!(!text.contains("Motor Private"));
    }

    #[test]
    fn test_pages_have_fixed_length_and_footer() {
        let branding = Branding::default();
        let client = client();
        let summary = summary(true, true);
        let doc = QuotationDocument::new(&branding, &client, quote_date(), &summary);

        let pages = doc.pages();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), DEFAULT_PAGE_LINES);
        assert_eq!(pages[0].last().unwrap().trim(), "Page 1 of 1");
        assert!(!doc.render().contains(PAGE_BREAK));
    }

    #[test]
    fn test_sections_move_to_new_page_instead_of_splitting() {
        let branding = Branding::default();
        let client = client();
        let summary = summary(true, true);
        let doc = QuotationDocument::new(&branding, &client, quote_date(), &summary)
            .with_layout(DocumentLayout::new(MIN_PAGE_LINES));

        let pages = doc.pages();
        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|p| p.len() == MIN_PAGE_LINES));
        assert!(pages[0].iter().any(|l| l.contains("Client Name: Acme Ltd")));
        assert!(pages[1][0].contains("Motor Private"));
        assert!(pages[2][0].contains("Motor Commercial"));
        assert!(pages[2].iter().any(|l| l.contains("Grand Total: KShs 76,500")));
        assert_eq!(pages[2].last().unwrap().trim(), "Page 3 of 3");

        let text = doc.render();
        assert_eq!(text.matches(PAGE_BREAK).count(), 2);
    }

    #[test]
    fn test_layout_minimum() {
        assert_eq!(DocumentLayout::new(5).page_lines(), MIN_PAGE_LINES);
        assert_eq!(DocumentLayout::new(80).page_lines(), 80);
    }

    #[test]
    fn test_write_to_dir() {
        let branding = Branding::default();
        let client = client();
        let summary = summary(true, false);
        let doc = QuotationDocument::new(&branding, &client, quote_date(), &summary);

        let dir = std::env::temp_dir().join(format!("motor_quotation_doc_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = doc.write_to_dir(&dir).expect("Failed to write quotation");

        assert_eq!(path.file_name().unwrap(), "Quotation_Acme_Ltd.txt");
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.render());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
