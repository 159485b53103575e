//! Quotation summary, money formatting and document rendering

mod client;
mod document;
mod format;
mod summary;

pub use client::{ClientDetails, QUOTATION_FILE_PREFIX};
pub use document::{Branding, DocumentLayout, QuotationDocument, DEFAULT_PAGE_LINES, MIN_PAGE_LINES, PAGE_BREAK};
pub use format::{format_kshs, format_optional_kshs, format_thousands, format_tonnage, NOT_APPLICABLE};
pub use summary::{QuoteLine, QuoteSummary, QuoteTotals, RatedVehicle};
