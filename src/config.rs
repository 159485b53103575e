//! Runtime configuration for quotation runs
//!
//! Accepts config via environment variables:
//!   MOTOR_QUOTE_OUTPUT_DIR  directory the quotation document is written to (default ".")
//!   MOTOR_QUOTE_TARIFF_DIR  directory holding the risk list CSVs (default: built-in lists)
//!   MOTOR_QUOTE_PAGE_LINES  lines per document page (default 60)

use log::{debug, info};
use std::env;
use std::path::PathBuf;

use crate::error::Result;
use crate::quotation::{Branding, DocumentLayout, DEFAULT_PAGE_LINES};
use crate::rating::Tariff;

pub const OUTPUT_DIR_VAR: &str = "MOTOR_QUOTE_OUTPUT_DIR";
pub const TARIFF_DIR_VAR: &str = "MOTOR_QUOTE_TARIFF_DIR";
pub const PAGE_LINES_VAR: &str = "MOTOR_QUOTE_PAGE_LINES";

/// Settings shared by every quotation run
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    pub output_dir: PathBuf,
    /// Risk list directory; `None` uses the built-in lists
    pub tariff_dir: Option<PathBuf>,
    pub page_lines: usize,
    pub branding: Branding,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            tariff_dir: None,
            page_lines: DEFAULT_PAGE_LINES,
            branding: Branding::default(),
        }
    }
}

impl QuoteConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output_dir = lookup(OUTPUT_DIR_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let tariff_dir = lookup(TARIFF_DIR_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let page_lines: usize = lookup(PAGE_LINES_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.page_lines);

        let config = Self {
            output_dir,
            tariff_dir,
            page_lines,
            branding: defaults.branding,
        };
        debug!("Quote config: {:?}", config);
        config
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_tariff_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tariff_dir = Some(dir.into());
        self
    }

    pub fn with_page_lines(mut self, page_lines: usize) -> Self {
        self.page_lines = page_lines;
        self
    }

    pub fn layout(&self) -> DocumentLayout {
        DocumentLayout::new(self.page_lines)
    }

    /// Tariff with risk lists from `tariff_dir`, or the standard tariff
    pub fn load_tariff(&self) -> Result<Tariff> {
        match &self.tariff_dir {
            Some(dir) => {
                info!("Loading tariff risk lists from {}", dir.display());
                Tariff::from_csv_path(dir)
            }
            None => Ok(Tariff::default_tariff()),
        }
    }
}
