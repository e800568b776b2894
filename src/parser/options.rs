//! Parsing options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};
use crate::layout::StructureConfig;

/// Options for extracting a document.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Page selection (which pages to interpret)
    pub pages: PageSelection,

    /// Apply Unicode NFC normalization to decoded fragments
    pub normalize_unicode: bool,

    /// Heading and bullet vocabulary
    pub structure: StructureConfig,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Enable or disable Unicode normalization of fragments.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Set the structure vocabulary.
    pub fn with_structure(mut self, config: StructureConfig) -> Self {
        self.structure = config;
        self
    }
}

/// Page selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// All pages
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Specific pages (1-indexed)
    Pages(Vec<u32>),
    /// Several ranges (inclusive, 1-indexed), as produced by [`PageSelection::parse`]
    /// for comma lists. Ranges are kept unexpanded.
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// The first requested page beyond `total`, if any.
    ///
    /// For a range this is its start when the whole range is missing and
    /// its end otherwise.
    pub fn first_beyond(&self, total: u32) -> Option<u32> {
        let beyond = |range: &RangeInclusive<u32>| {
            if *range.start() > total {
                Some(*range.start())
            } else {
                Some(*range.end()).filter(|&p| p > total)
            }
        };
        match self {
            PageSelection::All => None,
            PageSelection::Range(range) => beyond(range),
            PageSelection::Pages(pages) => pages.iter().copied().find(|&p| p > total),
            PageSelection::Ranges(ranges) => ranges.iter().find_map(beyond),
        }
    }

    /// Parse a page selection string (e.g., "all", "2-4", "1,3,5-7").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        let mut ranges = Vec::new();
        for part in s.split(',').map(str::trim) {
            let range = match part.split_once('-') {
                Some((start, end)) => {
                    let start = parse_page(start)?;
                    let end = parse_page(end)?;
                    if start > end {
                        return Err(Error::InvalidPageRange(part.to_string()));
                    }
                    start..=end
                }
                None => {
                    let page = parse_page(part)?;
                    page..=page
                }
            };
            ranges.push(range);
        }

        if !s.contains(',') {
            if let Some(range) = ranges.pop() {
                return Ok(PageSelection::Range(range));
            }
        }
        Ok(PageSelection::Ranges(merge_ranges(ranges)))
    }
}

/// Sort and coalesce overlapping or adjacent ranges.
fn merge_ranges(mut ranges: Vec<RangeInclusive<u32>>) -> Vec<RangeInclusive<u32>> {
    ranges.sort_unstable_by_key(|r| *r.start());
    let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                let end = (*last.end()).max(*range.end());
                *last = *last.start()..=end;
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn parse_page(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(Error::InvalidPageRange(s.to_string())),
        Ok(page) => Ok(page),
    }
}
