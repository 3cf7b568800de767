//! Decoding of the platform's crunched page-dimension lists.
//!
//! A page spec groups identical values and lists the page indices they
//! apply to, e.g. `612.0x792.0:0-2,4;595.0x842.0:3`.

use crate::error::SpacetextError;
use crate::model::PageDimensions;

/// Highest page count a page spec may describe.
pub const MAX_PAGES: usize = 100_000;

/// Expand a crunched list into one value per index.
pub fn uncrunch(crunched: &str) -> Result<Vec<String>, SpacetextError> {
    let crunched = crunched.trim();
    if crunched.is_empty() {
        return Ok(Vec::new());
    }

    let mut slots: Vec<Option<String>> = Vec::new();
    for entry in crunched.split(';') {
        let (value, ranges) = entry
            .rsplit_once(':')
            .ok_or_else(|| SpacetextError::PageSpec(format!("entry '{entry}' has no ranges")))?;

        for range in ranges.split(',') {
            let (start, end) = parse_range(range)?;
            if end >= slots.len() {
                slots.resize(end + 1, None);
            }
            for slot in &mut slots[start..=end] {
                *slot = Some(value.to_string());
            }
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            slot.ok_or_else(|| SpacetextError::PageSpec(format!("no value for page {i}")))
        })
        .collect()
}

/// Decode a page spec into per-page dimensions.
pub fn parse(page_spec: &str) -> Result<Vec<PageDimensions>, SpacetextError> {
    uncrunch(page_spec)?
        .iter()
        .map(|value| parse_dimensions(value))
        .collect()
}

fn parse_range(range: &str) -> Result<(usize, usize), SpacetextError> {
    let range = range.trim();
    let parse_index = |s: &str| -> Result<usize, SpacetextError> {
        let index = s
            .trim()
            .parse::<usize>()
            .map_err(|_| SpacetextError::PageSpec(format!("bad page index '{s}'")))?;
        if index >= MAX_PAGES {
            return Err(SpacetextError::PageSpec(format!(
                "page index {index} out of range (max {})",
                MAX_PAGES - 1
            )));
        }
        Ok(index)
    };

    match range.split_once('-') {
        Some((start, end)) => {
            let (start, end) = (parse_index(start)?, parse_index(end)?);
            if start > end {
                return Err(SpacetextError::PageSpec(format!(
                    "range '{range}' is reversed"
                )));
            }
            Ok((start, end))
        }
        None => {
            let index = parse_index(range)?;
            Ok((index, index))
        }
    }
}

fn parse_dimensions(value: &str) -> Result<PageDimensions, SpacetextError> {
    let bad = || SpacetextError::PageSpec(format!("bad page size '{value}'"));
    let (width, height) = value.split_once('x').ok_or_else(bad)?;
    let width: f64 = width.trim().parse().map_err(|_| bad())?;
    let height: f64 = height.trim().parse().map_err(|_| bad())?;
    if !(width > 0.0 && height > 0.0) {
        return Err(bad());
    }
    Ok(PageDimensions { width, height })
}
