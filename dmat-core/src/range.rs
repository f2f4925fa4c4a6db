//! Range selector parsing for matrix slicing
//!
//! Selectors use the bracketed form `[startRow:endRow, startCol:endCol]`.
//! Either side of a `:` may be empty (unbounded), and `:` alone selects a
//! whole axis. Bounds are inclusive and zero-based; a selector with
//! `start > end` is normalized by swapping. This is a pure string-parsing
//! utility: resolution against an actual shape happens via
//! [`RangeSelector::resolve_rows`] / [`RangeSelector::resolve_cols`].

use crate::DmatError;
use core::fmt;
use core::ops::Range;

/// A parsed two-axis range selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSelector {
    /// First selected row, `None` for unbounded
    pub start_row: Option<usize>,
    /// Last selected row (inclusive), `None` for unbounded
    pub end_row: Option<usize>,
    /// First selected column, `None` for unbounded
    pub start_col: Option<usize>,
    /// Last selected column (inclusive), `None` for unbounded
    pub end_col: Option<usize>,
}

impl RangeSelector {
    /// Parse a selector string such as `[1:3, :]`
    pub fn parse(s: &str) -> Result<Self, DmatError> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or(DmatError::InvalidRange)?;

        let mut parts = inner.split(',');
        let row_part = parts.next().ok_or(DmatError::InvalidRange)?;
        let col_part = parts.next().ok_or(DmatError::InvalidRange)?;
        if parts.next().is_some() {
            return Err(DmatError::InvalidRange);
        }

        let (start_row, end_row) = parse_axis(row_part)?;
        let (start_col, end_col) = parse_axis(col_part)?;
        Ok(Self {
            start_row,
            end_row,
            start_col,
            end_col,
        })
    }

    /// Resolve the row bounds against a concrete row count
    pub fn resolve_rows(&self, rows: usize) -> Range<usize> {
        resolve_axis(self.start_row, self.end_row, rows)
    }

    /// Resolve the column bounds against a concrete column count
    pub fn resolve_cols(&self, cols: usize) -> Range<usize> {
        resolve_axis(self.start_col, self.end_col, cols)
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bound(f: &mut fmt::Formatter<'_>, value: Option<usize>) -> fmt::Result {
            match value {
                Some(v) => write!(f, "{v}"),
                None => Ok(()),
            }
        }
        write!(f, "[")?;
        bound(f, self.start_row)?;
        write!(f, ":")?;
        bound(f, self.end_row)?;
        write!(f, ", ")?;
        bound(f, self.start_col)?;
        write!(f, ":")?;
        bound(f, self.end_col)?;
        write!(f, "]")
    }
}

/// Parse one `start:end` axis part, normalizing swapped bounds
fn parse_axis(part: &str) -> Result<(Option<usize>, Option<usize>), DmatError> {
    let p = part.trim();
    let colon = p.find(':').ok_or(DmatError::InvalidRange)?;
    if p[colon + 1..].contains(':') {
        return Err(DmatError::InvalidRange);
    }

    let start = parse_bound(&p[..colon])?;
    let end = parse_bound(&p[colon + 1..])?;
    match (start, end) {
        (Some(a), Some(b)) if a > b => Ok((Some(b), Some(a))),
        other => Ok(other),
    }
}

/// Parse one bound; empty means unbounded
fn parse_bound(s: &str) -> Result<Option<usize>, DmatError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<usize>()
        .map(Some)
        .map_err(|_| DmatError::InvalidRange)
}

fn resolve_axis(start: Option<usize>, end: Option<usize>, total: usize) -> Range<usize> {
    let lo = start.unwrap_or(0).min(total);
    let hi = match end {
        Some(e) => e.saturating_add(1).min(total),
        None => total,
    };
    lo..hi.max(lo)
}
