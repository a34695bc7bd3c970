//! Parsing of free-text breakdown columns into structured slices.
//!
//! The source tables carry geographic and asset-class splits as text,
//! e.g. `"Europa: 50%, EUA: 35%, Altres: 15%"`. The rendering surface
//! consumes these as (category, percentage) pairs; parsing lives here
//! so schema quirks stay out of the presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One (category, percentage) pair parsed from a breakdown string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownSlice {
    pub category: String,
    pub percentage: f64,
}

/// Errors raised while parsing a breakdown string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BreakdownError {
    /// A segment has no `"category: value"` separator.
    #[error("Breakdown segment '{segment}' has no percentage")]
    MissingPercentage { segment: String },

    /// The value part of a segment is not a number.
    #[error("Breakdown segment '{segment}' has a non-numeric percentage '{value}'")]
    InvalidPercentage { segment: String, value: String },
}

/// Parses a breakdown string such as `"Europa: 50%, EUA: 35%"` into
/// slices, preserving segment order.
///
/// Segments are comma-separated; each is `"<category>: <number>"` with
/// an optional `%` suffix. A malformed segment fails the whole parse
/// with a typed error naming the segment; nothing is skipped silently.
pub fn parse_breakdown(text: &str) -> Result<Vec<BreakdownSlice>, BreakdownError> {
    let mut slices = Vec::new();

    for raw in text.split(',') {
        let segment = raw.trim();
        if segment.is_empty() {
            continue;
        }

        let (category, value) =
            segment
                .split_once(':')
                .ok_or_else(|| BreakdownError::MissingPercentage {
                    segment: segment.to_string(),
                })?;

        let value = value.trim().trim_end_matches('%').trim();
        let percentage =
            value
                .parse::<f64>()
                .map_err(|_| BreakdownError::InvalidPercentage {
                    segment: segment.to_string(),
                    value: value.to_string(),
                })?;

        slices.push(BreakdownSlice {
            category: category.trim().to_string(),
            percentage,
        });
    }

    Ok(slices)
}

/// Splits a comma-separated top-holdings list into individual names.
pub fn split_holdings(text: &str) -> Vec<String> {
    text.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_breakdown_source_format() {
        let slices = parse_breakdown("Europa: 50%, EUA: 35%, Altres: 15%").unwrap();
        assert_eq!(
            slices,
            vec![
                BreakdownSlice {
                    category: "Europa".to_string(),
                    percentage: 50.0
                },
                BreakdownSlice {
                    category: "EUA".to_string(),
                    percentage: 35.0
                },
                BreakdownSlice {
                    category: "Altres".to_string(),
                    percentage: 15.0
                },
            ]
        );
    }

    #[test]
    fn test_parse_breakdown_accepts_fractional_values_without_percent() {
        let slices = parse_breakdown("Eurozona: 81.31, Efectiu: 17.01").unwrap();
        assert_eq!(slices.len(), 2);
        assert!((slices[0].percentage - 81.31).abs() < 1e-9);
    }

    #[test]
    fn test_parse_breakdown_rejects_segment_without_separator() {
        let err = parse_breakdown("Multiactiu (Flexible)").unwrap_err();
        assert_eq!(
            err,
            BreakdownError::MissingPercentage {
                segment: "Multiactiu (Flexible)".to_string()
            }
        );
    }

    #[test]
    fn test_parse_breakdown_rejects_non_numeric_value() {
        let err = parse_breakdown("Europa: mitjana").unwrap_err();
        assert!(matches!(err, BreakdownError::InvalidPercentage { .. }));
    }

    #[test]
    fn test_parse_breakdown_empty_string_is_empty() {
        assert!(parse_breakdown("").unwrap().is_empty());
    }

    #[test]
    fn test_split_holdings() {
        let holdings = split_holdings("Alphabet, Microsoft, Allianz");
        assert_eq!(holdings, vec!["Alphabet", "Microsoft", "Allianz"]);
    }
}
