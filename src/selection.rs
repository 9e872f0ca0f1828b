// src/selection.rs
//! Parsing of the interactive "which results?" answer.

use crate::error::AppError;

/// Turns a selection like `1,3,5` or `all` into zero-based indices.
///
/// `all` is case-insensitive. Indices are 1-based; out-of-range ones
/// (including zero and negatives) are ignored, and anything non-numeric
/// rejects the whole answer.
pub fn parse_selection(input: &str, len: usize) -> Result<Vec<usize>, AppError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return Ok((0..len).collect());
    }

    let mut indices = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        let number: i64 = part
            .parse()
            .map_err(|_| AppError::InvalidSelection(format!("'{}' is not a number", part)))?;
        let index = number
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .filter(|i| *i < len);
        match index {
            Some(index) => indices.push(index),
            None => log::debug!("Ignoring out-of-range selection {}", number),
        }
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selects_everything() {
        assert_eq!(parse_selection("all", 3).unwrap(), vec![0, 1, 2]);
        assert_eq!(parse_selection(" ALL ", 2).unwrap(), vec![0, 1]);
        assert!(parse_selection("all", 0).unwrap().is_empty());
    }

    #[test]
    fn test_indices_are_one_based() {
        assert_eq!(parse_selection("1,3", 3).unwrap(), vec![0, 2]);
        assert_eq!(parse_selection(" 2 , 2 ", 3).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        assert_eq!(parse_selection("0,2,9", 3).unwrap(), vec![1]);
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        assert!(matches!(
            parse_selection("1,x", 3),
            Err(AppError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_selection("", 3),
            Err(AppError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_negative_numbers_are_ignored() {
        assert!(parse_selection("-1", 3).unwrap().is_empty());
        assert_eq!(parse_selection("-2,1", 3).unwrap(), vec![0]);
        assert!(parse_selection(&i64::MIN.to_string(), 3).unwrap().is_empty());
    }
}
