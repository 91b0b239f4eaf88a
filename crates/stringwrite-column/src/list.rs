//! Row-wise deserialization into owned strings.

use crate::error::PackError;
use crate::packer::validate;

/// Split `values` into one owned string per row.
pub fn deserialize_to_list(lengths: &[i32], values: &[u8]) -> Result<Vec<String>, PackError> {
    validate(lengths, values, lengths.len(), values.len())?;

    let mut rows = Vec::with_capacity(lengths.len());
    let mut start = 0usize;
    for (row, &len) in lengths.iter().enumerate() {
        let end = start + len as usize;
        let text = std::str::from_utf8(&values[start..end]).map_err(|e| {
            PackError::InvariantViolation(format!("row {row} is not valid UTF-8: {e}"))
        })?;
        rows.push(text.to_owned());
        start = end;
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_to_list() {
        let rows = deserialize_to_list(&[3, 0, 2], b"fooba").unwrap();
        assert_eq!(rows, vec!["foo", "", "ba"]);
    }

    #[test]
    fn test_empty() {
        assert!(deserialize_to_list(&[], b"").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_mismatch() {
        assert!(matches!(
            deserialize_to_list(&[3], b"ab"),
            Err(PackError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        assert!(matches!(
            deserialize_to_list(&[1, 1], &[b'a', 0xFF]),
            Err(PackError::InvariantViolation(_))
        ));
    }
}
