// Fixed-size block splitting

use super::error::{Error, Result};

/// Split `bytes` into consecutive blocks of exactly `size` bytes.
///
/// The input length must be a multiple of `size`; a short trailing block
/// is rejected rather than returned.
pub fn split(bytes: &[u8], size: usize) -> Result<Vec<&[u8]>> {
    if size == 0 || bytes.len() % size != 0 {
        return Err(Error::UnalignedInput {
            block_size: size,
            len: bytes.len(),
        });
    }

    Ok(bytes.chunks_exact(size).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_aligned() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let blocks = split(&data, 2).unwrap();
        assert_eq!(blocks, vec![&data[0..2], &data[2..4], &data[4..6]]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split(&[], 4).unwrap().is_empty());
    }

    #[test]
    fn test_split_unaligned() {
        assert_eq!(
            split(&[0u8; 7], 3),
            Err(Error::UnalignedInput { block_size: 3, len: 7 })
        );
    }

    #[test]
    fn test_split_zero_size() {
        assert!(split(&[0u8; 4], 0).is_err());
    }
}
