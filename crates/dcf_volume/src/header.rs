//! DcfHeader - grid dimensions from the start of a DCF file.

use glam::UVec3;

use crate::constants::MAX_POINTS;
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, Result};
use crate::grid::DenseGrid;

/// Fixed-size prefix of a DCF file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DcfHeader {
  /// Cell counts along X, Y, Z. The point grid is one larger per axis.
  pub dims: UVec3,
}

impl DcfHeader {
  /// Skip the sign block and read the three axis lengths.
  ///
  /// Negative lengths and grids past [`MAX_POINTS`] points are rejected
  /// before anything is allocated.
  pub fn read(cursor: &mut ByteCursor<'_>, sign_block_len: usize) -> Result<Self> {
    cursor.skip(sign_block_len)?;
    let x = cursor.read_i32()?;
    let y = cursor.read_i32()?;
    let z = cursor.read_i32()?;

    let axis = |name: &str, len: i32| {
      u32::try_from(len)
        .map_err(|_| DecodeError::InvalidHeader(format!("negative {} length {}", name, len)))
    };

    let dims = UVec3::new(axis("X", x)?, axis("Y", y)?, axis("Z", z)?);
    if DenseGrid::point_count(dims).is_none() {
      return Err(DecodeError::InvalidHeader(format!(
        "grid of {} cells exceeds the {} point limit",
        dims, MAX_POINTS
      )));
    }

    Ok(Self { dims })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::SIGN_BLOCK_LEN;

  fn header_bytes(dims: [i32; 3]) -> Vec<u8> {
    let mut bytes = b"multisign\0".to_vec();
    for d in dims {
      bytes.extend_from_slice(&d.to_le_bytes());
    }
    bytes
  }

  #[test]
  fn test_read_dims_after_sign_block() {
    let bytes = header_bytes([4, 2, 8]);
    let mut cursor = ByteCursor::new(&bytes);
    let header = DcfHeader::read(&mut cursor, SIGN_BLOCK_LEN).unwrap();

    assert_eq!(header.dims, UVec3::new(4, 2, 8));
    assert_eq!(cursor.position(), 22);
  }

  #[test]
  fn test_negative_length_rejected() {
    let bytes = header_bytes([4, -1, 8]);
    let mut cursor = ByteCursor::new(&bytes);
    let err = DcfHeader::read(&mut cursor, SIGN_BLOCK_LEN).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidHeader(_)));
  }

  #[test]
  fn test_oversized_grid_rejected() {
    let bytes = header_bytes([i32::MAX; 3]);
    let mut cursor = ByteCursor::new(&bytes);
    let err = DcfHeader::read(&mut cursor, SIGN_BLOCK_LEN).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidHeader(_)));
  }

  /// 1024 cells per axis is just past the point limit.
  #[test]
  fn test_point_limit_boundary() {
    let bytes = header_bytes([1023, 1023, 1023]);
    assert!(DcfHeader::read(&mut ByteCursor::new(&bytes), SIGN_BLOCK_LEN).is_ok());

    let bytes = header_bytes([1024, 1023, 1023]);
    let err = DcfHeader::read(&mut ByteCursor::new(&bytes), SIGN_BLOCK_LEN).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidHeader(_)));
  }

  #[test]
  fn test_short_header_truncated() {
    let bytes = header_bytes([4, 2, 8]);
    let mut cursor = ByteCursor::new(&bytes[..20]);
    let err = DcfHeader::read(&mut cursor, SIGN_BLOCK_LEN).unwrap_err();
    assert!(matches!(err, DecodeError::TruncatedInput { offset: 18, .. }));
  }
}
