use glam::UVec3;

use super::*;
use crate::constants::INSIDE;

fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
  let mut out = Vec::new();
  f(&mut out).unwrap();
  String::from_utf8(out).unwrap()
}

#[test]
fn test_header_declares_z_first() {
  let grid = DenseGrid::allocate(1, 2, 3).unwrap();
  let text = render(|w| write_nrrd(&grid, w));
  let mut lines = text.lines();

  assert_eq!(lines.next(), Some("NRRD0001"));
  assert_eq!(lines.next(), Some("dimension: 3"));
  assert_eq!(lines.next(), Some("type: int"));
  assert_eq!(lines.next(), Some("sizes: 4 3 2"));
  assert_eq!(lines.next(), Some("spacings: 1 1 1"));
  assert_eq!(lines.next(), Some("encoding: text"));
  assert_eq!(lines.next(), Some(""));

  let values: Vec<&str> = lines.next().unwrap().split(' ').collect();
  assert_eq!(values.len(), 2 * 3 * 4);
  assert_eq!(lines.next(), None);
}

/// Values run with Z fastest, then Y, then X.
#[test]
fn test_value_order() {
  let mut grid = DenseGrid::allocate(1, 1, 1).unwrap();
  grid.set(UVec3::new(0, 0, 1), INSIDE).unwrap();
  grid.set(UVec3::new(1, 0, 0), INSIDE).unwrap();

  let text = render(|w| write_values(&grid, w));
  assert_eq!(text, "0 1 0 0 1 0 0 0\n");
}

#[test]
fn test_single_point_grid() {
  let grid = DenseGrid::allocate(0, 0, 0).unwrap();
  assert_eq!(render(|w| write_values(&grid, w)), "0\n");
}
