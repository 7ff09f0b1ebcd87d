use crate::{Location, Position};
use source_file::Store;

fn check(loc: Location, want: &str) {
  assert_eq!(loc.to_string(), want);
}

#[test]
fn display_is_one_based() {
  let mut store = Store::new();
  let file = store.add("a.nyan", "");
  check(Location::new(file, 0, 0, 1), "1:1");
  check(Location::new(file, 4, 8, 3), "5:9");
}

#[test]
fn start_and_end() {
  let mut store = Store::new();
  let file = store.add("a.nyan", "");
  let loc = Location::new(file, 2, 4, 6);
  assert_eq!(loc.start(), Position { line: 2, character: 4 });
  assert_eq!(loc.end(), Position { line: 2, character: 10 });
  assert_eq!(loc.end_offset(), 10);
}

#[test]
fn end_offset_saturates() {
  let mut store = Store::new();
  let file = store.add("a.nyan", "");
  let loc = Location::new(file, 0, u32::MAX - 1, 5);
  assert_eq!(loc.end_offset(), u32::MAX);
}

#[test]
fn with_file_name() {
  let mut store = Store::new();
  store.add("engine.nyan", "");
  let file = store.add("units/knight.nyan", "Knight():\n    pass\n");
  let loc = Location::new(file, 1, 4, 4);
  assert_eq!(loc.display(&store).to_string(), "units/knight.nyan:2:5");
}

#[test]
fn unknown_file() {
  let mut store = Store::new();
  store.add("a", "");
  let file = store.add("b", "");
  let loc = Location::new(file, 0, 0, 0);
  let other = Store::new();
  assert_eq!(loc.display(&other).to_string(), "file#1:1:1");
}

#[test]
fn display_at_max() {
  let mut store = Store::new();
  let file = store.add("a.nyan", "");
  check(Location::new(file, u32::MAX, 0, 1), "4294967296:1");
  check(Location::new(file, 0, u32::MAX, 1), "1:4294967296");
  let pos = Position { line: u32::MAX, character: u32::MAX };
  assert_eq!(pos.to_string(), "4294967296:4294967296");
}
