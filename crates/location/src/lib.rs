//! Where a lexeme sits in its source file.

#[cfg(test)]
mod tests;

use source_file::{FileId, Store};
use std::fmt;

/// The location of a lexeme: which file, which line, where on that line, and how long.
///
/// Lines and offsets are zero-based. Offsets and lengths count chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
  /// The file.
  pub file: FileId,
  /// The line.
  pub line: u32,
  /// The offset of the first char from the start of the line.
  pub offset: u32,
  /// The number of chars.
  pub length: u32,
}

impl Location {
  /// Returns a new `Location`.
  #[must_use]
  pub fn new(file: FileId, line: u32, offset: u32, length: u32) -> Self {
    Self { file, line, offset, length }
  }

  /// Returns the offset one past the last char. Saturates at `u32::MAX`.
  #[must_use]
  pub fn end_offset(&self) -> u32 {
    self.offset.saturating_add(self.length)
  }

  /// Returns the position of the first char.
  #[must_use]
  pub fn start(&self) -> Position {
    Position { line: self.line, character: self.offset }
  }

  /// Returns the position one past the last char.
  ///
  /// Lexemes never span lines, so this is on the same line as [`Self::start`].
  #[must_use]
  pub fn end(&self) -> Position {
    Position { line: self.line, character: self.end_offset() }
  }

  /// Returns a value that displays this location prefixed with the file name from `store`.
  ///
  /// Falls back to the bare file ID if `store` does not know the file.
  #[must_use]
  pub fn display<'a>(&'a self, store: &'a Store) -> WithFileName<'a> {
    WithFileName { location: self, store }
  }
}

impl fmt::Display for Location {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.start(), f)
  }
}

/// Displays a [`Location`] as `name:line:column`. Returned by [`Location::display`].
#[derive(Debug)]
pub struct WithFileName<'a> {
  location: &'a Location,
  store: &'a Store,
}

impl fmt::Display for WithFileName<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.store.get(self.location.file) {
      Some(file) => write!(f, "{}:{}", file.name(), self.location),
      None => write!(f, "{}:{}", self.location.file, self.location),
    }
  }
}

/// A position in text by line and character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
  /// The line, zero-based.
  pub line: u32,
  /// The character, zero-based.
  pub character: u32,
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", u64::from(self.line) + 1, u64::from(self.character) + 1)
  }
}
