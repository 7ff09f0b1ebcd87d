//! Source files, and cheap handles to them.
//!
//! Tokens and locations never own the text they came from. They hold a [`FileId`], which is only
//! meaningful together with the [`Store`] that handed it out.


use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Index;

/// A store of source files.
#[derive(Debug, Default)]
pub struct Store {
  files: Vec<File>,
  name_to_id: FxHashMap<String, FileId>,
}

impl Store {
  /// Returns a new, empty `Store`.
  #[must_use]
  pub fn new() -> Self {
    Store::default()
  }

  /// Adds a file with this name and contents, and returns its ID.
  ///
  /// If a file with this name was already added, its contents are left alone and the existing ID
  /// is returned.
  ///
  /// # Panics
  ///
  /// If the store already holds `u32::MAX` files.
  pub fn add<N, C>(&mut self, name: N, contents: C) -> FileId
  where
    N: Into<String>,
    C: Into<String>,
  {
    let name = name.into();
    if let Some(&id) = self.name_to_id.get(&name) {
      log::debug!("{name} already added as {id}");
      return id;
    }
    let id = match u32::try_from(self.files.len()) {
      Ok(raw) => FileId(raw),
      Err(e) => {
        log::error!("cannot add {name}: {e}");
        panic!("too many files in store");
      }
    };
    log::debug!("added {name} as {id}");
    self.name_to_id.insert(name.clone(), id);
    self.files.push(File { id, name, contents: contents.into() });
    id
  }

  /// Returns the ID for the file with this name, if it was added.
  #[must_use]
  pub fn id(&self, name: &str) -> Option<FileId> {
    self.name_to_id.get(name).copied()
  }

  /// Returns the file for this ID, or `None` if the ID did not come from this store.
  #[must_use]
  pub fn get(&self, id: FileId) -> Option<&File> {
    self.files.get(id.to_usize())
  }

  /// Returns the number of files.
  #[must_use]
  pub fn len(&self) -> usize {
    self.files.len()
  }

  /// Returns whether there are no files.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.files.is_empty()
  }

  /// Returns an iterator over the files, in the order they were added.
  pub fn iter(&self) -> impl Iterator<Item = &File> + '_ {
    self.files.iter()
  }
}

/// # Panics
///
/// If the ID did not come from this store and is out of range. An ID from another store that
/// happens to be in range returns the wrong file. Use [`Store::get`] when unsure.
impl Index<FileId> for Store {
  type Output = File;

  fn index(&self, id: FileId) -> &Self::Output {
    &self.files[id.to_usize()]
  }
}

/// A source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
  id: FileId,
  name: String,
  contents: String,
}

impl File {
  /// Returns the ID of this file.
  #[must_use]
  pub fn id(&self) -> FileId {
    self.id
  }

  /// Returns the name of this file, usually its path.
  #[must_use]
  pub fn name(&self) -> &str {
    self.name.as_str()
  }

  /// Returns the full text of this file.
  #[must_use]
  pub fn contents(&self) -> &str {
    self.contents.as_str()
  }

  /// Returns the text of the line, zero-based, without its line ending.
  #[must_use]
  pub fn line(&self, line: u32) -> Option<&str> {
    let line = usize::try_from(line).ok()?;
    self.contents.lines().nth(line)
  }
}

/// A file identifier. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl FileId {
  fn to_usize(self) -> usize {
    // u32 always fits on the targets we support.
    self.0 as usize
  }
}

impl fmt::Display for FileId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "file#{}", self.0)
  }
}

impl nohash_hasher::IsEnabled for FileId {}

/// A map from files to something.
pub type FileMap<T> = nohash_hasher::IntMap<FileId, T>;
