//! The bridge between scanning and parsing.
//!
//! A scanner produces a [`Token`] for every lexeme. Whether a token carries a payload is decided by
//! its kind alone (see [`TokenKind::requires_payload`]), and [`Lexeme`] makes sure the two never
//! disagree: there is no way to build a string token without its text, or a colon with some.


mod taxonomy;

pub use location::Location;
pub use smol_str::SmolStr;
pub use taxonomy::{BracketKind, Classified, PayloadKind, PlainKind, TokenKind};

use std::fmt;

/// What was scanned: a kind, and the payload if the kind needs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lexeme {
  /// A kind that carries nothing else.
  Plain(PlainKind),
  /// A kind and its text.
  Payload(PayloadKind, SmolStr),
}

impl Lexeme {
  /// Returns the kind.
  #[must_use]
  pub fn kind(&self) -> TokenKind {
    match self {
      Lexeme::Plain(k) => (*k).into(),
      Lexeme::Payload(k, _) => (*k).into(),
    }
  }

  /// Returns the payload, if any.
  #[must_use]
  pub fn payload(&self) -> Option<&str> {
    match self {
      Lexeme::Plain(_) => None,
      Lexeme::Payload(_, s) => Some(s.as_str()),
    }
  }
}

/// A token. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
  location: Location,
  lexeme: Lexeme,
}

impl Token {
  /// Returns a new token without a payload.
  #[must_use]
  pub fn new(location: Location, kind: PlainKind) -> Self {
    Self { location, lexeme: Lexeme::Plain(kind) }
  }

  /// Returns a new [`TokenKind::Invalid`] token, for where nothing valid was scanned.
  #[must_use]
  pub fn invalid(location: Location) -> Self {
    Self::new(location, PlainKind::Invalid)
  }

  /// Returns a new token with a payload.
  #[must_use]
  pub fn with_payload<S>(location: Location, kind: PayloadKind, payload: S) -> Self
  where
    S: Into<SmolStr>,
  {
    Self { location, lexeme: Lexeme::Payload(kind, payload.into()) }
  }

  /// Returns a new token from a kind only known at runtime.
  ///
  /// Prefer [`Self::new`] or [`Self::with_payload`] when the kind is known statically.
  ///
  /// # Errors
  ///
  /// If `payload` is `Some` but `kind` takes no payload, or `None` but `kind` requires one.
  pub fn from_parts<S>(
    location: Location,
    kind: TokenKind,
    payload: Option<S>,
  ) -> Result<Self, PayloadMismatch>
  where
    S: Into<SmolStr>,
  {
    match (kind.classify(), payload) {
      (Classified::Plain(k), None) => Ok(Self::new(location, k)),
      (Classified::Payload(k), Some(s)) => Ok(Self::with_payload(location, k, s)),
      (_, payload) => {
        let err = PayloadMismatch { location, kind, payload: payload.map(Into::into) };
        log::error!("{err}");
        Err(err)
      }
    }
  }

  /// Returns where this token was scanned.
  #[must_use]
  pub fn location(&self) -> Location {
    self.location
  }

  /// Returns the kind and payload.
  #[must_use]
  pub fn lexeme(&self) -> &Lexeme {
    &self.lexeme
  }

  /// Returns the kind.
  #[must_use]
  pub fn kind(&self) -> TokenKind {
    self.lexeme.kind()
  }

  /// Returns whether this token carries a payload.
  ///
  /// Always equal to `self.kind().requires_payload()`.
  #[must_use]
  pub fn has_payload(&self) -> bool {
    matches!(self.lexeme, Lexeme::Payload(..))
  }

  /// Returns the payload, or `None` exactly when [`Self::has_payload`] is false.
  #[must_use]
  pub fn payload(&self) -> Option<&str> {
    self.lexeme.payload()
  }

  /// Returns whether this token ends a line or the whole input.
  #[must_use]
  pub fn is_end_marker(&self) -> bool {
    self.kind().is_end_marker()
  }

  /// Returns whether this token can stand for a member value or an object reference.
  #[must_use]
  pub fn is_content(&self) -> bool {
    self.kind().is_content()
  }
}

/// For error messages. Not stable and not source text.
impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.location, self.kind())?;
    match &self.lexeme {
      Lexeme::Plain(_) => Ok(()),
      Lexeme::Payload(PayloadKind::String, s) => write!(f, " {:?}", s.as_str()),
      Lexeme::Payload(_, s) => write!(f, " {s}"),
    }
  }
}

/// An error when a token's payload does not agree with its kind. Returned by
/// [`Token::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadMismatch {
  location: Location,
  kind: TokenKind,
  payload: Option<SmolStr>,
}

impl PayloadMismatch {
  /// Returns where the rejected token was.
  #[must_use]
  pub fn location(&self) -> Location {
    self.location
  }

  /// Returns the kind of the rejected token.
  #[must_use]
  pub fn kind(&self) -> TokenKind {
    self.kind
  }

  /// Returns the payload that was given, if any.
  #[must_use]
  pub fn payload(&self) -> Option<&str> {
    self.payload.as_deref()
  }
}

impl fmt::Display for PayloadMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {} ", self.location, self.kind)?;
    match &self.payload {
      None => f.write_str("requires a payload, but none was given"),
      Some(s) => write!(f, "takes no payload, but got {:?}", s.as_str()),
    }
  }
}

impl std::error::Error for PayloadMismatch {}
