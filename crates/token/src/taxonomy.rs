//! The closed set of token kinds, and what each one needs to be complete.
//!
//! [`TokenKind`] is the full set. It splits into [`PlainKind`], for tokens whose kind says
//! everything there is to say, and [`PayloadKind`], for tokens that also carry the text they were
//! scanned from. [`TokenKind::classify`] is the one place that decides which side a kind falls on.

use std::fmt;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
  /// `as`
  As,
  /// `@`
  At,
  /// `!`
  Bang,
  /// `:`
  Colon,
  /// `,`
  Comma,
  /// The end of an indented block.
  Dedent,
  /// `.`
  Dot,
  /// The end of the input.
  EndFile,
  /// The end of a logical line.
  EndLine,
  /// `...`
  Ellipsis,
  /// A float literal, like `2.5`.
  Float,
  /// `from`
  From,
  /// An identifier.
  Id,
  /// `import`
  Import,
  /// The start of an indented block.
  Indent,
  /// An infinity literal, `inf` or `-inf`.
  Inf,
  /// An integer literal.
  Int,
  /// Not a token. Used where nothing valid was scanned.
  Invalid,
  /// `<`
  LAngle,
  /// `{`
  LBrace,
  /// `[`
  LBracket,
  /// `(`
  LParen,
  /// An operator, like `=` or `+=`.
  Operator,
  /// `pass`
  Pass,
  /// `>`
  RAngle,
  /// `}`
  RBrace,
  /// `]`
  RBracket,
  /// `)`
  RParen,
  /// A string literal, stored without its quotes.
  String,
}

impl TokenKind {
  /// All the kinds.
  pub const ALL: [TokenKind; 29] = [
    Self::As,
    Self::At,
    Self::Bang,
    Self::Colon,
    Self::Comma,
    Self::Dedent,
    Self::Dot,
    Self::EndFile,
    Self::EndLine,
    Self::Ellipsis,
    Self::Float,
    Self::From,
    Self::Id,
    Self::Import,
    Self::Indent,
    Self::Inf,
    Self::Int,
    Self::Invalid,
    Self::LAngle,
    Self::LBrace,
    Self::LBracket,
    Self::LParen,
    Self::Operator,
    Self::Pass,
    Self::RAngle,
    Self::RBrace,
    Self::RBracket,
    Self::RParen,
    Self::String,
  ];

  /// Returns a human-readable name for this kind, for error messages.
  ///
  /// Not stable. Do not parse it.
  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Self::As => "as",
      Self::At => "@",
      Self::Bang => "!",
      Self::Colon => "colon",
      Self::Comma => "comma",
      Self::Dedent => "dedentation",
      Self::Dot => "dot",
      Self::EndFile => "end of file",
      Self::EndLine => "end of line",
      Self::Ellipsis => "ellipsis",
      Self::Float => "float",
      Self::From => "from",
      Self::Id => "identifier",
      Self::Import => "import",
      Self::Indent => "indentation",
      Self::Inf => "inf",
      Self::Int => "int",
      Self::Invalid => "invalid",
      Self::LAngle => "'<'",
      Self::LBrace => "'{'",
      Self::LBracket => "'['",
      Self::LParen => "'('",
      Self::Operator => "operator",
      Self::Pass => "pass",
      Self::RAngle => "'>'",
      Self::RBrace => "'}'",
      Self::RBracket => "']'",
      Self::RParen => "')'",
      Self::String => "string",
    }
  }

  /// Returns which side of the payload split this kind is on.
  #[must_use]
  pub fn classify(self) -> Classified {
    match self {
      Self::As => Classified::Plain(PlainKind::As),
      Self::At => Classified::Plain(PlainKind::At),
      Self::Bang => Classified::Plain(PlainKind::Bang),
      Self::Colon => Classified::Plain(PlainKind::Colon),
      Self::Comma => Classified::Plain(PlainKind::Comma),
      Self::Dedent => Classified::Plain(PlainKind::Dedent),
      Self::Dot => Classified::Plain(PlainKind::Dot),
      Self::EndFile => Classified::Plain(PlainKind::EndFile),
      Self::EndLine => Classified::Plain(PlainKind::EndLine),
      Self::Ellipsis => Classified::Plain(PlainKind::Ellipsis),
      Self::Float => Classified::Payload(PayloadKind::Float),
      Self::From => Classified::Plain(PlainKind::From),
      Self::Id => Classified::Payload(PayloadKind::Id),
      Self::Import => Classified::Plain(PlainKind::Import),
      Self::Indent => Classified::Plain(PlainKind::Indent),
      Self::Inf => Classified::Payload(PayloadKind::Inf),
      Self::Int => Classified::Payload(PayloadKind::Int),
      Self::Invalid => Classified::Plain(PlainKind::Invalid),
      Self::LAngle => Classified::Plain(PlainKind::LAngle),
      Self::LBrace => Classified::Plain(PlainKind::LBrace),
      Self::LBracket => Classified::Plain(PlainKind::LBracket),
      Self::LParen => Classified::Plain(PlainKind::LParen),
      Self::Operator => Classified::Payload(PayloadKind::Operator),
      Self::Pass => Classified::Plain(PlainKind::Pass),
      Self::RAngle => Classified::Plain(PlainKind::RAngle),
      Self::RBrace => Classified::Plain(PlainKind::RBrace),
      Self::RBracket => Classified::Plain(PlainKind::RBracket),
      Self::RParen => Classified::Plain(PlainKind::RParen),
      Self::String => Classified::Payload(PayloadKind::String),
    }
  }

  /// Returns whether a token of this kind must carry a payload.
  #[must_use]
  pub fn requires_payload(self) -> bool {
    matches!(self.classify(), Classified::Payload(_))
  }

  /// Returns whether this kind ends a line or the whole input.
  #[must_use]
  pub fn is_end_marker(self) -> bool {
    matches!(self, Self::EndLine | Self::EndFile)
  }

  /// Returns whether this kind can stand for a member value or an object reference.
  ///
  /// Every such kind carries a payload. The converse does not hold: [`Self::Operator`] carries a
  /// payload but is not content.
  #[must_use]
  pub fn is_content(self) -> bool {
    matches!(self, Self::Id | Self::String | Self::Int | Self::Float | Self::Inf)
  }

  /// Returns whether this kind is a keyword.
  #[must_use]
  pub fn is_keyword(self) -> bool {
    matches!(self, Self::As | Self::From | Self::Import | Self::Pass)
  }

  /// Returns the keyword spelled `s`, if any.
  #[must_use]
  pub fn keyword(s: &str) -> Option<Self> {
    let ret = match s {
      "as" => Self::As,
      "from" => Self::From,
      "import" => Self::Import,
      "pass" => Self::Pass,
      _ => return None,
    };
    Some(ret)
  }
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// The result of [`TokenKind::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classified {
  /// The kind is all there is.
  Plain(PlainKind),
  /// The kind must come with a payload.
  Payload(PayloadKind),
}

/// A [`TokenKind`] that never carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum PlainKind {
  As,
  At,
  Bang,
  Colon,
  Comma,
  Dedent,
  Dot,
  EndFile,
  EndLine,
  Ellipsis,
  From,
  Import,
  Indent,
  Invalid,
  LAngle,
  LBrace,
  LBracket,
  LParen,
  Pass,
  RAngle,
  RBrace,
  RBracket,
  RParen,
}

impl PlainKind {
  /// All the plain kinds.
  pub const ALL: [PlainKind; 23] = [
    Self::As,
    Self::At,
    Self::Bang,
    Self::Colon,
    Self::Comma,
    Self::Dedent,
    Self::Dot,
    Self::EndFile,
    Self::EndLine,
    Self::Ellipsis,
    Self::From,
    Self::Import,
    Self::Indent,
    Self::Invalid,
    Self::LAngle,
    Self::LBrace,
    Self::LBracket,
    Self::LParen,
    Self::Pass,
    Self::RAngle,
    Self::RBrace,
    Self::RBracket,
    Self::RParen,
  ];
}

impl From<PlainKind> for TokenKind {
  fn from(kind: PlainKind) -> Self {
    match kind {
      PlainKind::As => Self::As,
      PlainKind::At => Self::At,
      PlainKind::Bang => Self::Bang,
      PlainKind::Colon => Self::Colon,
      PlainKind::Comma => Self::Comma,
      PlainKind::Dedent => Self::Dedent,
      PlainKind::Dot => Self::Dot,
      PlainKind::EndFile => Self::EndFile,
      PlainKind::EndLine => Self::EndLine,
      PlainKind::Ellipsis => Self::Ellipsis,
      PlainKind::From => Self::From,
      PlainKind::Import => Self::Import,
      PlainKind::Indent => Self::Indent,
      PlainKind::Invalid => Self::Invalid,
      PlainKind::LAngle => Self::LAngle,
      PlainKind::LBrace => Self::LBrace,
      PlainKind::LBracket => Self::LBracket,
      PlainKind::LParen => Self::LParen,
      PlainKind::Pass => Self::Pass,
      PlainKind::RAngle => Self::RAngle,
      PlainKind::RBrace => Self::RBrace,
      PlainKind::RBracket => Self::RBracket,
      PlainKind::RParen => Self::RParen,
    }
  }
}

impl fmt::Display for PlainKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(TokenKind::from(*self).name())
  }
}

/// A [`TokenKind`] that always carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum PayloadKind {
  Float,
  Id,
  Inf,
  Int,
  Operator,
  String,
}

impl PayloadKind {
  /// All the payload kinds.
  pub const ALL: [PayloadKind; 6] =
    [Self::Float, Self::Id, Self::Inf, Self::Int, Self::Operator, Self::String];
}

impl From<PayloadKind> for TokenKind {
  fn from(kind: PayloadKind) -> Self {
    match kind {
      PayloadKind::Float => Self::Float,
      PayloadKind::Id => Self::Id,
      PayloadKind::Inf => Self::Inf,
      PayloadKind::Int => Self::Int,
      PayloadKind::Operator => Self::Operator,
      PayloadKind::String => Self::String,
    }
  }
}

impl fmt::Display for PayloadKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(TokenKind::from(*self).name())
  }
}

/// A family of matching delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BracketKind {
  /// `(` and `)`
  Paren,
  /// `<` and `>`
  Angle,
  /// `[` and `]`
  Bracket,
  /// `{` and `}`
  Brace,
}

impl BracketKind {
  /// All the bracket kinds.
  pub const ALL: [BracketKind; 4] = [Self::Paren, Self::Angle, Self::Bracket, Self::Brace];

  /// Returns the kind of the opening token.
  #[must_use]
  pub fn open(self) -> PlainKind {
    match self {
      Self::Paren => PlainKind::LParen,
      Self::Angle => PlainKind::LAngle,
      Self::Bracket => PlainKind::LBracket,
      Self::Brace => PlainKind::LBrace,
    }
  }

  /// Returns the kind of the closing token.
  #[must_use]
  pub fn close(self) -> PlainKind {
    match self {
      Self::Paren => PlainKind::RParen,
      Self::Angle => PlainKind::RAngle,
      Self::Bracket => PlainKind::RBracket,
      Self::Brace => PlainKind::RBrace,
    }
  }

  /// Returns the opening and closing chars.
  #[must_use]
  pub fn glyphs(self) -> (char, char) {
    match self {
      Self::Paren => ('(', ')'),
      Self::Angle => ('<', '>'),
      Self::Bracket => ('[', ']'),
      Self::Brace => ('{', '}'),
    }
  }

  /// Returns the family `kind` opens, if it opens one.
  #[must_use]
  pub fn opened_by(kind: TokenKind) -> Option<Self> {
    let ret = match kind {
      TokenKind::LParen => Self::Paren,
      TokenKind::LAngle => Self::Angle,
      TokenKind::LBracket => Self::Bracket,
      TokenKind::LBrace => Self::Brace,
      _ => return None,
    };
    Some(ret)
  }

  /// Returns the family `kind` closes, if it closes one.
  #[must_use]
  pub fn closed_by(kind: TokenKind) -> Option<Self> {
    let ret = match kind {
      TokenKind::RParen => Self::Paren,
      TokenKind::RAngle => Self::Angle,
      TokenKind::RBracket => Self::Bracket,
      TokenKind::RBrace => Self::Brace,
      _ => return None,
    };
    Some(ret)
  }
}

impl fmt::Display for BracketKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BracketKind::Paren => f.write_str("parenthesis"),
      BracketKind::Angle => f.write_str("angle bracket"),
      BracketKind::Bracket => f.write_str("bracket"),
      BracketKind::Brace => f.write_str("brace"),
    }
  }
}
