
use super::source::{SourceOffset, Span};

use regex::Regex;

/// A cursor over literal text. Every read either consumes input and
/// reports what it matched, or leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

/// A consumed slice of the input, along with where it came from.
#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  span: Span,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0),
    }
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Consumes `amount` bytes, clamped to the end of the input.
  fn advance(&mut self, amount: usize) -> TokenizerMatch<'a> {
    let amount = amount.min(self.input.len());
    let start = self.position;
    let (prefix, suffix) = self.input.split_at(amount);
    self.position = start + amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      span: Span::new(start, self.position),
    }
  }

  pub fn read_literal(&mut self, literal: &str) -> Option<TokenizerMatch<'a>> {
    self.input.starts_with(literal).then(|| {
      self.advance(literal.len())
    })
  }

  /// Consumes a single character if it satisfies `predicate`.
  pub fn read_char_if<F>(&mut self, predicate: F) -> Option<char>
  where F: FnOnce(char) -> bool {
    let ch = self.peek().filter(|ch| predicate(*ch))?;
    self.advance(ch.len_utf8());
    Some(ch)
  }

  /// Consumes the longest prefix whose characters all satisfy
  /// `predicate`. The match may be empty.
  pub fn read_while<F>(&mut self, mut predicate: F) -> TokenizerMatch<'a>
  where F: FnMut(char) -> bool {
    let len = self.input.find(|ch| !predicate(ch)).unwrap_or(self.input.len());
    self.advance(len)
  }

  /// If the input at the cursor matches `regex`, consumes and returns
  /// the match.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");
    Some(self.advance(m.len()))
  }
}

impl<'a> TokenizerMatch<'a> {
  pub fn as_str(&self) -> &'a str {
    self.matched_str
  }

  pub fn span(&self) -> Span {
    self.span
  }
}
