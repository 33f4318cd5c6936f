
//! Hand-written recursive descent parser for numeric literals.

use super::{Literal, DigitSequence, IntegerLiteral, PointLiteral, FractionLiteral, FractionTerm};
use super::error::{LiteralParseError, Expected};
use crate::parsing::tokenizer::TokenizerState;
use crate::util::Sign;
use crate::util::radix::Radix;

use num::{BigInt, BigUint, Num, Zero};
use tracing::trace;

/// Parses a complete literal. The whole input must be consumed;
/// whitespace is not permitted anywhere.
pub fn parse_literal(input: &str) -> Result<Literal, LiteralParseError> {
  if input.is_empty() {
    return Err(LiteralParseError::EmptyInput);
  }
  let mut state = TokenizerState::new(input);
  let numerator = parse_term(&mut state, true)?;
  let literal = if state.read_literal("/").is_some() {
    let denominator = parse_term(&mut state, false)?;
    Literal::Fraction(FractionLiteral { numerator, denominator })
  } else {
    Literal::from(numerator)
  };
  if let Some(found) = state.peek() {
    return Err(LiteralParseError::UnexpectedChar {
      expected: Expected::EndOfInput,
      found,
      offset: state.current_pos(),
    });
  }
  trace!(input, kind = literal.kind(), "Parsed literal");
  Ok(literal)
}

/// An integer or point number. The sign is only read if `signed` is
/// true.
fn parse_term(state: &mut TokenizerState, signed: bool) -> Result<FractionTerm, LiteralParseError> {
  let sign = if signed { parse_sign(state) } else { Sign::Positive };
  let radix = parse_prefix(state);
  let integer_part = parse_digits(state, radix)?;

  if state.read_literal(".").is_none() {
    let exponent = parse_exponent(state, radix)?;
    return Ok(FractionTerm::Integer(IntegerLiteral {
      radix,
      sign,
      magnitude: integer_part.magnitude,
      exponent,
    }));
  }

  let fractional_part = if state.peek().is_some_and(|ch| radix.is_digit(ch)) {
    Some(parse_digits(state, radix)?)
  } else {
    None
  };
  let cyclic_part = if state.read_literal("(").is_some() {
    let cyclic_part = parse_digits(state, radix)?;
    expect_closing_paren(state)?;
    Some(cyclic_part)
  } else {
    None
  };
  let exponent = parse_exponent(state, radix)?;
  Ok(FractionTerm::Point(PointLiteral {
    radix,
    sign,
    integer_part,
    fractional_part,
    cyclic_part,
    exponent,
  }))
}

fn parse_sign(state: &mut TokenizerState) -> Sign {
  state.read_char_if(|ch| Sign::from_char(ch).is_some())
    .and_then(Sign::from_char)
    .unwrap_or_default()
}

fn parse_prefix(state: &mut TokenizerState) -> Radix {
  for radix in Radix::PREFIXED {
    if let Some(prefix) = radix.prefix() {
      if state.read_literal(prefix).is_some() {
        return radix;
      }
    }
  }
  Radix::Decimal
}

/// A non-empty run of digits in `radix`.
///
/// Letters and numerals glued onto the run which do not belong to the
/// radix are reported together as [`LiteralParseError::InvalidDigits`],
/// so `0b102` fails on `2` rather than on trailing input. In decimal,
/// `e` and `E` are left alone to start an exponent.
fn parse_digits(state: &mut TokenizerState, radix: Radix) -> Result<DigitSequence, LiteralParseError> {
  let start = state.current_pos();
  let Some(digits) = state.read_regex(radix.digit_run_regex()) else {
    return Err(match state.peek() {
      None => LiteralParseError::UnexpectedEof { expected: Expected::Digit(radix), offset: start },
      Some(ch) if ch.is_ascii_alphanumeric() => invalid_digits(state, radix),
      Some(found) => LiteralParseError::UnexpectedChar { expected: Expected::Digit(radix), found, offset: start },
    });
  };
  if state.peek().is_some_and(|ch| is_stray_digit(ch, radix)) {
    return Err(invalid_digits(state, radix));
  }
  let magnitude = BigUint::from_str_radix(digits.as_str(), u32::from(radix))
    .map_err(|_| LiteralParseError::InvalidDigits { radix, span: digits.span() })?;
  Ok(DigitSequence { radix, magnitude, length: digits.as_str().len() })
}

fn is_stray_digit(ch: char, radix: Radix) -> bool {
  ch.is_ascii_alphanumeric() && !(radix.allows_exponent() && matches!(ch, 'e' | 'E'))
}

/// Consumes the run of alphanumerics at the cursor and reports it.
fn invalid_digits(state: &mut TokenizerState, radix: Radix) -> LiteralParseError {
  let run = state.read_while(|ch| ch.is_ascii_alphanumeric());
  LiteralParseError::InvalidDigits { radix, span: run.span() }
}

fn expect_closing_paren(state: &mut TokenizerState) -> Result<(), LiteralParseError> {
  if state.read_literal(")").is_some() {
    return Ok(());
  }
  let offset = state.current_pos();
  Err(match state.peek() {
    None => LiteralParseError::UnexpectedEof { expected: Expected::ClosingParen, offset },
    Some(found) => LiteralParseError::UnexpectedChar { expected: Expected::ClosingParen, found, offset },
  })
}

/// An optional decimal exponent. Zero when absent or when the radix
/// has no exponent syntax.
fn parse_exponent(state: &mut TokenizerState, radix: Radix) -> Result<BigInt, LiteralParseError> {
  if !radix.allows_exponent() || state.read_char_if(|ch| matches!(ch, 'e' | 'E')).is_none() {
    return Ok(BigInt::zero());
  }
  let sign = parse_sign(state);
  let digits = parse_digits(state, Radix::Decimal)?;
  Ok(sign.apply(BigInt::from(digits.magnitude)))
}
