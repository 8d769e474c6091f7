//! A recursive-descent parser from whitespace-free strings to [sentences](crate::structures::sentence).
//!
//! # Method
//!
//! - A string which is a (possibly negated) symbol, or one of the constants `True`/`False`, is an atomic sentence.
//! - Otherwise, the leftmost operator token of the string is found by a scan of the [token table](TOKENS).
//!   + If the leftmost token is a binary connective, the string is split at that token and both sides are parsed.
//!   + If the leftmost token is an opening bracket, the bracketed text is a single operand, and the string is split at the connective following the matching closing bracket (if any).
//!   + If the leftmost token is a negation, the negation binds the operand which follows it (a bracketed sentence, a further negation or a single literal) and the string is split at the connective following that operand (if any).
//!
//! As the leftmost connective is always taken, chains of binary connectives nest to the right.
//! So, `a&b=>c` is read as `a & (b => c)`, and a bracket is needed for `(a&b)=>c`.
//!
//! # Token order
//!
//! The token `=>` is a suffix of the token `<=>`, and so the first occurrence of `=>` in `a<=>b` is inside the biconditional.
//! The scan consults the token table in order and only replaces a candidate on a strictly smaller index, with the biconditional listed before implication.
//! So, the longer token is preferred whenever the two could be confused.
//!
//! # Symbols
//!
//! Every symbol read is registered in a caller owned [SymbolTable], which holds one canonical (positive) literal per symbol.
//!
//! ```rust
//! # use iengine::builder::parse::{parse_sentence, SymbolTable};
//! let mut symbols = SymbolTable::default();
//! let sentence = parse_sentence("(a&b)=>c", &mut symbols).unwrap();
//!
//! assert_eq!(sentence.to_string(), "((a & b) => c)");
//! assert_eq!(symbols.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
//!
//! assert!(parse_sentence("(a&b", &mut symbols).is_err());
//! ```

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        literal::{is_symbol, Literal, NEGATION},
        sentence::{Connective, Sentence},
    },
    types::err::{self},
};

/// A map from symbol names to the canonical (positive) literal of the symbol.
pub type SymbolTable = BTreeMap<String, Literal>;

/// The operator tokens of the language, other than the closing bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Connective(Connective),
    Negation,
    OpeningBracket,
}

pub const OPENING_BRACKET: char = '(';
pub const CLOSING_BRACKET: char = ')';

/// The ordered token table consulted when scanning for the leftmost operator.
///
/// The biconditional must come before implication, see the [module documentation](self).
pub const TOKENS: [(&str, Token); 6] = [
    ("<=>", Token::Connective(Connective::Biconditional)),
    ("=>", Token::Connective(Connective::Implication)),
    ("&", Token::Connective(Connective::Conjunction)),
    ("||", Token::Connective(Connective::Disjunction)),
    ("~", Token::Negation),
    ("(", Token::OpeningBracket),
];

/// Removes all whitespace from a string.
pub fn strip_whitespace(string: &str) -> String {
    string.chars().filter(|c| !c.is_whitespace()).collect()
}

/// The index and token of the leftmost operator in the string, if any.
///
/// With `connectives_only` negation and brackets are skipped, and only binary connectives are candidates.
pub fn leftmost_token(string: &str, connectives_only: bool) -> Option<(usize, &'static str, Token)> {
    let mut leftmost: Option<(usize, &'static str, Token)> = None;

    for (text, token) in TOKENS {
        if connectives_only && !matches!(token, Token::Connective(_)) {
            continue;
        }
        if let Some(index) = string.find(text) {
            match leftmost {
                Some((best, _, _)) if best <= index => {}
                _ => leftmost = Some((index, text, token)),
            }
        }
    }

    leftmost
}

/// The index of the bracket closing the bracket opened at `open`.
///
/// A depth counter is incremented on each opening bracket and decremented on each closing bracket, and the index at which the counter returns to zero is returned.
pub fn matching_bracket(string: &str, open: usize) -> Result<usize, err::ParseError> {
    let mut depth: usize = 0;

    for (index, character) in string[open..].char_indices() {
        match character {
            OPENING_BRACKET => depth += 1,
            CLOSING_BRACKET => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(open + index);
                }
            }
            _ => {}
        }
    }

    Err(err::ParseError::UnmatchedBracket(open))
}

/// Parses a whitespace-free string to a sentence, registering each symbol read in the given table.
pub fn parse_sentence(string: &str, symbols: &mut SymbolTable) -> Result<Sentence, err::ParseError> {
    log::trace!(target: targets::PARSER, "Parsing {string}");

    if string.is_empty() {
        return Err(err::ParseError::Empty);
    }

    if let Some(atomic) = parse_atomic(string, symbols)? {
        return Ok(atomic);
    }

    let Some((index, text, token)) = leftmost_token(string, false) else {
        return match string.chars().all(|c| c.is_alphanumeric()) {
            true => Err(err::ParseError::Symbol(string.to_owned())),
            false => Err(err::ParseError::NoOperator(string.to_owned())),
        };
    };

    match token {
        Token::Connective(connective) => {
            let (lhs, rhs) = (&string[..index], &string[index + text.len()..]);
            if lhs.is_empty() || rhs.is_empty() {
                return Err(err::ParseError::MissingOperand(string.to_owned()));
            }
            Ok(Sentence::binary(
                connective,
                parse_sentence(lhs, symbols)?,
                parse_sentence(rhs, symbols)?,
            ))
        }

        // In either case the operand must begin the string, as otherwise some text precedes it without an operator.
        Token::OpeningBracket | Token::Negation if index != 0 => {
            Err(err::ParseError::NoOperator(string.to_owned()))
        }

        Token::OpeningBracket => {
            let close = matching_bracket(string, 0)?;

            if close + 1 == string.len() {
                return parse_sentence(&string[1..close], symbols);
            }

            let operand = parse_sentence(&string[1..close], symbols)?;
            split_after_operand(string, operand, close + 1, symbols)
        }

        Token::Negation => {
            let end = operand_end(string, 1)?;

            if end == string.len() {
                return Ok(Sentence::negation(parse_sentence(&string[1..], symbols)?));
            }

            let operand = parse_sentence(&string[..end], symbols)?;
            split_after_operand(string, operand, end, symbols)
        }
    }
}

/// An atomic sentence, if the string is a (possibly negated) symbol or a constant.
fn parse_atomic(string: &str, symbols: &mut SymbolTable) -> Result<Option<Sentence>, err::ParseError> {
    match string {
        "True" => return Ok(Some(Sentence::constant(true))),
        "False" => return Ok(Some(Sentence::constant(false))),
        _ => {}
    }

    let (name, negated) = match string.strip_prefix(NEGATION) {
        Some(name) => (name, true),
        None => (string, false),
    };

    if !is_symbol(name) {
        return Ok(None);
    }

    let canonical = match symbols.get(name) {
        Some(literal) => literal.clone(),
        None => {
            let literal = Literal::positive(name)?;
            symbols.insert(name.to_owned(), literal.clone());
            literal
        }
    };

    match negated {
        true => Ok(Some(Sentence::literal(canonical.negate()))),
        false => Ok(Some(Sentence::literal(canonical))),
    }
}

/// The index one past the end of the operand beginning at `start`.
///
/// An operand is a bracketed sentence, a negated operand, or a literal running up to the next operator.
fn operand_end(string: &str, start: usize) -> Result<usize, err::ParseError> {
    let rest = &string[start..];

    if rest.starts_with(OPENING_BRACKET) {
        return Ok(matching_bracket(string, start)? + 1);
    }

    if rest.starts_with(NEGATION) {
        return operand_end(string, start + NEGATION.len_utf8());
    }

    match leftmost_token(rest, false) {
        Some((index, _, _)) => Ok(start + index),
        None => Ok(string.len()),
    }
}

/// Joins an already parsed operand ending at `end` to the rest of the string by the connective which must immediately follow the operand.
fn split_after_operand(
    string: &str,
    operand: Sentence,
    end: usize,
    symbols: &mut SymbolTable,
) -> Result<Sentence, err::ParseError> {
    let rest = &string[end..];

    match leftmost_token(rest, true) {
        Some((0, text, Token::Connective(connective))) => {
            let rhs = &rest[text.len()..];
            if rhs.is_empty() {
                return Err(err::ParseError::MissingOperand(string.to_owned()));
            }
            Ok(Sentence::binary(
                connective,
                operand,
                parse_sentence(rhs, symbols)?,
            ))
        }

        _ => Err(err::ParseError::NoOperator(rest.to_owned())),
    }
}
