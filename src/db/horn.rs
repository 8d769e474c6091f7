//! The Horn view of a knowledge base.
//!
//! A Horn knowledge base holds facts (positive literals) and rules (a conjunction of positive literals implying a positive literal).
//! The view is derived from a generic knowledge base by validation, and derivation fails on the first sentence which is not a fact or a rule.
//!
//! As the parser nests chains of connectives to the right, `a&b=>c` is read as `a & (b => c)`.
//! So, a rule is read from a chain of conjunctions which ends in an implication, and the conjuncts before the implication join the premise of the implication as the body of the rule.
//! A bracketed premise, as in `(a&b)=>c`, gives the same rule.
//!
//! ```rust
//! # use iengine::db::{generic::KnowledgeBase, horn::HornKnowledgeBase};
//! let kb = KnowledgeBase::from_string("a&b=>c; (c&d)=>e; a; b;").unwrap();
//! let horn = HornKnowledgeBase::from_generic(&kb).unwrap();
//!
//! assert_eq!(horn.facts().len(), 2);
//! assert_eq!(horn.rules()[0].to_string(), "a & b => c");
//! assert_eq!(horn.rules()[1].to_string(), "c & d => e");
//!
//! let not_horn = KnowledgeBase::from_string("a||b=>c;").unwrap();
//! assert!(HornKnowledgeBase::from_generic(&not_horn).is_err());
//! ```

use crate::{
    db::generic::{KnowledgeBase, Query},
    misc::log::targets::{self},
    structures::{
        literal::Literal,
        sentence::{Atom, Connective, Sentence},
    },
    types::err::{self},
};

/// A rule with a body of positive literals and a positive literal as head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HornClause {
    body: Vec<Literal>,
    head: Literal,
}

impl HornClause {
    /// The body, in source order.
    pub fn body(&self) -> &[Literal] {
        &self.body
    }

    pub fn head(&self) -> &Literal {
        &self.head
    }
}

impl std::fmt::Display for HornClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self
            .body
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        write!(f, "{} => {}", body.join(" & "), self.head)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HornKnowledgeBase {
    facts: Vec<Literal>,
    rules: Vec<HornClause>,
}

impl HornKnowledgeBase {
    /// The Horn view of a generic knowledge base, preserving the order of facts and of rules.
    pub fn from_generic(kb: &KnowledgeBase) -> Result<Self, err::HornError> {
        let mut horn = HornKnowledgeBase::default();

        for sentence in kb.sentences() {
            match sentence {
                Sentence::Atomic(Atom::Literal(literal)) if !literal.negated() => {
                    horn.facts.push(literal.clone());
                }

                Sentence::Atomic(Atom::Literal(_)) => {
                    return Err(err::HornError::NegatedFact(sentence.to_string()));
                }

                Sentence::Atomic(Atom::Constant(_)) => {
                    return Err(err::HornError::ConstantFact(sentence.to_string()));
                }

                Sentence::Negation(_) => {
                    return Err(err::HornError::NotImplication(sentence.to_string()));
                }

                Sentence::Binary { .. } => horn.rules.push(read_rule(sentence)?),
            }
        }

        log::debug!(target: targets::HORN, "{} facts and {} rules", horn.facts.len(), horn.rules.len());
        Ok(horn)
    }

    /// The facts, in source order.
    pub fn facts(&self) -> &[Literal] {
        &self.facts
    }

    /// The rules, in source order.
    pub fn rules(&self) -> &[HornClause] {
        &self.rules
    }

    pub fn is_fact(&self, literal: &Literal) -> bool {
        self.facts.contains(literal)
    }
}

impl std::fmt::Display for HornKnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let facts = self
            .facts
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        writeln!(f, "Facts:")?;
        writeln!(f, "{}", facts.join(", "))?;
        writeln!(f, "Rules:")?;
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Reads a rule from a chain of conjunctions ending in an implication.
fn read_rule(sentence: &Sentence) -> Result<HornClause, err::HornError> {
    let mut body = Vec::default();
    let mut current = sentence;

    loop {
        match current {
            Sentence::Binary {
                connective: Connective::Conjunction,
                lhs,
                rhs,
            } => {
                read_body(lhs, sentence, &mut body)?;
                current = rhs;
            }

            Sentence::Binary {
                connective: Connective::Implication,
                lhs,
                rhs,
            } => {
                read_body(lhs, sentence, &mut body)?;

                let head = match positive_literal(rhs) {
                    Some(literal) => literal.clone(),
                    None => return Err(err::HornError::NonAtomicHead(sentence.to_string())),
                };

                return Ok(HornClause { body, head });
            }

            _ => return Err(err::HornError::NotImplication(sentence.to_string())),
        }
    }
}

/// Extends the body with the literals of a conjunction of positive literals, left to right.
fn read_body(
    premise: &Sentence,
    rule: &Sentence,
    body: &mut Vec<Literal>,
) -> Result<(), err::HornError> {
    match premise {
        Sentence::Binary {
            connective: Connective::Conjunction,
            lhs,
            rhs,
        } => {
            read_body(lhs, rule, body)?;
            read_body(rhs, rule, body)
        }

        _ => match positive_literal(premise) {
            Some(literal) => {
                body.push(literal.clone());
                Ok(())
            }
            None => Err(err::HornError::NonPositiveBody(rule.to_string())),
        },
    }
}

fn positive_literal(sentence: &Sentence) -> Option<&Literal> {
    sentence.as_literal().filter(|literal| !literal.negated())
}

/// A query of a single positive literal, as required by the chaining procedures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HornQuery {
    literal: Literal,
}

impl HornQuery {
    pub fn literal(&self) -> &Literal {
        &self.literal
    }
}

impl TryFrom<&Query> for HornQuery {
    type Error = err::HornError;

    fn try_from(query: &Query) -> Result<Self, Self::Error> {
        match positive_literal(query.sentence()) {
            Some(literal) => Ok(HornQuery {
                literal: literal.clone(),
            }),
            None => Err(err::HornError::Query(query.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horn(string: &str) -> Result<HornKnowledgeBase, err::HornError> {
        HornKnowledgeBase::from_generic(&KnowledgeBase::from_string(string).unwrap())
    }

    #[test]
    fn rule_chains() {
        let kb = horn("a&b&c=>d; (a&b)&c=>d; a=>b").unwrap();
        assert_eq!(kb.rules()[0].body().len(), 3);
        assert_eq!(kb.rules()[0], kb.rules()[1]);
        assert_eq!(kb.rules()[2].to_string(), "a => b");
    }

    #[test]
    fn errors_name_the_sentence() {
        assert_eq!(horn("~a"), Err(err::HornError::NegatedFact("~a".to_owned())));
        assert_eq!(
            horn("a&b"),
            Err(err::HornError::NotImplication("(a & b)".to_owned()))
        );
        assert_eq!(
            horn("a=>b||c"),
            Err(err::HornError::NonAtomicHead("(a => (b || c))".to_owned()))
        );
        assert_eq!(
            horn("a&~b=>c"),
            Err(err::HornError::NonPositiveBody("(a & (~b => c))".to_owned()))
        );
        assert_eq!(horn("True"), Err(err::HornError::ConstantFact("True".to_owned())));
        assert_eq!(horn("a; False"), Err(err::HornError::ConstantFact("False".to_owned())));
        assert!(matches!(horn("a<=>b"), Err(err::HornError::NotImplication(_))));
        assert!(matches!(horn("~(a=>b)"), Err(err::HornError::NotImplication(_))));
    }

    #[test]
    fn query_must_be_positive() {
        assert!(HornQuery::try_from(&Query::from_string("a").unwrap()).is_ok());
        assert!(HornQuery::try_from(&Query::from_string("~a").unwrap()).is_err());
        assert!(HornQuery::try_from(&Query::from_string("a&b").unwrap()).is_err());
    }
}
