use iengine::{
    builder::parse::{parse_sentence, strip_whitespace, SymbolTable},
    structures::{clause::filter_clauses, model::Model, sentence::Sentence},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

const SYMBOLS: [&str; 4] = ["a", "b", "c", "d"];
const CONNECTIVES: [&str; 4] = ["&", "||", "=>", "<=>"];

/// A random sentence, fully bracketed.
fn random_sentence(rng: &mut StdRng, depth: usize) -> String {
    if depth == 0 || rng.random_bool(0.25) {
        return match rng.random_range(0..10) {
            0 => "True".to_owned(),
            1 => "False".to_owned(),
            n if n < 5 => format!("~{}", SYMBOLS[rng.random_range(0..SYMBOLS.len())]),
            _ => SYMBOLS[rng.random_range(0..SYMBOLS.len())].to_owned(),
        };
    }

    match rng.random_range(0..5) {
        0 => format!("~({})", random_sentence(rng, depth - 1)),
        _ => format!(
            "({} {} {})",
            random_sentence(rng, depth - 1),
            CONNECTIVES[rng.random_range(0..CONNECTIVES.len())],
            random_sentence(rng, depth - 1)
        ),
    }
}

fn parse(string: &str) -> Sentence {
    parse_sentence(&strip_whitespace(string), &mut SymbolTable::default()).unwrap()
}

/// Every complete model on the symbols.
fn all_models() -> Vec<Model> {
    (0..(1 << SYMBOLS.len()))
        .map(|bits: usize| {
            Model::from_values(
                SYMBOLS
                    .iter()
                    .enumerate()
                    .map(|(index, symbol)| (symbol.to_string(), bits & (1 << index) != 0)),
            )
        })
        .collect()
}

mod cnf {
    use super::*;

    #[test]
    fn equivalence() {
        let mut rng = StdRng::seed_from_u64(0);
        let models = all_models();

        for _ in 0..300 {
            let string = random_sentence(&mut rng, 3);
            let sentence = parse(&string);
            let clauses = sentence.to_cnf_clauses();

            for model in &models {
                let cnf_value = clauses.iter().all(|clause| clause.evaluate(model).unwrap());
                assert_eq!(sentence.evaluate(model).unwrap(), cnf_value, "{string} on {model}");
            }
        }
    }

    #[test]
    fn clauses_are_flat() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            let sentence = parse(&random_sentence(&mut rng, 3));
            for clause in sentence.to_cnf_clauses() {
                let string = clause.to_string();
                assert!(!string.contains('&'), "{string}");
                assert!(!string.contains('('), "{string}");
            }
        }
    }

    #[test]
    fn filter_idempotence() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..100 {
            let clauses = (0..4)
                .flat_map(|_| parse(&random_sentence(&mut rng, 3)).to_cnf_clauses())
                .collect::<Vec<_>>();

            let once = filter_clauses(clauses);
            let twice = filter_clauses(once.clone());
            assert_eq!(once, twice);
            assert!(once.iter().all(|clause| !clause.is_tautology()));
        }
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn canonical_strings() {
        let mut rng = StdRng::seed_from_u64(3);
        let models = all_models();

        for _ in 0..300 {
            let sentence = parse(&random_sentence(&mut rng, 3));
            let reparsed = parse(&sentence.to_string());

            assert_eq!(sentence.to_string(), reparsed.to_string());
            for model in &models {
                assert_eq!(sentence.evaluate(model), reparsed.evaluate(model));
            }
        }
    }

    #[test]
    fn unbracketed_chains() {
        let models = all_models();
        for string in ["a&b=>c", "~a||b&c<=>d", "a=>b=>c", "~~a&~b", "a<=>~(b||c)&d"] {
            let sentence = parse(string);
            let reparsed = parse(&sentence.to_string());
            for model in &models {
                assert_eq!(sentence.evaluate(model), reparsed.evaluate(model), "{string}");
            }
        }
    }
}
