use iengine::{
    config::Convention,
    db::{
        cnf::CnfKnowledgeBase,
        generic::{KnowledgeBase, Query},
        horn::{HornKnowledgeBase, HornQuery},
    },
    procedures::{
        backward::backward_chain,
        dpll::{dpll_query, search},
        forward::forward_chain,
        truth_table::truth_table,
    },
    structures::{clause::Clause, literal::Literal, model::Model},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

const SYMBOLS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn random_clause(rng: &mut StdRng, symbol_count: usize) -> Clause {
    let size = rng.random_range(1..=3);
    Clause::new((0..size).map(|_| {
        let name = SYMBOLS[rng.random_range(0..symbol_count)];
        match Literal::new(name, rng.random_bool(0.5)) {
            Ok(literal) => literal,
            Err(e) => panic!("{e:?}"),
        }
    }))
}

fn brute_force_satisfiable(clauses: &[Clause], symbol_count: usize) -> bool {
    (0..(1_usize << symbol_count)).any(|bits| {
        let model = Model::from_values(
            SYMBOLS[..symbol_count]
                .iter()
                .enumerate()
                .map(|(index, symbol)| (symbol.to_string(), bits & (1 << index) != 0)),
        );
        clauses.iter().all(|clause| clause.evaluate(&model).unwrap())
    })
}

mod dpll {
    use super::*;

    #[test]
    fn against_brute_force() {
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..500 {
            let symbol_count = rng.random_range(1..=SYMBOLS.len());
            let clause_count = rng.random_range(1..=12);
            let clauses = (0..clause_count)
                .map(|_| random_clause(&mut rng, symbol_count))
                .collect::<Vec<_>>();

            let outcome = search(clauses.clone(), SYMBOLS[..symbol_count].iter().copied());
            assert_eq!(
                outcome.satisfiable,
                brute_force_satisfiable(&clauses, symbol_count),
                "{clauses:?}"
            );

            if let Some(model) = outcome.model {
                let mut complete = model.clone();
                for symbol in &SYMBOLS[..symbol_count] {
                    if complete.assigned(symbol).is_none() {
                        complete.set(symbol, false);
                    }
                }
                assert!(clauses.iter().all(|clause| clause.evaluate(&complete).unwrap()));
            }
        }
    }

    #[test]
    fn refutation_against_truth_table() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..200 {
            let kb_string = (0..rng.random_range(1..=4))
                .map(|_| {
                    random_clause(&mut rng, 4)
                        .literals()
                        .map(|literal| literal.to_string())
                        .collect::<Vec<_>>()
                        .join("||")
                })
                .collect::<Vec<_>>()
                .join(";");
            let query_string = random_clause(&mut rng, 4)
                .literals()
                .map(|literal| literal.to_string())
                .collect::<Vec<_>>()
                .join("&");

            let kb = KnowledgeBase::from_string(&kb_string).unwrap();
            let query = Query::from_string(&query_string).unwrap();

            let table = truth_table(&kb, &query).unwrap();
            let every_kb_model = table.models.len() == table.kb_model_count;

            let cnf = CnfKnowledgeBase::from_generic(&kb);
            let report = dpll_query(&cnf, &query, Convention::Refutation);
            assert_eq!(report.found, every_kb_model, "{kb_string} ? {query_string}");

            let report = dpll_query(&cnf, &query, Convention::Consistency);
            assert_eq!(report.found, table.found, "{kb_string} ? {query_string}");
        }
    }
}

mod chaining {
    use super::*;

    /// A random Horn knowledge base, as a string.
    fn random_horn(rng: &mut StdRng) -> String {
        let mut sentences = Vec::default();

        for _ in 0..rng.random_range(0..=3) {
            sentences.push(SYMBOLS[rng.random_range(0..SYMBOLS.len())].to_owned());
        }

        for _ in 0..rng.random_range(1..=8) {
            let body = (0..rng.random_range(1..=3))
                .map(|_| SYMBOLS[rng.random_range(0..SYMBOLS.len())])
                .collect::<Vec<_>>();
            let head = SYMBOLS[rng.random_range(0..SYMBOLS.len())];
            // Bracketed, so the premise is read as a conjunction by every algorithm.
            sentences.push(format!("({})=>{head}", body.join("&")));
        }

        sentences.join(";")
    }

    #[test]
    fn forward_and_backward_agree() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..500 {
            let kb_string = random_horn(&mut rng);
            let kb = KnowledgeBase::from_string(&kb_string).unwrap();
            let horn = HornKnowledgeBase::from_generic(&kb).unwrap();

            let cnf = CnfKnowledgeBase::from_generic(&kb);

            for symbol in SYMBOLS {
                let query = Query::from_string(symbol).unwrap();
                let horn_query = HornQuery::try_from(&query).unwrap();

                let forward = forward_chain(&horn, &horn_query, true);
                let backward = backward_chain(&horn, &horn_query);
                assert_eq!(forward.found, backward.found, "{kb_string} ? {symbol}");

                let literal = horn_query.literal();
                assert_eq!(forward.found, forward.entailed.contains(literal));
                assert_eq!(backward.found, backward.entailed.contains(literal));

                let refutation = dpll_query(&cnf, &query, Convention::Refutation);
                assert_eq!(forward.found, refutation.found, "{kb_string} ? {symbol}");
            }
        }
    }
}
