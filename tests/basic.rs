use iengine::{
    config::{Algorithm, Config, Convention},
    context::Context,
    reports::Report,
};

fn context_with(algorithm: Algorithm, kb: &str, query: &str) -> Context {
    let mut config = Config::default();
    config.algorithm.value = algorithm;
    let mut ctx = Context::from_config(config);
    assert!(ctx.tell(kb).is_ok());
    assert!(ctx.ask(query).is_ok());
    ctx
}

mod scenarios {
    use iengine::{
        procedures::dpll::satisfiable,
        structures::{clause::Clause, literal::Literal},
    };

    use super::*;

    #[test]
    fn backward_chaining() {
        let ctx = context_with(Algorithm::BC, "A;A=>B;", "B");

        let Ok(Report::Chaining(report)) = ctx.solve() else {
            panic!("Expected a chaining report");
        };
        assert!(report.found);
        for symbol in ["A", "B"] {
            assert!(report.entailed.contains(&symbol.parse::<Literal>().unwrap()));
        }
    }

    #[test]
    fn forward_chaining_conjunctive_rule() {
        let ctx = context_with(Algorithm::FC, "A&B=>C;A;B;", "C");

        let Ok(Report::Chaining(report)) = ctx.solve() else {
            panic!("Expected a chaining report");
        };
        assert!(report.found);
        assert_eq!(report.to_string(), "YES: A, B, C");
    }

    #[test]
    fn contradictory_facts() {
        let ctx = context_with(Algorithm::TT, "A;~A;", "B");

        let Ok(Report::TruthTable(report)) = ctx.solve() else {
            panic!("Expected a truth table report");
        };
        assert!(!report.found);
        assert!(report.models.is_empty());
        assert_eq!(report.to_string(), "NO: 0");
    }

    #[test]
    fn disjunctive_kb() {
        let ctx = context_with(Algorithm::TT, "A||B;", "A");

        let Ok(Report::TruthTable(report)) = ctx.solve() else {
            panic!("Expected a truth table report");
        };
        assert_eq!(report.kb_model_count, 3);
        assert!(report.found);
        assert_eq!(report.models.len(), 2);
        assert!(report.models.iter().all(|model| model.assigned("A") == Some(true)));
    }

    #[test]
    fn dpll_unit_propagation() {
        let clause = |literals: &[&str]| Clause::new(literals.iter().map(|l| l.parse::<Literal>().unwrap()));
        let clauses = vec![clause(&["A", "B"]), clause(&["~A", "B"]), clause(&["~B"])];
        assert!(!satisfiable(clauses));
    }
}

mod solves {
    use super::*;

    const HORN_KB: &str = "p2=> p3; p3 => p1; c => e; b&e => f; f&g => h; p1=>d; p1&p3 => c; a; b; p2;";

    #[test]
    fn horn_kb_all_algorithms() {
        for algorithm in Algorithm::ALL {
            let ctx = context_with(algorithm, HORN_KB, "d");
            assert!(ctx.solve().unwrap().found(), "{algorithm}");
        }

        for algorithm in [Algorithm::FC, Algorithm::BC, Algorithm::DPLL] {
            let ctx = context_with(algorithm, HORN_KB, "h");
            assert!(!ctx.solve().unwrap().found(), "{algorithm}");
        }
    }

    #[test]
    fn horn_kb_truth_table() {
        let ctx = context_with(Algorithm::TT, HORN_KB, "d");
        assert_eq!(ctx.solve().unwrap().to_string(), "YES: 3");

        // h holds on some, though not every, model of the knowledge base.
        let ctx = context_with(Algorithm::TT, HORN_KB, "h");
        let Ok(Report::TruthTable(report)) = ctx.solve() else {
            panic!("Expected a truth table report");
        };
        assert!(report.found);
        assert_eq!(report.models.len(), 2);
        assert!(!report.entails());
    }

    #[test]
    fn general_kb() {
        let kb = "(a <=> (c => ~d)) & b & (b => a); c; ~f || g;";

        let ctx = context_with(Algorithm::TT, kb, "~d & (~g => ~f)");
        assert!(ctx.solve().unwrap().found());

        let ctx = context_with(Algorithm::DPLL, kb, "~d & (~g => ~f)");
        assert!(ctx.solve().unwrap().found());

        let ctx = context_with(Algorithm::DPLL, kb, "d");
        assert!(!ctx.solve().unwrap().found());
    }

    #[test]
    fn dpll_consistency() {
        let mut config = Config::default();
        config.algorithm.value = Algorithm::DPLL;
        config.convention.value = Convention::Consistency;

        let mut ctx = Context::from_config(config);
        assert!(ctx.tell("a||b;").is_ok());
        assert!(ctx.ask("a").is_ok());

        let Ok(Report::Dpll(report)) = ctx.solve() else {
            panic!("Expected a DPLL report");
        };
        assert!(report.found);
        assert!(report.satisfiable);
        assert!(report.model.is_some());
    }

    #[test]
    fn unbracketed_rules_nest_right() {
        // `a&b=>c` is `a & (b => c)`, which asserts `a` though the Horn view reads a rule.
        for algorithm in [Algorithm::FC, Algorithm::BC] {
            let ctx = context_with(algorithm, "a&b=>c; b", "a");
            assert!(!ctx.solve().unwrap().found(), "{algorithm}");
        }

        for algorithm in [Algorithm::TT, Algorithm::DPLL] {
            let ctx = context_with(algorithm, "a&b=>c; b", "a");
            assert!(ctx.solve().unwrap().found(), "{algorithm}");

            let ctx = context_with(algorithm, "(a&b)=>c; b", "a");
            let report = ctx.solve().unwrap();
            let entailed = match &report {
                Report::TruthTable(table) => table.entails(),
                _ => report.found(),
            };
            assert!(!entailed, "{algorithm}");
        }
    }

    #[test]
    fn chaining_requires_horn() {
        let ctx = context_with(Algorithm::FC, "a||b; a", "a");
        assert!(ctx.solve().is_err());

        let ctx = context_with(Algorithm::BC, "a; ~b", "a");
        assert!(ctx.solve().is_err());
    }
}
