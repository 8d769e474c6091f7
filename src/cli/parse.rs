use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command};

use iengine::{
    config::{Algorithm, Config, Convention},
    types::err::{self},
};

pub fn cli() -> Command {
    Command::new("iengine")
        .about("Determines whether a knowledge base entails a query")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The TELL/ASK file to read."))

        .arg(Arg::new("algorithm")
            .required(true)
            .num_args(1)
            .help(format!("The algorithm to use, one of: {}.", Algorithm::names().join(", "))))

        .arg(Arg::new("debug")
            .short('d')
            .long("debug")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Display details of the solve, such as the truth table or the residual clauses."))

        .arg(Arg::new("convention")
            .long("convention")
            .value_parser(["refutation", "consistency"])
            .required(false)
            .num_args(1)
            .help("How DPLL answers a query.")
            .long_help("How DPLL answers a query.
Default: refutation

refutation: The query is entailed if the knowledge base together with the negation of the query is unsatisfiable.
consistency: The query is found if the knowledge base together with the query is satisfiable."))

        .arg(Arg::new("no_agenda")
            .long("no-agenda")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Report only literals taken from the agenda as entailed by forward chaining."))
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, err::ErrorKind> {
    let mut the_config = Config::default();

    if let Ok(Some(name)) = args.try_get_one::<String>("algorithm") {
        the_config.algorithm.value = name.parse::<Algorithm>()?
    };

    if let Ok(Some(name)) = args.try_get_one::<String>("convention") {
        the_config.convention.value = name.parse::<Convention>()?
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_agenda") {
        the_config.agenda_in_entailed.value = false
    };

    Ok(the_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments() {
        let matches = cli()
            .try_get_matches_from(["iengine", "test.txt", "dpll", "--convention", "consistency", "--no-agenda"])
            .unwrap();
        let config = config_from_args(&matches).unwrap();
        assert_eq!(config.algorithm.value, Algorithm::DPLL);
        assert_eq!(config.convention.value, Convention::Consistency);
        assert!(!config.agenda_in_entailed.value);
    }

    #[test]
    fn conventions_match_the_library() {
        let convention = cli()
            .get_arguments()
            .find(|arg| arg.get_id() == "convention")
            .map(|arg| arg.get_possible_values().iter().map(|v| v.get_name().to_owned()).collect::<Vec<_>>());
        assert_eq!(convention, Some(vec!["refutation".to_owned(), "consistency".to_owned()]));
        for name in Convention::names() {
            assert!(name.parse::<Convention>().is_ok());
        }
    }

    #[test]
    fn unknown_algorithm() {
        let matches = cli().try_get_matches_from(["iengine", "test.txt", "GSAT"]).unwrap();
        assert!(matches!(
            config_from_args(&matches),
            Err(err::ErrorKind::Selection(_))
        ));
    }
}
