#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use crossterm::style::Stylize;

use iengine::{context::Context, reports::Report};

mod misc;
mod parse;

use crate::misc::load_tell_ask;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let config = match parse::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let debug = matches!(matches.try_get_one::<bool>("debug"), Ok(Some(true)));

    let mut the_context = Context::from_config(config);

    if let Some(path) = matches.get_one::<PathBuf>("path") {
        if let Err(e) = load_tell_ask(&mut the_context, path) {
            eprintln!("Error loading {}: {e}", path.display());
            std::process::exit(1);
        }
    }

    if debug {
        println!("{}", the_context.kb());
        if let Some(query) = the_context.query() {
            println!("Query:\n{query}\n");
        }
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if debug {
        println!("{}\n", report.details());
    }

    println!("{}", styled(&report));
    std::process::exit(0)
}

/// The report line, with the verdict coloured.
fn styled(report: &Report) -> String {
    let line = report.to_string();
    let verdict = match report.found() {
        true => "YES",
        false => "NO",
    };

    match line.strip_prefix(verdict) {
        Some(rest) => match report.found() {
            true => format!("{}{rest}", verdict.green()),
            false => format!("{}{rest}", verdict.red()),
        },
        None => line,
    }
}
