/*!
Reports of a solve.

Each procedure returns a report specific to the procedure, and a [Report] wraps each of these.

The [Display](std::fmt::Display) of a report is a single line, beginning `YES` if the query was found and `NO` otherwise.
Details, such as the truth table of truth table checking or the residual clauses of DPLL, are rendered through [Report::details].
*/

use std::collections::BTreeSet;

use crate::{
    config::Convention,
    procedures::dpll::Outcome,
    structures::{
        clause::Clause,
        literal::Literal,
        model::{value_string, Model},
    },
};

/// The least width of a column of a truth table, as `False` with a space.
pub const TABLE_CELL_WIDTH: usize = 6;

fn verdict(found: bool) -> &'static str {
    match found {
        true => "YES",
        false => "NO",
    }
}

/// The report of forward or backward chaining.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainingReport {
    pub found: bool,

    /// Literals shown to be entailed during the search, in alphabetical order.
    pub entailed: BTreeSet<Literal>,
}

impl ChainingReport {
    pub fn new(found: bool, entailed: BTreeSet<Literal>) -> Self {
        ChainingReport { found, entailed }
    }
}

impl std::fmt::Display for ChainingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entailed = self
            .entailed
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();

        match entailed.is_empty() {
            true => write!(f, "{}", verdict(self.found)),
            false => write!(f, "{}: {}", verdict(self.found), entailed.join(", ")),
        }
    }
}

/// The report of truth table checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTableReport {
    pub found: bool,

    /// The symbols of the models, in alphabetical order.
    pub symbols: Vec<String>,

    /// Every valid model, in order.
    pub models: Vec<Model>,

    /// The count of models of the knowledge base, whether or not the query holds.
    pub kb_model_count: usize,
}

impl TruthTableReport {
    pub fn new(symbols: Vec<String>, mut models: Vec<Model>, kb_model_count: usize) -> Self {
        models.sort();
        TruthTableReport {
            found: !models.is_empty(),
            symbols,
            models,
            kb_model_count,
        }
    }

    /// Whether the knowledge base has some model, and the query holds on every model of the knowledge base.
    ///
    /// Note, a knowledge base without models is not taken to entail anything, in keeping with `found`.
    pub fn entails(&self) -> bool {
        self.found && self.models.len() == self.kb_model_count
    }

    /// The valid models as a table, with a column for each symbol and a row for each model.
    pub fn table(&self) -> String {
        if self.models.is_empty() {
            return "There were no suitable models found to print the table".to_owned();
        }

        let width = self
            .symbols
            .iter()
            .map(|symbol| symbol.len())
            .max()
            .unwrap_or_default()
            .max(TABLE_CELL_WIDTH);

        let mut table = String::default();
        for symbol in &self.symbols {
            table.push_str(&format!("{symbol:<width$}| "));
        }

        for model in &self.models {
            table.push('\n');
            for symbol in &self.symbols {
                let value = value_string(model.assigned(symbol));
                table.push_str(&format!("{value:<width$}| "));
            }
        }

        table
    }
}

impl std::fmt::Display for TruthTableReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", verdict(self.found), self.models.len())
    }
}

/// The report of DPLL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpllReport {
    /// Whether the query was found, under the convention.
    pub found: bool,

    /// Whether the clauses searched were satisfiable.
    pub satisfiable: bool,

    pub convention: Convention,

    /// The clauses remaining after the root simplification, on which the first choice was made.
    pub residual: Vec<Clause>,

    /// The (possibly partial) model found, if satisfiable.
    pub model: Option<Model>,
}

impl DpllReport {
    pub fn new(found: bool, convention: Convention, outcome: Outcome) -> Self {
        DpllReport {
            found,
            satisfiable: outcome.satisfiable,
            convention,
            residual: outcome.residual,
            model: outcome.model,
        }
    }

    /// The residual clauses, one per line.
    pub fn residual_string(&self) -> String {
        self.residual
            .iter()
            .map(|clause| clause.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for DpllReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", verdict(self.found))
    }
}

/// The report of a solve, by procedure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    TruthTable(TruthTableReport),
    Chaining(ChainingReport),
    Dpll(DpllReport),
}

impl Report {
    /// Whether the query was found.
    pub fn found(&self) -> bool {
        match self {
            Self::TruthTable(report) => report.found,
            Self::Chaining(report) => report.found,
            Self::Dpll(report) => report.found,
        }
    }

    /// Details of the solve, beyond the verdict.
    pub fn details(&self) -> String {
        match self {
            Self::TruthTable(report) => format!(
                "{}\n{} of {} knowledge base models are valid",
                report.table(),
                report.models.len(),
                report.kb_model_count
            ),

            Self::Chaining(report) => format!("{} literals entailed", report.entailed.len()),

            Self::Dpll(report) => {
                let mut details = format!(
                    "Convention: {}\nSatisfiable: {}\nResidual clauses:\n{}",
                    report.convention,
                    report.satisfiable,
                    report.residual_string()
                );
                if let Some(model) = &report.model {
                    details.push_str(&format!("\nModel: {model}"));
                }
                details
            }
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TruthTable(report) => write!(f, "{report}"),
            Self::Chaining(report) => write!(f, "{report}"),
            Self::Dpll(report) => write!(f, "{report}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout() {
        let models = vec![
            Model::from_values([("a".to_owned(), true), ("b".to_owned(), false)]),
            Model::from_values([("a".to_owned(), false), ("b".to_owned(), true)]),
        ];
        let report = TruthTableReport::new(vec!["a".to_owned(), "b".to_owned()], models, 3);

        assert_eq!(report.to_string(), "YES: 2");
        assert!(!report.entails());
        assert_eq!(
            report.table(),
            "a     | b     | \nFalse | True  | \nTrue  | False | "
        );
    }

    #[test]
    fn empty_chaining() {
        let report = ChainingReport::new(false, BTreeSet::default());
        assert_eq!(report.to_string(), "NO");
    }
}
