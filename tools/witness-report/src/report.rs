use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use serde::Serialize;
use witness_parser::SearchResult;
use witness_protocol::Violation;
use witness_solver::PathValidator;

/// Summary of one answer, as printed or serialized by the CLI.
#[derive(Debug, Serialize)]
pub struct AnswerReport {
    pub index: u32,
    pub atoms: usize,
    pub distinct_atoms: usize,
    pub predicates: BTreeMap<String, usize>,
    pub malformed_edge_atoms: Vec<String>,
    pub violations: Vec<Violation>,
}

impl AnswerReport {
    pub fn build(result: &SearchResult, validator: &PathValidator<'_>) -> Self {
        Self {
            index: result.index(),
            atoms: result.atom_count(),
            distinct_atoms: result.distinct_predicate_string_count(),
            predicates: result.predicate_name_histogram(),
            malformed_edge_atoms: result
                .malformed_edge_atoms()
                .into_iter()
                .map(|atom| atom.to_string())
                .collect(),
            violations: validator.validate_result(result),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for AnswerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SearchResult {}. Total atoms: {}.", self.index, self.atoms)?;
        writeln!(f, "Distinct predicates: {}.", self.distinct_atoms)?;

        let mut counts = String::new();
        for (i, (name, count)) in self.predicates.iter().enumerate() {
            if i > 0 {
                counts.push_str(", ");
            }
            write!(counts, "{}: {}", name, count)?;
        }
        writeln!(f, "Predicates by count: {{{}}}", counts)?;

        for atom in &self.malformed_edge_atoms {
            writeln!(f, "  skipped malformed edge atom {}", atom)?;
        }

        if self.violations.is_empty() {
            writeln!(f, "  valid")
        } else {
            for violation in &self.violations {
                writeln!(f, "  [{}] {}", violation.check(), violation)?;
            }
            Ok(())
        }
    }
}
