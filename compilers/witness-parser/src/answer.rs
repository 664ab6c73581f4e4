use thiserror::Error;
use tracing::{debug, trace};

use crate::search::SearchResult;

pub const ANSWER_HEADER: &str = "Answer:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed answer header: {line:?}")]
    MalformedIndex { line: String },
    #[error("answer {index} has no atom line")]
    MissingAtomLine { index: u32 },
}

pub fn is_answer_header(line: &str) -> bool {
    line.starts_with(ANSWER_HEADER)
}

/// Reads the `<n>` of an `Answer: <n>` header.
pub fn parse_answer_index(line: &str) -> Result<u32, ParseError> {
    let malformed = || ParseError::MalformedIndex { line: line.to_string() };

    let rest = line.strip_prefix(ANSWER_HEADER).ok_or_else(malformed)?;
    rest.trim().parse::<u32>().map_err(|_| malformed())
}

/// Builds a result from a header line and the atom line right after it.
pub fn parse_search_result(header: &str, atom_line: &str) -> Result<SearchResult, ParseError> {
    let index = parse_answer_index(header)?;
    Ok(SearchResult::from_line(index, atom_line))
}

/// Collects every answer block from a full solver transcript.
/// Lines outside answer blocks (`Solving...`, `SATISFIABLE`, stats) are ignored.
pub fn parse_solver_output(text: &str) -> Result<Vec<SearchResult>, ParseError> {
    let mut results = Vec::new();
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        if !is_answer_header(line) {
            trace!(line, "ignoring solver chatter");
            continue;
        }

        let index = parse_answer_index(line)?;
        let atom_line = lines.next().ok_or(ParseError::MissingAtomLine { index })?;
        let sr = SearchResult::from_line(index, atom_line);

        debug!(answer = index, atoms = sr.atom_count(), "parsed answer");
        results.push(sr);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use witness_protocol::Edge;

    const TRANSCRIPT: &str = "\
clingo version 5.4.0
Reading from path.lp
Solving...
Answer: 1
edge(0,1) edge(1,4) edge(4,7) edge(7,8)
Answer: 2
edge(0,3) edge(3,4) edge(4,5) edge(5,8)
SATISFIABLE

Models       : 2
";

    #[test]
    fn test_answer_index() {
        assert_eq!(parse_answer_index("Answer: 12"), Ok(12));
        assert_eq!(parse_answer_index("Answer: 3\n"), Ok(3));
        assert!(matches!(
            parse_answer_index("Answer: two"),
            Err(ParseError::MalformedIndex { .. })
        ));
        assert!(matches!(parse_answer_index("Answer:"), Err(ParseError::MalformedIndex { .. })));
        assert!(matches!(parse_answer_index("Models: 1"), Err(ParseError::MalformedIndex { .. })));
    }

    #[test]
    fn test_error_names_line() {
        let err = parse_search_result("Answer: x", "edge(0,1)").unwrap_err();
        assert_eq!(err.to_string(), "malformed answer header: \"Answer: x\"");
    }

    #[test]
    fn test_transcript_scan() {
        let results = parse_solver_output(TRANSCRIPT).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].index(), 1);
        assert_eq!(results[1].index(), 2);
        assert_eq!(results[1].edges()[0], Edge::new(0, 3));
    }

    #[test]
    fn test_header_followed_by_empty_line() {
        let results = parse_solver_output("Answer: 1\n\nSATISFIABLE\n").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].atom_count(), 0);
    }

    #[test]
    fn test_trailing_header_is_an_error() {
        assert_eq!(
            parse_solver_output("Answer: 1\nedge(0,1)\nAnswer: 2"),
            Err(ParseError::MissingAtomLine { index: 2 })
        );
    }
}
