pub mod answer;
pub mod grammar;
pub mod parser;
pub mod search;
pub mod token;

pub use answer::{
    is_answer_header, parse_answer_index, parse_search_result, parse_solver_output, ParseError,
};
pub use grammar::{classify_edge, parse_edge, predicate_name, EdgeShape};
pub use parser::{parse_atoms, parse_with_spans};
pub use search::SearchResult;
pub use token::{Atom, Span};
