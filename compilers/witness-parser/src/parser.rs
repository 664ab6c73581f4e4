use nom::{
    bytes::complete::{take_till1, take_while},
    IResult,
};
use crate::token::{Atom, Span};

// Must agree with `atom_token` on what counts as whitespace.
fn separator(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn atom_token(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// Splits an answer line into whitespace-delimited tokens with their byte spans.
/// Token shape is not checked here; anything non-blank is a token.
pub fn parse_with_spans(original_input: &str) -> Vec<(Span, &str)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match separator(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Take everything up to the next whitespace
        match atom_token(input) {
            Ok((next_input, token)) => {
                let start = original_input.len() - input.len();
                result.push((Span::new(start, start + token.len()), token));
                input = next_input;
            }
            Err(_) => {
                // Skip one char to recover
                match input.chars().next() {
                    Some(c) => input = &input[c.len_utf8()..],
                    None => break,
                }
            }
        }
    }

    result
}

/// Owned atoms of one answer line, in order, duplicates preserved.
pub fn parse_atoms(line: &str) -> Vec<Atom> {
    parse_with_spans(line)
        .into_iter()
        .map(|(_, text)| Atom::new(text))
        .collect()
}
