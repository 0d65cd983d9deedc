use crate::interpreter::operator::BinaryOperator;

/// Finds the arithmetic part of a piece of free text, such as a question typed by a user.
///
/// The longest run of digits, operators, brackets, decimal separators and whitespace
/// that contains at least one digit is returned, with surrounding whitespace and
/// trailing punctuation removed.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::extractor::extract_expression;
///
/// assert_eq!(extract_expression("what is 2 + 3 * 4?"), Some("2 + 3 * 4"));
/// assert_eq!(extract_expression("hello there"), None);
/// ```
pub fn extract_expression(text: &str) -> Option<&str> {
    let mut longest: Option<&str> = None;
    let mut run_start: Option<usize> = None;

    let end_of_text = std::iter::once((text.len(), '\0'));
    for (index, character) in text.char_indices().chain(end_of_text) {
        if is_expression_character(character) {
            run_start.get_or_insert(index);
            continue;
        }
        if let Some(start) = run_start.take() {
            let candidate = trim_run(&text[start..index]);
            let has_digit = candidate.contains(|c: char| c.is_ascii_digit());
            if has_digit && longest.map_or(true, |found| candidate.len() > found.len()) {
                longest = Some(candidate);
            }
        }
    }

    longest
}

fn is_expression_character(character: char) -> bool {
    character.is_ascii_digit()
        || character.is_whitespace()
        || matches!(character, '.' | ',' | '(' | ')' | '[' | ']' | '{' | '}')
        || BinaryOperator::from_symbol(character).is_some()
}

fn trim_run(run: &str) -> &str {
    run.trim()
        .trim_end_matches(|c: char| c == '.' || c == ',')
        .trim_end()
}
