use chumsky::prelude::*;

/// `-?[0-9]+`, kept verbatim so range checks can happen later.
pub fn signed_digits() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    just('-')
        .or_not()
        .chain::<char, _, _>(text::digits(10))
        .collect::<String>()
}

/// Exactly one of the characters in `symbols`.
pub fn symbol(symbols: &'static str) -> impl Parser<char, String, Error = Simple<char>> + Clone {
    one_of(symbols).map(String::from)
}
