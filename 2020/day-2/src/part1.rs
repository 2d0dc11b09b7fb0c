use chumsky::prelude::*;
use miette::*;

#[derive(Debug, Clone)]
struct Policy {
    lo: usize,
    hi: usize,
    letter: char,
    password: String,
}

impl Policy {
    /// Valid when the letter occurs between `lo` and `hi` times (inclusive).
    fn is_valid(&self) -> bool {
        let occurrences = self.password.chars().filter(|&c| c == self.letter).count();
        (self.lo..=self.hi).contains(&occurrences)
    }
}

/// Parses `lo-hi letter: password` lines, e.g. `1-3 a: abcde`.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Policy>, extra::Err<Rich<'a, char>>> {
    let number = || text::int(10).from_str::<usize>().unwrapped();
    let letter = || any().filter(char::is_ascii_lowercase);

    let policy = number()
        .then_ignore(just('-'))
        .then(number())
        .then_ignore(just(' '))
        .then(letter())
        .then_ignore(just(": "))
        .then(letter().repeated().at_least(1).collect::<String>())
        .map(|(((lo, hi), letter), password)| Policy {
            lo,
            hi,
            letter,
            password,
        });

    policy
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let policies = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let valid = policies.iter().filter(|p| p.is_valid()).count();

    Ok(valid.to_string())
}
