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
    /// Valid when exactly one of the 1-based positions `lo` and `hi`
    /// holds the letter. Position 0 (or one past the end) matches nothing.
    fn is_valid(&self) -> bool {
        let at = |pos: usize| {
            pos.checked_sub(1)
                .and_then(|idx| self.password.chars().nth(idx))
                == Some(self.letter)
        };
        at(self.lo) != at(self.hi)
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

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "1-3 a: abcde
1-3 b: cdefg
2-9 c: ccccccccc";
        assert_eq!("1", process(input)?);
        Ok(())
    }

    #[test]
    fn zero_position_does_not_panic() -> Result<()> {
        // positions are 1-based, so 0 falls off the front of the password;
        // only position 1 matches here, which makes the line valid
        assert_eq!("1", process("0-1 a: abcde")?);
        Ok(())
    }

    #[rstest]
    #[case(1, 3, 'a', "abcde", true)] // position 1 holds 'a', position 3 does not
    #[case(1, 3, 'b', "cdefg", false)] // neither position holds 'b'
    #[case(2, 9, 'c', "ccccccccc", false)] // both positions hold 'c'
    #[case(0, 1, 'a', "abcde", true)] // 0 is off the front, matches nothing
    #[case(1, 9, 'a', "abcde", true)] // 9 is past the end, matches nothing
    fn exactly_one_position_must_match(
        #[case] lo: usize,
        #[case] hi: usize,
        #[case] letter: char,
        #[case] password: &str,
        #[case] expected: bool,
    ) {
        let policy = Policy {
            lo,
            hi,
            letter,
            password: password.to_string(),
        };
        assert_eq!(policy.is_valid(), expected);
    }
}
