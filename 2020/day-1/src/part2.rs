use chumsky::prelude::*;
use miette::*;

use crate::part1::pair_product;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<i64>, extra::Err<Rich<'a, char>>> {
    text::int(10)
        .from_str::<i64>()
        .unwrapped()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let entries = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // Fix the first entry, then reuse the pair scan on the rest of the
    // list. Scanning only entries[i+1..] keeps the three indices distinct.
    let product = entries
        .iter()
        .enumerate()
        .find_map(|(i, &entry)| {
            pair_product(&entries[i + 1..], 2020 - entry).map(|pair| entry * pair)
        })
        .ok_or_else(|| miette!("no triple of entries sums to 2020"))?;

    Ok(product.to_string())
}
