use std::collections::HashSet;

use chumsky::prelude::*;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<i64>, extra::Err<Rich<'a, char>>> {
    text::int(10)
        .from_str::<i64>()
        .unwrapped()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Single-pass complement scan: for each entry, check whether the value
/// that would complete the sum has already been seen. Distinct indices are
/// guaranteed because an entry is only inserted after it has been checked.
pub(crate) fn pair_product(entries: &[i64], sum: i64) -> Option<i64> {
    let mut seen = HashSet::new();
    for &entry in entries {
        let complement = sum - entry;
        if seen.contains(&complement) {
            return Some(entry * complement);
        }
        seen.insert(entry);
    }
    None
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let entries = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let product =
        pair_product(&entries, 2020).ok_or_else(|| miette!("no pair of entries sums to 2020"))?;

    Ok(product.to_string())
}
