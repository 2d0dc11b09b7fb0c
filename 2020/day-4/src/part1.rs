use std::collections::HashSet;

use aoc2020_utils::CharQueue;
use miette::*;

pub(crate) const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

/// Collects the field names of one passport record by streaming it
/// character by character through a small queue. Field names are the runs
/// of chars before each `:`; everything between a `:` and the next
/// whitespace is a value and is skipped.
fn field_names(record: &str) -> Result<HashSet<String>> {
    // every passport field name is exactly three chars
    let mut storage = ['\0'; 3];
    let mut queue = CharQueue::new(&mut storage);
    let mut out = ['\0'; 4];

    let mut names = HashSet::new();
    let mut collecting = true;

    for ch in record.chars() {
        match ch {
            ':' => {
                let len = queue.flush(&mut out)?;
                names.insert(out[..len].iter().collect());
                collecting = false;
            }
            ' ' | '\n' => collecting = true,
            _ if collecting => queue.enqueue(ch)?,
            _ => {}
        }
    }

    Ok(names)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut valid = 0;
    for record in input.split("\n\n") {
        let names = field_names(record)?;
        // cid is the one optional field
        if REQUIRED.iter().all(|name| names.contains(*name)) {
            valid += 1;
        }
    }

    Ok(valid.to_string())
}
