use miette::*;

use aoc2020_day_4::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input1.txt");
    let expected = "2";
    let result = part1::process(input)?;
    println!(
        "Day 4 Part 1 => expected: {expected} // result: {result} :: {}",
        if result == expected { "OK" } else { "FAIL" }
    );
    Ok(())
}
