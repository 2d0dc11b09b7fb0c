use miette::*;

use aoc2020_day_4::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input2.txt");
    let expected = "4";
    let result = part2::process(input)?;
    println!(
        "Day 4 Part 2 => expected: {expected} // result: {result} :: {}",
        if result == expected { "OK" } else { "FAIL" }
    );
    Ok(())
}
