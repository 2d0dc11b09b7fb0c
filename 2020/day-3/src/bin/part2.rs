use miette::*;

use aoc2020_day_3::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input2.txt");
    let expected = "336";
    let result = part2::process(input)?;
    println!(
        "Day 3 Part 2 => expected: {expected} // result: {result} :: {}",
        if result == expected { "OK" } else { "FAIL" }
    );
    Ok(())
}
