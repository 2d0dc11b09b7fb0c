use aoc2020_day_3::{part1, part2};

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_part1() {
    part1::process(divan::black_box(include_str!("../input1.txt"))).unwrap();
}

#[divan::bench]
fn bench_part2() {
    part2::process(divan::black_box(include_str!("../input2.txt"))).unwrap();
}
