use aoc2020_utils::{GridError, WrappingGrid};
use miette::*;

use crate::part1::parse_terrain;

const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (cells, width, height) = parse_terrain(input)?;
    let grid = WrappingGrid::new(&cells, width, height)?;

    let product: usize = SLOPES
        .into_iter()
        .map(|(dx, dy)| grid.count_in_path(b'#', dx, dy))
        .product::<Result<usize, GridError>>()?;

    Ok(product.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#";
        assert_eq!("336", process(input)?);
        Ok(())
    }
}
