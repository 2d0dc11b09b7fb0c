use aoc2020_utils::WrappingGrid;
use miette::*;

/// Flattens the fixed-width map lines into one row-major buffer for the
/// grid to borrow. Rejects ragged rows.
pub(crate) fn parse_terrain(input: &str) -> Result<(Vec<u8>, usize, usize)> {
    let mut cells = Vec::with_capacity(input.len());
    let mut width = 0;
    let mut height = 0;

    for line in input.lines().filter(|line| !line.is_empty()) {
        if width == 0 {
            width = line.len();
        }
        ensure!(
            line.len() == width,
            "ragged map: row {height} has {} columns, expected {width}",
            line.len()
        );
        cells.extend_from_slice(line.as_bytes());
        height += 1;
    }
    ensure!(width > 0, "empty map");

    Ok((cells, width, height))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (cells, width, height) = parse_terrain(input)?;
    let grid = WrappingGrid::new(&cells, width, height)?;

    let trees = grid.count_in_path(b'#', 3, 1)?;

    Ok(trees.to_string())
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
        assert_eq!("7", process(input)?);
        Ok(())
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let input = "..##\n#.\n";
        assert!(process(input).is_err());
    }
}
