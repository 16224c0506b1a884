use super::cell::Direction;

/// A candidate wall between two neighboring cells, `lower < higher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wall {
    pub lower: usize,
    pub higher: usize,
}

/// Topology of a hexagonal grid of `columns × rows` cells.
///
/// Cells are numbered up the columns first: `(column, row)` is index `column * rows + row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexGrid {
    columns: u16,
    rows: u16,
}

impl HexGrid {
    pub fn new(columns: u16, rows: u16) -> Self {
        HexGrid { columns, rows }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ravel_index(&self, column: u16, row: u16) -> usize {
        column as usize * self.rows as usize + row as usize
    }

    pub fn coords(&self, index: usize) -> (u16, u16) {
        let rows = self.rows as usize;
        ((index / rows) as u16, (index % rows) as u16)
    }

    pub fn is_in_bounds(&self, column: i32, row: i32) -> bool {
        (0..self.columns as i32).contains(&column) && (0..self.rows as i32).contains(&row)
    }

    /// The cell next to `index` in `direction`, or `None` past the edge of the grid.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let (column, row) = self.coords(index);
        let (dc, dr) = direction.offset(column % 2 == 1);
        let (nc, nr) = (column as i32 + dc, row as i32 + dr);
        self.is_in_bounds(nc, nr)
            .then(|| self.ravel_index(nc as u16, nr as u16))
    }

    /// Closed-form number of walls: `(columns-1)*(2*rows-1)` between columns plus
    /// `columns*(rows-1)` inside columns.
    pub fn wall_count(&self) -> usize {
        let (m, n) = (self.columns as usize, self.rows as usize);
        (m - 1) * (2 * n - 1) + m * (n - 1)
    }

    /// Every pair of neighboring cells, exactly once.
    ///
    /// Each cell contributes the walls to its higher-numbered neighbors: north, north-east and
    /// south-east.
    ///
    /// # Panics
    /// If the enumeration disagrees with [`HexGrid::wall_count`].
    pub fn walls(&self) -> Vec<Wall> {
        let mut walls = Vec::with_capacity(self.wall_count());
        for lower in 0..self.len() {
            for direction in [Direction::North, Direction::NorthEast, Direction::SouthEast] {
                if let Some(higher) = self.neighbor(lower, direction) {
                    walls.push(Wall { lower, higher });
                }
            }
        }
        assert_eq!(
            walls.len(),
            self.wall_count(),
            "wall enumeration disagrees with the closed form for a {}x{} grid",
            self.columns,
            self.rows
        );
        walls
    }

    /// Direction leading from `from` to `to`, or `None` if they are not neighbors.
    ///
    /// The signed index delta splits into a column step and a row step; the column parity of
    /// `from` then tells the diagonals apart, since a delta of `rows` means north-east from an
    /// even column but south-east from an odd one.
    pub fn direction_between(&self, from: usize, to: usize) -> Option<Direction> {
        let (from_column, _) = self.coords(from);
        let (to_column, _) = self.coords(to);
        let dc = to_column as i64 - from_column as i64;
        let dr = to as i64 - from as i64 - dc * self.rows as i64;
        let odd = from_column % 2 == 1;
        Direction::ALL.into_iter().find(|direction| {
            let (oc, or) = direction.offset(odd);
            (oc as i64, or as i64) == (dc, dr)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_indexing() {
        let grid = HexGrid::new(4, 3);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.ravel_index(2, 1), 7);
        assert_eq!(grid.coords(7), (2, 1));
    }

    #[test]
    fn test_neighbors_of_even_column() {
        let grid = HexGrid::new(5, 5);
        let cell = grid.ravel_index(2, 2);
        let at = |c, r| Some(grid.ravel_index(c, r));
        assert_eq!(grid.neighbor(cell, Direction::North), at(2, 3));
        assert_eq!(grid.neighbor(cell, Direction::South), at(2, 1));
        assert_eq!(grid.neighbor(cell, Direction::NorthWest), at(1, 2));
        assert_eq!(grid.neighbor(cell, Direction::SouthWest), at(1, 1));
        assert_eq!(grid.neighbor(cell, Direction::NorthEast), at(3, 2));
        assert_eq!(grid.neighbor(cell, Direction::SouthEast), at(3, 1));
    }

    #[test]
    fn test_neighbors_of_odd_column() {
        let grid = HexGrid::new(5, 5);
        let cell = grid.ravel_index(1, 2);
        let at = |c, r| Some(grid.ravel_index(c, r));
        assert_eq!(grid.neighbor(cell, Direction::NorthWest), at(0, 3));
        assert_eq!(grid.neighbor(cell, Direction::SouthWest), at(0, 2));
        assert_eq!(grid.neighbor(cell, Direction::NorthEast), at(2, 3));
        assert_eq!(grid.neighbor(cell, Direction::SouthEast), at(2, 2));
    }

    #[test]
    fn test_boundary_has_no_neighbors() {
        let grid = HexGrid::new(3, 3);
        // Bottom of an even column has nothing below, nor diagonally below.
        assert_eq!(grid.neighbor(0, Direction::South), None);
        assert_eq!(grid.neighbor(0, Direction::SouthEast), None);
        assert_eq!(grid.neighbor(0, Direction::NorthWest), None);
        // Top of an odd column has nothing diagonally above.
        let top = grid.ravel_index(1, 2);
        assert_eq!(grid.neighbor(top, Direction::NorthEast), None);
        assert_eq!(grid.neighbor(top, Direction::NorthWest), None);
        assert_eq!(grid.neighbor(top, Direction::SouthEast), Some(grid.ravel_index(2, 2)));
    }

    #[test]
    fn test_walls_match_closed_form_and_are_unique() {
        for (columns, rows) in [(2, 2), (2, 7), (3, 3), (6, 2), (9, 4)] {
            let grid = HexGrid::new(columns, rows);
            let walls = grid.walls();
            let (m, n) = (columns as usize, rows as usize);
            // 3mn - 2m - 2n + 1, the same total counted another way.
            assert_eq!(walls.len() + 2 * m + 2 * n, 3 * m * n + 1);
            let unique = walls.iter().copied().collect::<HashSet<_>>();
            assert_eq!(unique.len(), walls.len());
            assert!(walls.iter().all(|w| w.lower < w.higher));
        }
    }

    #[test]
    fn test_walls_cover_every_neighbor_pair() {
        let grid = HexGrid::new(4, 5);
        let walls = grid.walls().into_iter().collect::<HashSet<_>>();
        for cell in 0..grid.len() {
            for direction in Direction::ALL {
                if let Some(other) = grid.neighbor(cell, direction) {
                    let wall = Wall {
                        lower: cell.min(other),
                        higher: cell.max(other),
                    };
                    assert!(walls.contains(&wall), "missing wall {wall:?}");
                }
            }
        }
    }

    #[test]
    fn test_direction_between() {
        for (columns, rows) in [(6, 4), (5, 2), (2, 3)] {
            let grid = HexGrid::new(columns, rows);
            for wall in grid.walls() {
                let direction = grid
                    .direction_between(wall.lower, wall.higher)
                    .expect("every enumerated wall has a direction");
                assert_eq!(grid.neighbor(wall.lower, direction), Some(wall.higher));
                assert_eq!(
                    grid.direction_between(wall.higher, wall.lower),
                    Some(direction.opposite())
                );
            }
        }
        let grid = HexGrid::new(6, 4);
        assert_eq!(grid.direction_between(0, 2), None);
        assert_eq!(grid.direction_between(0, 0), None);
    }

    #[test]
    fn test_two_rows_do_not_confuse_north_and_south_east() {
        // With two rows, (0, 1) -> (1, 0) and (0, 0) -> (0, 1) share an index delta of 1.
        let grid = HexGrid::new(2, 2);
        assert_eq!(grid.direction_between(1, 2), Some(Direction::SouthEast));
        assert_eq!(grid.direction_between(0, 1), Some(Direction::North));
    }
}
