pub mod cell;
pub mod grid;

pub use cell::{Direction, Exits};
pub use grid::{HexGrid, Wall};

/// A hexagonal maze: the grid topology plus the open sides of every cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: HexGrid,
    exits: Box<[Exits]>,
}

impl Maze {
    /// Creates a maze of `columns × rows` cells with every wall standing.
    pub fn new(columns: u16, rows: u16) -> Self {
        let grid = HexGrid::new(columns, rows);
        Maze {
            exits: vec![Exits::NONE; grid.len()].into_boxed_slice(),
            grid,
        }
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// Width of the maze in columns.
    pub fn columns(&self) -> u16 {
        self.grid.columns()
    }

    /// Height of the maze in rows.
    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.exits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exits.is_empty()
    }

    /// Open sides of every cell, indexed by cell.
    pub fn exits(&self) -> &[Exits] {
        &self.exits
    }

    /// Removes `wall`, recording the exit on both of its cells.
    ///
    /// # Panics
    /// If the two cells of the wall are not neighbors.
    pub fn open_wall(&mut self, wall: Wall) {
        let direction = self
            .grid
            .direction_between(wall.lower, wall.higher)
            .unwrap_or_else(|| panic!("cells of {wall:?} are not neighbors"));
        self.exits[wall.lower].insert(direction);
        self.exits[wall.higher].insert(direction.opposite());
    }

    /// Whether the side of `cell` facing `direction` is open.
    pub fn is_open(&self, cell: usize, direction: Direction) -> bool {
        self.exits[cell].contains(direction)
    }

    /// Cells reachable from `cell` through an open side, in the given probe order.
    pub fn passages<'a>(
        &'a self,
        cell: usize,
        order: &'a [Direction],
    ) -> impl Iterator<Item = usize> + 'a {
        order
            .iter()
            .filter(move |&&direction| self.is_open(cell, direction))
            .filter_map(move |&direction| self.grid.neighbor(cell, direction))
    }

    /// Number of removed walls. Each one is recorded on both of its cells.
    pub fn open_wall_count(&self) -> usize {
        let sides: usize = self.exits.iter().map(|e| e.count() as usize).sum();
        sides / 2
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = Exits;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.exits[self.grid.ravel_index(index.0, index.1)]
    }
}
