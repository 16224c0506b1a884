use std::fmt;

/// One of the six sides of a hexagonal cell.
///
/// Rows grow northwards. Even columns sit half a row lower than odd columns, so the four
/// diagonal directions land on different rows depending on the parity of the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All directions, in bit order.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Order in which the tree builder probes the neighbors of a cell:
    /// west column, own column, then east column, each from south to north.
    pub const PROBE_ORDER: [Direction; 6] = [
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::South,
        Direction::North,
        Direction::SouthEast,
        Direction::NorthEast,
    ];

    /// The bit recording an exit in this direction.
    pub const fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::South => 2,
            Direction::NorthWest => 4,
            Direction::NorthEast => 8,
            Direction::SouthWest => 16,
            Direction::SouthEast => 32,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }

    /// Offset `(column, row)` to the neighbor in this direction, for a cell in a column of the
    /// given parity.
    pub const fn offset(self, odd_column: bool) -> (i32, i32) {
        // Diagonal neighbors in odd columns are one row higher than in even ones.
        let lift = odd_column as i32;
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::NorthWest => (-1, lift),
            Direction::SouthWest => (-1, lift - 1),
            Direction::NorthEast => (1, lift),
            Direction::SouthEast => (1, lift - 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::NorthWest => "NW",
            Direction::NorthEast => "NE",
            Direction::SouthWest => "SW",
            Direction::SouthEast => "SE",
        };
        write!(f, "{name}")
    }
}

/// Bitmap of the open sides of a cell. Only the six low bits are ever set.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exits(u8);

impl Exits {
    pub const NONE: Exits = Exits(0);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Number of open sides.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Open directions, in bit order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.contains(direction))
    }
}

impl fmt::Display for Exits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, direction) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{direction}")?;
        }
        write!(f, "]")
    }
}
