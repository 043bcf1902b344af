//! Compass directions on the board.

/// One of the eight unit steps on the grid.
///
/// North is toward increasing row (from White's side toward Black's), east
/// toward increasing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    /// The four rook directions.
    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

    /// The four bishop directions.
    pub const DIAGONAL: [Direction; 4] =
        [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// All eight directions, orthogonal first.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Returns the `(drow, dcol)` step, each component in `-1..=1`.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (1, 0),
            Direction::S => (-1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (1, 1),
            Direction::NW => (1, -1),
            Direction::SE => (-1, 1),
            Direction::SW => (-1, -1),
        }
    }

    /// Returns the direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    /// Returns true for NE, NW, SE and SW.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (drow, dcol) = self.delta();
        drow != 0 && dcol != 0
    }
}
