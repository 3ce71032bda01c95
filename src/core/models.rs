use std::ops::Add;

/// Semantic kind of a single grid cell. Target occupancy is folded into the kind,
/// so there is no separate overlay layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Floor,
    Wall,
    Player,
    Box,
    Target,
    BoxOnTarget,
    PlayerOnTarget,
}

impl Cell {
    pub const ALL: [Cell; 7] = [
        Cell::Floor,
        Cell::Wall,
        Cell::Player,
        Cell::Box,
        Cell::Target,
        Cell::BoxOnTarget,
        Cell::PlayerOnTarget,
    ];

    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            ' ' => Some(Cell::Floor),
            'X' => Some(Cell::Wall),
            '@' => Some(Cell::Player),
            '*' => Some(Cell::Box),
            '.' => Some(Cell::Target),
            '$' => Some(Cell::BoxOnTarget),
            '+' => Some(Cell::PlayerOnTarget),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Floor => ' ',
            Cell::Wall => 'X',
            Cell::Player => '@',
            Cell::Box => '*',
            Cell::Target => '.',
            Cell::BoxOnTarget => '$',
            Cell::PlayerOnTarget => '+',
        }
    }

    pub fn is_player(self) -> bool {
        matches!(self, Cell::Player | Cell::PlayerOnTarget)
    }
}

/// Row/column position. `i` is the row, `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Undo,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    OutOfBounds,
    Wall,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Walked,
    Pushed,
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_rejected(self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }
}
