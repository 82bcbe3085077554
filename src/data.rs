use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// A cell of the level grid, described by what sits on the floor and what occupies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
    Goal,
    Box,
    BoxOnGoal,
    Player,
    PlayerOnGoal,
    /// Outside the level - never enterable.
    Empty,
}

impl Cell {
    /// Parses one XSB token, including the alternative letters some level packs use.
    pub fn from_char(c: char) -> Option<Cell> {
        let cell = match c {
            '#' => Cell::Wall,
            ' ' | '-' | '_' => Cell::Floor,
            '.' => Cell::Goal,
            'b' | '$' => Cell::Box,
            'B' | '*' => Cell::BoxOnGoal,
            'p' | '@' => Cell::Player,
            'P' | '+' => Cell::PlayerOnGoal,
            _ => return None,
        };
        Some(cell)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor | Cell::Empty => ' ',
            Cell::Goal => '.',
            Cell::Box => '$',
            Cell::BoxOnGoal => '*',
            Cell::Player => '@',
            Cell::PlayerOnGoal => '+',
        }
    }

    /// The goal marking belongs to the floor, not to whatever stands on it.
    pub fn is_goal(self) -> bool {
        match self {
            Cell::Goal | Cell::BoxOnGoal | Cell::PlayerOnGoal => true,
            _ => false,
        }
    }

    pub fn has_box(self) -> bool {
        self == Cell::Box || self == Cell::BoxOnGoal
    }

    pub fn has_player(self) -> bool {
        self == Cell::Player || self == Cell::PlayerOnGoal
    }

    pub(crate) fn with_box(self) -> Cell {
        if self.is_goal() {
            Cell::BoxOnGoal
        } else {
            Cell::Box
        }
    }

    pub(crate) fn with_player(self) -> Cell {
        if self.is_goal() {
            Cell::PlayerOnGoal
        } else {
            Cell::Player
        }
    }

    pub(crate) fn vacated(self) -> Cell {
        if self.is_goal() {
            Cell::Goal
        } else {
            Cell::Floor
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Grid position. Fields are declared column first so the derived ordering
/// sorts by column, then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub c: i32,
    pub r: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { c, r }
    }

    /// Manhattan distance
    pub fn dist(self, other: Pos) -> u32 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which the solver tries directions.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    /// (row, column) offset
    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "U"),
            Dir::Down => write!(f, "D"),
            Dir::Left => write!(f, "L"),
            Dir::Right => write!(f, "R"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos::new(self.r + dr, self.c + dc)
    }
}
