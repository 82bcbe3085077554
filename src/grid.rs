use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use crate::data::{Cell, Pos};
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultiplePlayers,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
        }
    }
}

impl Error for ParserErr {}

/// A level snapshot.
///
/// Rows are shared between a grid and the grids derived from it by moves,
/// a move only copies the (at most three) rows it changes.
/// Rows keep their own length, anything past the end of a row is out of bounds.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Arc<Vec<Cell>>>,
    player_pos: Option<Pos>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, ParserErr> {
        let mut player_pos = None;
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.has_player() {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(Pos::new(r as i32, c as i32));
                }
            }
        }

        Ok(Grid {
            rows: rows.into_iter().map(Arc::new).collect(),
            player_pos,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.r >= 0
            && pos.c >= 0
            && (pos.r as usize) < self.rows.len()
            && (pos.c as usize) < self.rows[pos.r as usize].len()
    }

    /// `Cell::Empty` for anything out of bounds.
    pub fn cell(&self, pos: Pos) -> Cell {
        if self.in_bounds(pos) {
            self.rows[pos.r as usize][pos.c as usize]
        } else {
            Cell::Empty
        }
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.cell(pos) == Cell::Wall
    }

    /// Whether something can stand on `pos` - out of bounds counts as blocked.
    pub fn is_walkable(&self, pos: Pos) -> bool {
        match self.cell(pos) {
            Cell::Wall | Cell::Empty => false,
            _ => true,
        }
    }

    /// All goal-bearing cells in row-major order.
    pub fn goals(&self) -> Vec<Pos> {
        self.positions()
            .filter(|&pos| self.cell(pos).is_goal())
            .collect()
    }

    /// All box-bearing cells, sorted so equal configurations compare equal.
    pub fn boxes(&self) -> Vec<Pos> {
        let mut boxes: Vec<_> = self
            .positions()
            .filter(|&pos| self.cell(pos).has_box())
            .collect();
        boxes.sort();
        boxes
    }

    pub fn player(&self) -> Option<Pos> {
        self.player_pos
    }

    pub fn state(&self) -> Option<State> {
        self.player_pos
            .map(|player_pos| State::new(player_pos, self.boxes()))
    }

    /// Every goal holds a box and there are no extra boxes.
    pub fn is_solved(&self) -> bool {
        crate::solver::is_goal_state(&self.boxes(), &self.goals())
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            (0..row.len()).map(move |c| Pos::new(r as i32, c as i32))
        })
    }

    /// Only for positions already known to be in bounds.
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        let row = Arc::make_mut(&mut self.rows[pos.r as usize]);
        row[pos.c as usize] = cell;
        if cell.has_player() {
            self.player_pos = Some(pos);
        }
    }
}

impl FromStr for Grid {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn parse(level: &str) -> Result<Grid, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches(|c: char| c == '\n' || c == '\r').trim_end();

    let mut grid = Vec::new();
    if level.is_empty() {
        return Grid::new(grid);
    }

    for (r, line) in level.lines().enumerate() {
        let mut line_cells = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let cell = Cell::from_char(cur_char).ok_or(ParserErr::Pos(r, c))?;
            line_cells.push(cell);
        }
        grid.push(line_cells);
    }

    Grid::new(grid)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            // don't print trailing cells outside the level to match the input level strings
            let len = row
                .iter()
                .rposition(|&cell| cell != Cell::Empty)
                .map_or(0, |last| last + 1);
            for cell in &row[..len] {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
