//! Sokoban move rules. Both the solver and anything replaying its solutions go through here
//! so a solution always replays exactly the way it was found.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::data::{Cell, Dir, Pos};
use crate::grid::Grid;
use crate::moves::Move;

/// The move can't be made from this grid. Not really an error - just an outcome the solver prunes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blocked;

impl Display for Blocked {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Move is blocked")
    }
}

impl Error for Blocked {}

/// Moves the player one cell in `dir`, pushing a box if there is one.
///
/// The input is never modified. Moving out of bounds or into a wall, pushing a box into a wall,
/// out of bounds or into another box are all `Blocked`. A grid without a player can't move at all.
pub fn apply_move(grid: &Grid, dir: Dir) -> Result<Grid, Blocked> {
    step(grid, dir).map(|(new_grid, _)| new_grid)
}

/// Applies directions one by one, blocked ones are skipped the same way an interactive game ignores them.
pub fn replay<I>(grid: &Grid, dirs: I) -> Grid
where
    I: IntoIterator<Item = Dir>,
{
    let mut cur = grid.clone();
    for dir in dirs {
        if let Ok(new_grid) = apply_move(&cur, dir) {
            cur = new_grid;
        }
    }
    cur
}

pub(crate) fn step(grid: &Grid, dir: Dir) -> Result<(Grid, Move), Blocked> {
    let player_pos = grid.player().ok_or(Blocked)?;
    let new_player_pos = player_pos + dir;
    if !grid.is_walkable(new_player_pos) {
        return Err(Blocked);
    }

    let target = grid.cell(new_player_pos);
    let mut new_grid = grid.clone();

    let is_push = target.has_box();
    if is_push {
        let push_dest = new_player_pos + dir;
        let landing = grid.cell(push_dest);
        if !grid.is_walkable(push_dest) || landing.has_box() {
            return Err(Blocked);
        }
        new_grid.set(push_dest, landing.with_box());
    }

    move_player(&mut new_grid, player_pos, new_player_pos, target);
    Ok((new_grid, Move::new(dir, is_push)))
}

fn move_player(grid: &mut Grid, from: Pos, to: Pos, target: Cell) {
    let vacated = grid.cell(from).vacated();
    grid.set(from, vacated);
    grid.set(to, target.with_player());
}
