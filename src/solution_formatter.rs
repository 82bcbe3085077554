use std::fmt::{self, Debug, Display, Formatter};

use crate::engine;
use crate::grid::Grid;
use crate::moves::Moves;

/// Shows a solution by replaying it grid by grid.
pub struct SolutionFormatter<'a> {
    initial: &'a Grid,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    /// Without `include_steps` only the grids after pushes are shown.
    pub fn new(initial: &'a Grid, moves: &'a Moves, include_steps: bool) -> Self {
        Self {
            initial,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initial)?;
        let mut last = self.initial.clone();
        for mov in self.moves {
            // moves from a different level are skipped like blocked keypresses
            if let Ok(new_grid) = engine::apply_move(&last, mov.dir) {
                if mov.is_push || self.include_steps {
                    writeln!(f, "{}", new_grid)?;
                }
                last = new_grid;
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
