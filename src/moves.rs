use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir)
        } else {
            write!(f, "{}", self.dir.to_string().to_lowercase())
        }
    }
}

/// Moves from the initial grid, in the order they are applied.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    pub fn dirs(&self) -> impl Iterator<Item = Dir> + '_ {
        self.0.iter().map(|mov| mov.dir)
    }

    /// LURD notation - lowercase steps, uppercase pushes.
    pub fn lurd(&self) -> String {
        self.0.iter().map(|mov| format!("{:?}", mov)).collect()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lurd())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Moves {
        Moves::new(vec![
            Move::new(Dir::Up, false),
            Move::new(Dir::Right, false),
            Move::new(Dir::Down, false),
            Move::new(Dir::Left, false),
            Move::new(Dir::Up, true),
            Move::new(Dir::Right, true),
            Move::new(Dir::Down, true),
            Move::new(Dir::Left, true),
        ])
    }

    #[test]
    fn formatting_moves() {
        let moves = mixed();
        assert_eq!(moves.to_string(), "URDLURDL");
        assert_eq!(moves.lurd(), "urdlURDL");
        assert_eq!(format!("{:?}", moves), "urdlURDL");
    }

    #[test]
    fn adding_and_counting() {
        let mut moves = Moves::default();
        assert!(moves.is_empty());
        moves.add(Move::new(Dir::Left, true));
        moves.add(Move::new(Dir::Down, false));

        assert_eq!(moves.move_cnt(), 2);
        assert_eq!(moves.push_cnt(), 1);

        let moves = mixed();
        assert_eq!(moves.move_cnt(), 8);
        assert_eq!(moves.push_cnt(), 4);
    }

    #[test]
    fn iterating() {
        let moves = mixed();
        let dirs: Vec<_> = moves.dirs().collect();
        assert_eq!(
            &dirs[..4],
            &[Dir::Up, Dir::Right, Dir::Down, Dir::Left][..]
        );

        let mut cnt = 0;
        for _ in &moves {
            cnt += 1;
        }
        for _ in moves.iter() {
            cnt += 1;
        }
        for _ in moves {
            cnt += 1;
        }
        assert_eq!(cnt, 24);
    }
}
