use crate::data::Pos;

/// Everything that determines which futures are reachable from a position in the search.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub player_pos: Pos,
    pub boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort(); // sort to detect equal states when we reorder boxes
        State { player_pos, boxes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_order_does_not_matter() {
        let player_pos = Pos::new(1, 1);
        let a = State::new(player_pos, vec![Pos::new(2, 3), Pos::new(1, 2)]);
        let b = State::new(player_pos, vec![Pos::new(1, 2), Pos::new(2, 3)]);
        assert_eq!(a, b);

        let c = State::new(Pos::new(1, 2), vec![Pos::new(1, 2), Pos::new(2, 3)]);
        assert_ne!(a, c);
    }
}
