//! Lower bound estimates of the remaining work, used to order the frontier.
//! Less is better.

use crate::config::Heuristic;
use crate::data::Pos;

/// Above this the assignment table gets too big to build for every state.
const MAX_MATCHING: usize = 12;

pub fn estimate(heuristic: Heuristic, boxes: &[Pos], goals: &[Pos]) -> u32 {
    match heuristic {
        Heuristic::Greedy => greedy(boxes, goals),
        Heuristic::Matching => matching(boxes, goals),
    }
}

/// Boxes in the given order each claim the nearest unclaimed goal, first one found wins ties.
///
/// Can overestimate - a box claiming a goal can force a later box much further away
/// than an optimal assignment would.
pub fn greedy(boxes: &[Pos], goals: &[Pos]) -> u32 {
    let mut claimed = vec![false; goals.len()];
    let mut goal_dist_sum = 0;
    for &box_pos in boxes {
        let mut best: Option<(usize, u32)> = None;
        for (i, &goal) in goals.iter().enumerate() {
            if claimed[i] {
                continue;
            }
            let dist = box_pos.dist(goal);
            if best.map_or(true, |(_, min)| dist < min) {
                best = Some((i, dist));
            }
        }
        if let Some((i, dist)) = best {
            claimed[i] = true;
            goal_dist_sum += dist;
        }
    }
    goal_dist_sum
}

/// Minimum total distance over all ways to pair boxes with distinct goals.
///
/// If counts differ only the smaller side gets paired. Never more than the number of pushes left.
pub fn matching(boxes: &[Pos], goals: &[Pos]) -> u32 {
    let (items, slots) = if boxes.len() <= goals.len() {
        (boxes, goals)
    } else {
        (goals, boxes)
    };
    if items.is_empty() {
        return 0;
    }
    if slots.len() > MAX_MATCHING {
        return greedy(boxes, goals);
    }

    // best[mask] = cheapest way to pair the first popcount(mask) items with slots in mask
    let mut best = vec![u32::max_value(); 1 << slots.len()];
    best[0] = 0;
    let mut min_total = u32::max_value();
    for mask in 0..best.len() {
        let cost = best[mask];
        if cost == u32::max_value() {
            continue;
        }
        let i = mask.count_ones() as usize;
        if i == items.len() {
            min_total = min_total.min(cost);
            continue;
        }
        for (j, &slot) in slots.iter().enumerate() {
            let next = mask | (1 << j);
            if next == mask {
                continue;
            }
            let next_cost = cost + items[i].dist(slot);
            if next_cost < best[next] {
                best[next] = next_cost;
            }
        }
    }
    min_total
}
