//! Merging of ticks that land on top of each other

use crate::generated::{position_distance, TickMark};

/// Drop ticks closer than `min_separation` to the previously accepted one
///
/// `ticks` must be sorted by normalized position. Of two clashing ticks the
/// heavier survives; on equal weight the one already accepted stays. On
/// circular layouts the first and last survivors are also compared across
/// the seam, with twice the threshold.
pub(crate) fn deduplicate(ticks: Vec<TickMark>, min_separation: f64, circular: bool) -> Vec<TickMark> {
    let mut accepted: Vec<TickMark> = Vec::with_capacity(ticks.len());

    for tick in ticks {
        let clashes = accepted
            .last()
            .is_some_and(|last| tick.normalized_position - last.normalized_position < min_separation);
        if !clashes {
            accepted.push(tick);
            continue;
        }
        if let Some(last) = accepted.last_mut() {
            if tick.style.outweighs(&last.style) {
                *last = tick;
            }
        }
    }

    if circular && accepted.len() > 1 {
        let first = &accepted[0];
        let last = &accepted[accepted.len() - 1];
        let gap = position_distance(first.normalized_position, last.normalized_position, true);
        if gap < 2.0 * min_separation {
            if last.style.outweighs(&first.style) {
                accepted.remove(0);
            } else {
                accepted.pop();
            }
        }
    }

    accepted
}
