//! Move-and-shift reordering for drag-and-drop lists.

/// Move the element at `from` to `to`, shifting everything in between by
/// one. Returns `None` when the gesture is a no-op (`from == to`) or an
/// index is out of range, in which case the caller sends nothing.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from == to || from >= items.len() || to >= items.len() {
        return None;
    }
    let mut reordered = items.to_vec();
    let moved = reordered.remove(from);
    reordered.insert(to, moved);
    Some(reordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward() {
        let items = vec!["A", "B", "C", "D"];
        assert_eq!(move_item(&items, 0, 2), Some(vec!["B", "C", "A", "D"]));
    }

    #[test]
    fn test_move_backward() {
        let items = vec!["A", "B", "C", "D"];
        assert_eq!(move_item(&items, 3, 0), Some(vec!["D", "A", "B", "C"]));
    }

    #[test]
    fn test_same_position_is_a_noop() {
        let items = vec![1, 2, 3];
        assert_eq!(move_item(&items, 1, 1), None);
    }

    #[test]
    fn test_out_of_range_indices() {
        let items = vec![1, 2, 3];
        assert_eq!(move_item(&items, 3, 0), None);
        assert_eq!(move_item(&items, 0, 3), None);
        assert_eq!(move_item::<i64>(&[], 0, 0), None);
    }

    #[test]
    fn test_rapid_gestures_compose_on_latest_snapshot() {
        // Each gesture operates on the result of the previous one, the way
        // the drag surface re-reads local state between drops.
        let mut items = vec![10, 20, 30, 40, 50];
        for (from, to) in [(0, 4), (2, 0), (4, 1)] {
            items = move_item(&items, from, to).unwrap();
        }
        assert_eq!(items, vec![40, 10, 20, 30, 50]);
    }
}
