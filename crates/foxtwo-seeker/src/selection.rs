//! Target scoring and candidate ordering.

use foxtwo_core::constants::{LOCK_SCORE_ANGLE_WEIGHT, LOCK_SCORE_RANGE_WEIGHT};

/// A body inside sensor range, annotated relative to the shooter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact<H> {
    pub handle: H,
    /// Angle between the shooter's forward axis and the line to the body.
    pub angle_deg: f64,
    /// Distance from the shooter (meters).
    pub range: f64,
}

impl<H> Contact<H> {
    /// Selection score. Lower is better: angle dominates, range breaks ties.
    pub fn score(&self) -> f64 {
        self.angle_deg * LOCK_SCORE_ANGLE_WEIGHT + self.range * LOCK_SCORE_RANGE_WEIGHT
    }
}

/// Contacts inside the acquisition cone.
pub fn candidates<H: Copy>(
    contacts: &[Contact<H>],
    lock_angle_deg: f64,
) -> impl Iterator<Item = &Contact<H>> {
    contacts.iter().filter(move |c| c.angle_deg <= lock_angle_deg)
}

/// Best-scoring candidate, if any.
pub fn best_candidate<H: Copy>(contacts: &[Contact<H>], lock_angle_deg: f64) -> Option<H> {
    candidates(contacts, lock_angle_deg)
        .min_by(|a, b| a.score().total_cmp(&b.score()))
        .map(|c| c.handle)
}

/// The candidate after `current` in stable handle order, wrapping.
/// With no current target (or one no longer a candidate) returns the first.
pub fn next_candidate<H: Copy + Ord>(
    contacts: &[Contact<H>],
    lock_angle_deg: f64,
    current: Option<H>,
) -> Option<H> {
    let mut handles: Vec<H> = candidates(contacts, lock_angle_deg)
        .map(|c| c.handle)
        .collect();
    handles.sort_unstable();
    handles.dedup();

    let first = *handles.first()?;
    let Some(current) = current else {
        return Some(first);
    };
    match handles.binary_search(&current) {
        Ok(idx) => Some(handles[(idx + 1) % handles.len()]),
        Err(idx) => Some(handles.get(idx).copied().unwrap_or(first)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(handle: u32, angle_deg: f64, range: f64) -> Contact<u32> {
        Contact {
            handle,
            angle_deg,
            range,
        }
    }

    #[test]
    fn test_angle_dominates_range() {
        // 1° off at 4 km scores 410; 5° off at 500 m scores 100.
        let contacts = [contact(1, 1.0, 4_000.0), contact(2, 5.0, 500.0)];
        assert_eq!(best_candidate(&contacts, 30.0), Some(2));

        // Same range: the more centered one wins.
        let contacts = [contact(1, 10.0, 1_000.0), contact(2, 2.0, 1_000.0)];
        assert_eq!(best_candidate(&contacts, 30.0), Some(2));
    }

    #[test]
    fn test_range_breaks_angle_ties() {
        let contacts = [contact(1, 3.0, 2_000.0), contact(2, 3.0, 1_000.0)];
        assert_eq!(best_candidate(&contacts, 30.0), Some(2));
    }

    #[test]
    fn test_outside_cone_is_not_a_candidate() {
        let contacts = [contact(1, 31.0, 100.0)];
        assert_eq!(best_candidate(&contacts, 30.0), None);
        assert_eq!(next_candidate(&contacts, 30.0, None), None);
    }

    #[test]
    fn test_next_candidate_wraps_in_handle_order() {
        let contacts = [
            contact(7, 1.0, 100.0),
            contact(3, 2.0, 100.0),
            contact(5, 40.0, 100.0), // outside the cone
            contact(9, 3.0, 100.0),
        ];
        assert_eq!(next_candidate(&contacts, 30.0, None), Some(3));
        assert_eq!(next_candidate(&contacts, 30.0, Some(3)), Some(7));
        assert_eq!(next_candidate(&contacts, 30.0, Some(7)), Some(9));
        assert_eq!(next_candidate(&contacts, 30.0, Some(9)), Some(3));
        // A current target outside the candidate set resumes after its slot.
        assert_eq!(next_candidate(&contacts, 30.0, Some(5)), Some(7));
        assert_eq!(next_candidate(&contacts, 30.0, Some(10)), Some(3));
    }
}
