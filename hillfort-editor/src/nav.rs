//! Sibling navigation between a user's hillforts.

use hillfort_core::{Direction, HillfortRecord, NavigationError};

/// Resolve the record next to `current` in `ordered`.
///
/// `current` is located by identity (first match). A record that is not in
/// the list, or a step past either end, yields `OutOfRange`.
pub fn navigate<'a>(
    direction: Direction,
    ordered: &'a [HillfortRecord],
    current: &HillfortRecord,
) -> Result<&'a HillfortRecord, NavigationError> {
    ordered
        .iter()
        .position(|record| record.same_identity(current))
        .and_then(|position| direction.step(position, ordered.len()))
        .map(|target| &ordered[target])
        .ok_or(NavigationError::OutOfRange { direction })
}
