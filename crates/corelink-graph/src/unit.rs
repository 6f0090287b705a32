//! Unit handle state read by the core.

use crate::edge::Channel;
use crate::table::EdgeTable;

/// Alive/dead flag of a unit handle.
///
/// The generator never needs it; it only feeds [`NeighbourStates`].
pub trait UnitState {
    /// True when the unit starts alive.
    fn is_alive(&self) -> bool;
}

impl UnitState for bool {
    fn is_alive(&self) -> bool {
        *self
    }
}

impl<T: UnitState + ?Sized> UnitState for &T {
    fn is_alive(&self) -> bool {
        (**self).is_alive()
    }
}

/// Initial states of the units linking into one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighbourStates {
    /// Incoming edges from alive units.
    pub alive: usize,
    /// Incoming edges from dead units.
    pub dead: usize,
}

impl NeighbourStates {
    /// Tally every edge entering `index`.
    #[must_use]
    pub fn tally<U: UnitState>(table: &EdgeTable, units: &[Option<U>], index: usize) -> Self {
        Self::count(table.incoming(index).map(|l| l.source), units)
    }

    /// Tally only edges on `channel` entering `index`.
    #[must_use]
    pub fn tally_on<U: UnitState>(
        table: &EdgeTable,
        units: &[Option<U>],
        index: usize,
        channel: Channel,
    ) -> Self {
        let sources = table.incoming(index).filter(|l| l.channel == channel);
        Self::count(sources.map(|l| l.source), units)
    }

    /// Incoming edges counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.alive + self.dead
    }

    fn count<U: UnitState>(sources: impl Iterator<Item = usize>, units: &[Option<U>]) -> Self {
        let mut states = Self::default();
        for unit in sources.filter_map(|i| units.get(i).and_then(Option::as_ref)) {
            if unit.is_alive() {
                states.alive += 1;
            } else {
                states.dead += 1;
            }
        }
        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Link;

    #[test]
    fn counts_alive_and_dead_sources() {
        let units = vec![Some(true), Some(false), Some(true), None];
        let table = EdgeTable::from_links(
            4,
            vec![
                Link::new(0, 2, Channel::Report),
                Link::new(1, 2, Channel::Report),
                Link::new(1, 2, Channel::Ring),
                Link::new(2, 0, Channel::Command),
            ],
        );
        assert_eq!(
            NeighbourStates::tally(&table, &units, 2),
            NeighbourStates { alive: 1, dead: 2 }
        );
        let reports = NeighbourStates::tally_on(&table, &units, 2, Channel::Report);
        assert_eq!(reports.total(), 2);
        assert_eq!(NeighbourStates::tally(&table, &units, 3).total(), 0);
    }
}
