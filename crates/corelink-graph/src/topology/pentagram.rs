// SPDX-License-Identifier: AGPL-3.0-only

//! Pentagram: star wiring of one 16-unit chip.
//!
//! Two index spaces are in play per chip: the full `0..16` offsets, and the
//! inner ring `10..=14`, which wraps on itself (14 -> 10) rather than into the
//! centre. Ring neighbours go through [`INNER_RING`], never through the
//! cluster indexer.
//!
//! Per full chip:
//!
//! | Channel | Edges | From |
//! |---------|-------|------|
//! | `CLUSTER_CLUSTER` | 10 | each arm unit to its pair partner |
//! | `CLUSTER_RING` | 10 | each arm unit to ring slot `counter / 2` |
//! | `RING_CLUSTER` | 10 | that ring slot back to the arm unit |
//! | `RING_LEFT` | 5 | each ring unit |
//! | `RING_RIGHT` | 5 | each ring unit |
//! | `RING_CENTRE` | 5 | each ring unit |
//! | `CENTRE_RING` | 5 | centre, labelled by ring slot |

use super::{Fold, TopologyKind, Wiring};
use crate::edge::{Channel, Link};
use crate::error::{Result, TopologyError};
use corelink_chip::pentagram::{arm_partner, CENTRE_OFFSET, INNER_RING};
use corelink_chip::{ClusterIndexer, PentagramRole, CLUSTER_SIZE};

/// Five arm pairs around an inner ring of five and a centre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pentagram;

impl Wiring for Pentagram {
    fn kind(&self) -> TopologyKind {
        TopologyKind::Pentagram
    }

    fn check_geometry(&self, indexer: &ClusterIndexer) -> Result<()> {
        if indexer.size() != CLUSTER_SIZE {
            return Err(TopologyError::invalid_argument(format!(
                "pentagram needs chips of exactly {CLUSTER_SIZE} units, got {}",
                indexer.size()
            )));
        }
        Ok(())
    }

    fn links_from(
        &self,
        index: usize,
        indexer: &ClusterIndexer,
        fold: &mut Fold,
        out: &mut Vec<Link>,
    ) {
        let pos = indexer.position(index);
        let start = fold.leader;

        match PentagramRole::of(pos.offset) {
            Some(PentagramRole::Arm) => {
                let partner = start + arm_partner(pos.offset);
                let ring = start + INNER_RING.first + fold.counter / 2;
                out.push(Link::new(index, partner, Channel::ClusterCluster));
                out.push(Link::new(index, ring, Channel::ClusterRing));
                out.push(Link::new(ring, index, Channel::RingCluster));
                fold.counter += 1;
            }
            Some(PentagramRole::Ring) => {
                let left = INNER_RING.wrap_prev(start, index);
                let right = INNER_RING.wrap_next(start, index);
                out.push(Link::new(index, left, Channel::RingLeft));
                out.push(Link::new(index, right, Channel::RingRight));
                out.push(Link::new(index, start + CENTRE_OFFSET, Channel::RingCentre));
            }
            Some(PentagramRole::Centre) => {
                out.extend(INNER_RING.members(start).enumerate().map(|(slot, ring)| {
                    Link::new(index, ring, Channel::CentreRing).labelled(slot)
                }));
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_chip(start: usize) -> Vec<Link> {
        let ix = ClusterIndexer::CHIP;
        let mut fold = Fold::default();
        let mut out = Vec::new();
        for index in start..start + 16 {
            fold.enter(ix.cluster_start(index));
            Pentagram.links_from(index, &ix, &mut fold, &mut out);
        }
        out
    }

    #[test]
    fn arm_pairs_share_a_ring_slot() {
        let out = wire_chip(0);
        let cc: Vec<_> = out
            .iter()
            .filter(|l| l.channel == Channel::ClusterCluster)
            .map(|l| (l.source, l.destination))
            .collect();
        assert_eq!(&cc[..4], &[(0, 1), (1, 0), (2, 3), (3, 2)]);

        let to_ring: Vec<_> = out
            .iter()
            .filter(|l| l.channel == Channel::ClusterRing)
            .map(|l| l.destination)
            .collect();
        assert_eq!(to_ring, vec![10, 10, 11, 11, 12, 12, 13, 13, 14, 14]);
    }

    #[test]
    fn inner_ring_wraps_within_itself() {
        let out = wire_chip(16);
        let left_of_26 = out
            .iter()
            .find(|l| l.source == 26 && l.channel == Channel::RingLeft)
            .map(|l| l.destination);
        let right_of_30 = out
            .iter()
            .find(|l| l.source == 30 && l.channel == Channel::RingRight)
            .map(|l| l.destination);
        assert_eq!(left_of_26, Some(30));
        assert_eq!(right_of_30, Some(26));
    }

    #[test]
    fn centre_labels_ring_slots() {
        let out = wire_chip(0);
        let centre: Vec<_> = out
            .iter()
            .filter(|l| l.channel == Channel::CentreRing)
            .map(|l| (l.source, l.destination, l.label))
            .collect();
        assert_eq!(
            centre,
            vec![
                (15, 10, 0),
                (15, 11, 1),
                (15, 12, 2),
                (15, 13, 3),
                (15, 14, 4)
            ]
        );
    }

    #[test]
    fn only_sixteen_unit_chips() {
        let half = ClusterIndexer::new(8).unwrap();
        assert!(Pentagram.check_geometry(&half).is_err());
        assert!(Pentagram.check_geometry(&ClusterIndexer::CHIP).is_ok());
    }
}
