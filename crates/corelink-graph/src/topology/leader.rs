//! Ring with leader: three logical channels over one cluster.
//!
//! Per full cluster of `n` units:
//!
//! | Channel | Edges | Shape |
//! |---------|-------|-------|
//! | `RING` | `n` | cycle through the leader |
//! | `REPORT` | `n - 1` | every member to the leader |
//! | `COMMAND` | `n - 1` | leader fan-out, labelled `0..n-1` |
//!
//! The last member sends both its closing `RING` link and its `REPORT` to
//! the leader, so that pair of units carries two edges on one physical link.

use super::{Fold, TopologyKind, Wiring};
use crate::edge::{Channel, Link};
use crate::error::{Result, TopologyError};
use corelink_chip::ClusterIndexer;

/// Ring plus report/command channels rooted at offset 0 of each cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RingWithLeader;

impl Wiring for RingWithLeader {
    fn kind(&self) -> TopologyKind {
        TopologyKind::RingWithLeader
    }

    fn check_geometry(&self, indexer: &ClusterIndexer) -> Result<()> {
        if indexer.size() < 2 {
            return Err(TopologyError::invalid_argument(
                "ring with leader needs at least 2 units per cluster",
            ));
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
        let leader = fold.leader;

        if pos.is_last() {
            out.push(Link::new(index, indexer.wrap_next(index), Channel::Ring));
            out.push(Link::new(index, leader, Channel::Report));
            return;
        }

        out.push(Link::new(index, indexer.wrap_next(index), Channel::Ring));
        if pos.is_leader() {
            out.extend((1..indexer.size()).map(|offset| {
                Link::new(leader, pos.at(offset), Channel::Command).labelled(offset - 1)
            }));
        } else {
            out.push(Link::new(index, leader, Channel::Report));
        }
    }
}
