//! Ring: one closed cycle per cluster.
//!
//! ```text
//!   [00]--[01]--[02]--[03]--[04]
//!    |                        |
//!   [15]                    [05]
//!    |                        |
//!   [14]                    [06]
//!    |                        |
//!   [13]                    [07]
//!    |                        |
//!   [12]--[11]--[10]--[09]--[08]
//! ```

use super::{Fold, TopologyKind, Wiring};
use crate::edge::{Channel, Link};
use crate::error::{Result, TopologyError};
use corelink_chip::ClusterIndexer;

/// Each unit links to the next unit of its cluster; the last wraps to the leader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ring;

impl Wiring for Ring {
    fn kind(&self) -> TopologyKind {
        TopologyKind::Ring
    }

    fn check_geometry(&self, indexer: &ClusterIndexer) -> Result<()> {
        if indexer.size() < 2 {
            return Err(TopologyError::invalid_argument(
                "ring needs at least 2 units per cluster",
            ));
        }
        Ok(())
    }

    fn links_from(
        &self,
        index: usize,
        indexer: &ClusterIndexer,
        _fold: &mut Fold,
        out: &mut Vec<Link>,
    ) {
        out.push(Link::new(index, indexer.wrap_next(index), Channel::Next));
    }
}
