// SPDX-License-Identifier: AGPL-3.0-only

//! Deterministic interconnect topologies over clustered processing units.
//!
//! Given an ordered list of optional unit handles, a [`TopologyGenerator`]
//! yields every directed edge of the configured variant, using the cluster
//! arithmetic from `corelink-chip` for all boundary wraparound.
//!
//! # Quick start
//!
//! ```
//! use corelink_graph::{Channel, TopologyGenerator, TopologyKind};
//!
//! # fn main() -> corelink_graph::Result<()> {
//! let units: Vec<Option<u32>> = (0..32).map(Some).collect();
//! let generator = TopologyGenerator::for_kind(TopologyKind::RingWithLeader)?;
//!
//! let table = generator.table(&units)?;
//! assert_eq!(table.count(Channel::Ring), 32);
//! assert_eq!(table.count(Channel::Command), 30);
//! assert_eq!(table.cycles(Channel::Ring).len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Variants
//!
//! | Variant | Edges per full cluster of 16 |
//! |---------|------------------------------|
//! | Ring | 16 `NEXT` |
//! | Ring with leader | 16 `RING`, 15 `REPORT`, 15 `COMMAND` |
//! | Pentagram | 10 + 10 + 10 arm links, 5 each of ring left/right/centre and centre/ring |

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod edge;
mod error;
mod table;
pub mod topology;
mod unit;

pub use corelink_chip::{ClusterIndexer, ClusterPosition, CLUSTER_SIZE};
pub use edge::{Channel, Edge, EdgeSink, Link};
pub use error::{Result, TopologyError};
pub use table::EdgeTable;
pub use topology::{Edges, TopologyConfig, TopologyGenerator, TopologyKind};
pub use unit::{NeighbourStates, UnitState};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        Channel, EdgeSink, EdgeTable, Link, NeighbourStates, Result, TopologyConfig,
        TopologyError, TopologyGenerator, TopologyKind, UnitState,
    };
}
