// SPDX-License-Identifier: AGPL-3.0-only

//! Topology generation.
//!
//! A [`TopologyGenerator`] walks an ordered list of optional unit handles once
//! and yields the directed edges of the configured variant. Wiring is split by
//! variant behind the [`Wiring`] trait:
//!
//! | Variant | Module | Channels |
//! |---------|--------|----------|
//! | Ring | [`ring`] | `NEXT` |
//! | Ring with leader | [`leader`] | `RING`, `REPORT`, `COMMAND` |
//! | Pentagram | [`pentagram`] | seven arm/ring/centre channels |
//!
//! The only state carried across positions is [`Fold`]: the leader of the
//! cluster being wired and the pentagram arm counter. Empty slots (`None`)
//! are skipped. A list is validated in full before the first edge is
//! yielded, so a request that cannot close is rejected instead of producing a
//! partial graph.

pub mod leader;
pub mod pentagram;
pub mod ring;

use crate::edge::{Edge, EdgeSink, Link};
use crate::error::{Result, TopologyError};
use crate::table::EdgeTable;
use corelink_chip::{ClusterIndexer, CLUSTER_SIZE};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

pub use leader::RingWithLeader;
pub use pentagram::Pentagram;
pub use ring::Ring;

/// Topology variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TopologyKind {
    /// One closed cycle per cluster.
    #[default]
    Ring,
    /// Cycle plus report and command channels through the cluster leader.
    RingWithLeader,
    /// Five arm pairs, inner ring of five and a centre per 16-unit chip.
    Pentagram,
}

impl TopologyKind {
    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::RingWithLeader => "ring-with-leader",
            Self::Pentagram => "pentagram",
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for TopologyKind {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ring" | "circle" => Ok(Self::Ring),
            "leader" | "ring-with-leader" | "coordinator" => Ok(Self::RingWithLeader),
            "pentagram" | "star" => Ok(Self::Pentagram),
            other => Err(TopologyError::invalid_argument(format!(
                "unknown topology '{other}' (expected ring, ring-with-leader or pentagram)"
            ))),
        }
    }
}

/// Generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyConfig {
    /// Variant to wire.
    pub kind: TopologyKind,
    /// Units per cluster.
    pub cluster_size: usize,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            kind: TopologyKind::Ring,
            cluster_size: CLUSTER_SIZE,
        }
    }
}

impl TopologyConfig {
    /// Default configuration for a variant.
    #[must_use]
    pub fn for_kind(kind: TopologyKind) -> Self {
        Self::default().with_kind(kind)
    }

    /// Set the variant.
    #[must_use]
    pub fn with_kind(mut self, kind: TopologyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the cluster size.
    #[must_use]
    pub fn with_cluster_size(mut self, cluster_size: usize) -> Self {
        self.cluster_size = cluster_size;
        self
    }
}

/// Fold state threaded through the single forward pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fold {
    /// Global index of the leader of the cluster being wired.
    pub leader: usize,
    /// Arm positions processed so far in this cluster (pentagram only).
    pub counter: usize,
}

impl Fold {
    /// Move to the cluster starting at `start`, resetting the counter on change.
    pub fn enter(&mut self, start: usize) {
        if start != self.leader {
            self.leader = start;
            self.counter = 0;
        }
    }
}

/// Per-variant wiring strategy.
pub trait Wiring: fmt::Debug + Send + Sync {
    /// Variant implemented.
    fn kind(&self) -> TopologyKind;

    /// Reject cluster sizes the variant cannot wire.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the size does not fit the variant.
    fn check_geometry(&self, indexer: &ClusterIndexer) -> Result<()>;

    /// Append the links owed by the populated unit at `index`.
    ///
    /// `fold.leader` is already the leader of `index`'s cluster.
    fn links_from(
        &self,
        index: usize,
        indexer: &ClusterIndexer,
        fold: &mut Fold,
        out: &mut Vec<Link>,
    );
}

/// The three variants as one tagged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// See [`Ring`].
    Ring(Ring),
    /// See [`RingWithLeader`].
    RingWithLeader(RingWithLeader),
    /// See [`Pentagram`].
    Pentagram(Pentagram),
}

impl From<TopologyKind> for Topology {
    fn from(kind: TopologyKind) -> Self {
        match kind {
            TopologyKind::Ring => Self::Ring(Ring),
            TopologyKind::RingWithLeader => Self::RingWithLeader(RingWithLeader),
            TopologyKind::Pentagram => Self::Pentagram(Pentagram),
        }
    }
}

impl Topology {
    fn wiring(&self) -> &dyn Wiring {
        match self {
            Self::Ring(w) => w,
            Self::RingWithLeader(w) => w,
            Self::Pentagram(w) => w,
        }
    }
}

impl Wiring for Topology {
    fn kind(&self) -> TopologyKind {
        self.wiring().kind()
    }

    fn check_geometry(&self, indexer: &ClusterIndexer) -> Result<()> {
        self.wiring().check_geometry(indexer)
    }

    fn links_from(
        &self,
        index: usize,
        indexer: &ClusterIndexer,
        fold: &mut Fold,
        out: &mut Vec<Link>,
    ) {
        self.wiring().links_from(index, indexer, fold, out);
    }
}

/// Validating edge generator for one configuration.
///
/// Generation is restartable: every call to [`edges`](Self::edges) starts a
/// fresh pass over the caller's list.
#[derive(Debug, Clone, Copy)]
pub struct TopologyGenerator {
    config: TopologyConfig,
    indexer: ClusterIndexer,
    topology: Topology,
}

impl TopologyGenerator {
    /// Create a generator, checking the cluster size against the variant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a zero cluster size, a ring cluster
    /// smaller than two, or a pentagram chip that is not 16 units.
    pub fn new(config: TopologyConfig) -> Result<Self> {
        let indexer = ClusterIndexer::new(config.cluster_size)
            .ok_or_else(|| TopologyError::invalid_argument("cluster size must be positive"))?;
        let topology = Topology::from(config.kind);
        topology.check_geometry(&indexer)?;

        debug!(
            "Topology generator: {} with cluster size {}",
            config.kind, config.cluster_size
        );

        Ok(Self {
            config,
            indexer,
            topology,
        })
    }

    /// Generator for a variant with 16-unit clusters.
    ///
    /// # Errors
    ///
    /// Never fails for the standard chip size; kept fallible for symmetry with
    /// [`new`](Self::new).
    pub fn for_kind(kind: TopologyKind) -> Result<Self> {
        Self::new(TopologyConfig::for_kind(kind))
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &TopologyConfig {
        &self.config
    }

    /// Variant in use.
    #[must_use]
    pub const fn kind(&self) -> TopologyKind {
        self.config.kind
    }

    /// Cluster index arithmetic in use.
    #[must_use]
    pub const fn indexer(&self) -> &ClusterIndexer {
        &self.indexer
    }

    /// Check that `units` can be wired without dangling links.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when the list length is not a whole number of clusters.
    /// - `InconsistentTopology` when a populated unit would link to an empty slot.
    pub fn validate<U>(&self, units: &[Option<U>]) -> Result<()> {
        let (clusters, remainder) = self.indexer.split(units.len());
        if remainder != 0 {
            warn!(
                "Rejecting {} units: {} full clusters of {} plus {} left over",
                units.len(),
                clusters,
                self.indexer.size(),
                remainder
            );
            return Err(TopologyError::invalid_argument(format!(
                "unit list length {} is not a multiple of the cluster size {}",
                units.len(),
                self.indexer.size()
            )));
        }

        let mut fold = Fold::default();
        let mut scratch = Vec::new();
        for index in populated(units) {
            fold.enter(self.indexer.cluster_start(index));
            scratch.clear();
            self.topology.links_from(index, &self.indexer, &mut fold, &mut scratch);

            for link in &scratch {
                for end in [link.source, link.destination] {
                    if !is_populated(units, end) {
                        warn!(
                            "Unit {} cannot place its {} link: slot {} is empty",
                            index, link.channel, end
                        );
                        return Err(TopologyError::inconsistent(index, end, link.channel));
                    }
                }
            }
        }

        debug!(
            "Validated {} units ({} clusters) for {}",
            units.len(),
            clusters,
            self.config.kind
        );
        Ok(())
    }

    /// Validate `units`, then return a lazy pass over their edges.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn edges<'a, U>(&'a self, units: &'a [Option<U>]) -> Result<Edges<'a, U>> {
        self.validate(units)?;
        Ok(Edges {
            generator: self,
            units,
            cursor: 0,
            fold: Fold::default(),
            pending: Vec::new(),
            next: 0,
        })
    }

    /// Register every edge of `units` with `sink`; returns the edge count.
    ///
    /// Nothing is registered when validation fails.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn emit<U, S>(&self, units: &[Option<U>], sink: &mut S) -> Result<usize>
    where
        S: EdgeSink<U> + ?Sized,
    {
        let mut count = 0;
        for edge in self.edges(units)? {
            sink.register(edge);
            count += 1;
        }
        debug!("Emitted {} {} edges", count, self.config.kind);
        Ok(count)
    }

    /// Collect the edges of `units` into an [`EdgeTable`].
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn table<U>(&self, units: &[Option<U>]) -> Result<EdgeTable> {
        let mut table = EdgeTable::new(units.len());
        self.emit(units, &mut table)?;
        Ok(table)
    }
}

/// Lazy, finite pass over the edges of one unit list.
#[derive(Debug)]
pub struct Edges<'a, U> {
    generator: &'a TopologyGenerator,
    units: &'a [Option<U>],
    cursor: usize,
    fold: Fold,
    pending: Vec<Link>,
    next: usize,
}

impl<'a, U> Iterator for Edges<'a, U> {
    type Item = Edge<'a, U>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&link) = self.pending.get(self.next) {
                self.next += 1;
                let units = self.units;
                let source = units.get(link.source).and_then(Option::as_ref);
                let destination = units.get(link.destination).and_then(Option::as_ref);
                // endpoints were checked by validate(); never hand out a dangling edge
                if let (Some(source), Some(destination)) = (source, destination) {
                    return Some(Edge {
                        source,
                        destination,
                        link,
                    });
                }
                continue;
            }

            let index = self.cursor;
            let slot = self.units.get(index)?;
            self.cursor += 1;
            if slot.is_none() {
                continue;
            }

            let generator = self.generator;
            let indexer = &generator.indexer;
            self.fold.enter(indexer.cluster_start(index));
            self.pending.clear();
            self.next = 0;
            generator.topology.links_from(index, indexer, &mut self.fold, &mut self.pending);
        }
    }
}

fn populated<U>(units: &[Option<U>]) -> impl Iterator<Item = usize> + '_ {
    units
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.as_ref().map(|_| i))
}

fn is_populated<U>(units: &[Option<U>], index: usize) -> bool {
    units.get(index).is_some_and(Option::is_some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Channel;

    fn full(n: usize) -> Vec<Option<usize>> {
        (0..n).map(Some).collect()
    }

    #[test]
    fn kind_parses_aliases() {
        assert_eq!("ring".parse::<TopologyKind>().unwrap(), TopologyKind::Ring);
        assert_eq!(
            "Leader".parse::<TopologyKind>().unwrap(),
            TopologyKind::RingWithLeader
        );
        assert_eq!(
            "pentagram".parse::<TopologyKind>().unwrap(),
            TopologyKind::Pentagram
        );
        assert!(matches!(
            "mesh".parse::<TopologyKind>(),
            Err(TopologyError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn fold_resets_counter_on_new_cluster() {
        let mut fold = Fold::default();
        fold.counter = 7;
        fold.enter(0);
        assert_eq!(fold.counter, 7);
        fold.enter(16);
        assert_eq!(
            fold,
            Fold {
                leader: 16,
                counter: 0
            }
        );
    }

    #[test]
    fn zero_cluster_size_rejected() {
        let config = TopologyConfig::default().with_cluster_size(0);
        let err = TopologyGenerator::new(config).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidArgument { .. }));
    }

    #[test]
    fn remainder_cluster_rejected() {
        let generator = TopologyGenerator::for_kind(TopologyKind::Ring).unwrap();
        let err = generator.validate(&full(20)).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidArgument { .. }));
    }

    #[test]
    fn edges_are_restartable() {
        let generator = TopologyGenerator::for_kind(TopologyKind::RingWithLeader).unwrap();
        let units = full(32);
        let first: Vec<Link> = generator.edges(&units).unwrap().map(|e| e.link).collect();
        let second: Vec<Link> = generator.edges(&units).unwrap().map(|e| e.link).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn edge_handles_match_indices() {
        let generator = TopologyGenerator::for_kind(TopologyKind::Pentagram).unwrap();
        let units = full(16);
        for edge in generator.edges(&units).unwrap() {
            assert_eq!(*edge.source, edge.link.source);
            assert_eq!(*edge.destination, edge.link.destination);
        }
    }

    #[test]
    fn failed_validation_registers_nothing() {
        let generator = TopologyGenerator::for_kind(TopologyKind::Ring).unwrap();
        let mut units = full(16);
        units[9] = None;
        let mut sink: Vec<Link> = Vec::new();
        let err = generator.emit(&units, &mut sink).unwrap_err();
        assert_eq!(err, TopologyError::inconsistent(8, 9, Channel::Next));
        assert!(sink.is_empty());
    }
}
