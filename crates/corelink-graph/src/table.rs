//! Collected edge set.
//!
//! The generator never stores edges. `EdgeTable` is the sink used by callers
//! (and the CLI) that want to inspect the emitted graph afterwards.

use crate::edge::{Channel, Edge, EdgeSink, Link};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Index-level edges for a unit list of known length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeTable {
    unit_count: usize,
    links: Vec<Link>,
}

impl EdgeTable {
    /// Empty table for `unit_count` slots.
    #[must_use]
    pub fn new(unit_count: usize) -> Self {
        Self {
            unit_count,
            links: Vec::new(),
        }
    }

    /// Table over an existing link list.
    #[must_use]
    pub fn from_links(unit_count: usize, links: Vec<Link>) -> Self {
        Self { unit_count, links }
    }

    /// Slots in the unit list the table was built for.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True if no edges were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// All edges in emission order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Append one edge.
    pub fn push(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Edges ending at `index`.
    pub fn incoming(&self, index: usize) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.destination == index)
    }

    /// Edges starting at `index`.
    pub fn outgoing(&self, index: usize) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.source == index)
    }

    /// Edges on one channel.
    pub fn on(&self, channel: Channel) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.channel == channel)
    }

    /// Edge count on one channel.
    #[must_use]
    pub fn count(&self, channel: Channel) -> usize {
        self.on(channel).count()
    }

    /// Edge count per channel present.
    #[must_use]
    pub fn summary(&self) -> BTreeMap<Channel, usize> {
        let mut counts = BTreeMap::new();
        for link in &self.links {
            *counts.entry(link.channel).or_insert(0) += 1;
        }
        counts
    }

    /// Edges whose source is also their destination.
    pub fn self_loops(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|l| l.source == l.destination)
    }

    /// Closed cycles formed by one channel.
    ///
    /// The channel is read as a successor function: the first outgoing edge
    /// of each unit on that channel. Each cycle starts at its lowest-indexed
    /// entry point; open paths are not reported.
    #[must_use]
    pub fn cycles(&self, channel: Channel) -> Vec<Vec<usize>> {
        let mut successor = BTreeMap::new();
        for link in self.on(channel) {
            successor.entry(link.source).or_insert(link.destination);
        }

        let mut cycles = Vec::new();
        let mut done = HashSet::new();
        for &start in successor.keys() {
            let mut path = Vec::new();
            let mut on_path = HashMap::new();
            let mut node = start;
            loop {
                if done.contains(&node) {
                    break;
                }
                if let Some(&at) = on_path.get(&node) {
                    cycles.push(path[at..].to_vec());
                    break;
                }
                on_path.insert(node, path.len());
                path.push(node);
                match successor.get(&node) {
                    Some(&next) => node = next,
                    None => break,
                }
            }
            done.extend(path);
        }
        cycles
    }
}

impl<U> EdgeSink<U> for EdgeTable {
    fn register(&mut self, edge: Edge<'_, U>) {
        self.push(edge.link);
    }
}

impl<'a> IntoIterator for &'a EdgeTable {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
