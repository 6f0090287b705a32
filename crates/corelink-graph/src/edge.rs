// SPDX-License-Identifier: AGPL-3.0-only

//! Channel kinds and edge descriptors.
//!
//! The generators work on [`Link`]s (index pairs) and resolve them to
//! [`Edge`]s (handle pairs) only at emission time. Neither is stored by the
//! generator; the caller's [`EdgeSink`] owns whatever it keeps.

use crate::topology::TopologyKind;
use std::fmt;

/// Directed channel kind carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Ring: unit to the next unit of its cluster.
    Next,
    /// Ring with leader: ring link to the next member.
    Ring,
    /// Ring with leader: member reporting to its leader.
    Report,
    /// Ring with leader: leader commanding a member.
    Command,
    /// Pentagram: arm unit to its pair partner.
    ClusterCluster,
    /// Pentagram: arm unit to its ring slot.
    ClusterRing,
    /// Pentagram: ring slot back to an arm unit.
    RingCluster,
    /// Pentagram: ring unit to its left ring neighbour.
    RingLeft,
    /// Pentagram: ring unit to its right ring neighbour.
    RingRight,
    /// Pentagram: ring unit to the centre.
    RingCentre,
    /// Pentagram: centre to a ring unit.
    CentreRing,
}

impl Channel {
    /// Every channel, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Next,
        Self::Ring,
        Self::Report,
        Self::Command,
        Self::ClusterCluster,
        Self::ClusterRing,
        Self::RingCluster,
        Self::RingLeft,
        Self::RingRight,
        Self::RingCentre,
        Self::CentreRing,
    ];

    /// Upper-snake name, e.g. `RING_CENTRE`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Next => "NEXT",
            Self::Ring => "RING",
            Self::Report => "REPORT",
            Self::Command => "COMMAND",
            Self::ClusterCluster => "CLUSTER_CLUSTER",
            Self::ClusterRing => "CLUSTER_RING",
            Self::RingCluster => "RING_CLUSTER",
            Self::RingLeft => "RING_LEFT",
            Self::RingRight => "RING_RIGHT",
            Self::RingCentre => "RING_CENTRE",
            Self::CentreRing => "CENTRE_RING",
        }
    }

    /// Topology variant that emits this channel.
    #[must_use]
    pub const fn topology(self) -> TopologyKind {
        match self {
            Self::Next => TopologyKind::Ring,
            Self::Ring | Self::Report | Self::Command => TopologyKind::RingWithLeader,
            _ => TopologyKind::Pentagram,
        }
    }

    /// Outgoing routing partition the edge belongs to.
    ///
    /// Ring-with-leader units keep one partition per logical channel; the
    /// other variants send everything on a single `TRANSMISSION` partition.
    #[must_use]
    pub const fn partition(self) -> &'static str {
        match self {
            Self::Ring => "RING",
            Self::Report => "REPORT",
            Self::Command => "COMMAND",
            _ => "TRANSMISSION",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Index-level edge: global unit indices plus channel and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    /// Source unit index.
    pub source: usize,
    /// Destination unit index.
    pub destination: usize,
    /// Channel kind.
    pub channel: Channel,
    /// Disambiguating label (COMMAND fan-out position, CENTRE_RING slot, else 0).
    pub label: usize,
}

impl Link {
    /// Unlabelled link.
    #[must_use]
    pub const fn new(source: usize, destination: usize, channel: Channel) -> Self {
        Self {
            source,
            destination,
            channel,
            label: 0,
        }
    }

    /// Same link with a label.
    #[must_use]
    pub const fn labelled(mut self, label: usize) -> Self {
        self.label = label;
        self
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>5} -> {:<5} {:<15} {}",
            self.source, self.destination, self.channel, self.label
        )
    }
}

/// Edge descriptor handed to the caller: borrowed unit handles plus the link.
#[derive(Debug)]
pub struct Edge<'a, U> {
    /// Source unit handle.
    pub source: &'a U,
    /// Destination unit handle.
    pub destination: &'a U,
    /// Indices, channel and label.
    pub link: Link,
}

impl<U> Edge<'_, U> {
    /// Channel kind.
    #[must_use]
    pub fn channel(&self) -> Channel {
        self.link.channel
    }

    /// Disambiguating label.
    #[must_use]
    pub fn label(&self) -> usize {
        self.link.label
    }
}

impl<U> Clone for Edge<'_, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Edge<'_, U> {}

/// Receiver for emitted edges: the placement/routing side's register-edge call.
pub trait EdgeSink<U> {
    /// Register one directed edge.
    fn register(&mut self, edge: Edge<'_, U>);
}

impl<U> EdgeSink<U> for Vec<Link> {
    fn register(&mut self, edge: Edge<'_, U>) {
        self.push(edge.link);
    }
}
