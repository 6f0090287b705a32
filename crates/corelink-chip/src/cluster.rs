// SPDX-License-Identifier: AGPL-3.0-only

//! Cluster index arithmetic.
//!
//! A unit list is read as consecutive blocks of `cluster_size` positions.
//! Global index `i` sits at offset `i % size` of the cluster starting at
//! `i - i % size`. Offset 0 is the cluster leader.
//!
//! ```text
//!  global   0  1  2 ... 15 | 16 17 ... 31 | 32 ...
//!  offset   0  1  2 ... 15 |  0  1 ... 15 |  0 ...
//!  start    0  0  0 ...  0 | 16 16 ... 16 | 32 ...
//! ```
//!
//! All wraparound in the topology builders goes through [`ClusterIndexer`]
//! and [`SubRing`]; nothing else computes `% size` on unit indices.

/// Units per cluster (one chip).
pub const CLUSTER_SIZE: usize = 16;

/// Where a global index falls inside its cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterPosition {
    /// Offset within the cluster, `0..size`.
    pub offset: usize,
    /// Global index of the cluster leader (offset 0).
    pub start: usize,
    /// Cluster size the position was computed against.
    pub size: usize,
}

impl ClusterPosition {
    /// True for offset 0.
    #[must_use]
    pub const fn is_leader(&self) -> bool {
        self.offset == 0
    }

    /// True for the final offset (`size - 1`).
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.offset + 1 == self.size
    }

    /// Zero-based cluster number (`start / size`).
    #[must_use]
    pub const fn cluster(&self) -> usize {
        self.start / self.size
    }

    /// Global index of an offset in the same cluster.
    #[must_use]
    pub const fn at(&self, offset: usize) -> usize {
        self.start + offset
    }
}

/// Maps global unit indices onto fixed-size clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterIndexer {
    size: usize,
}

impl ClusterIndexer {
    /// Indexer for the standard 16-unit chip.
    pub const CHIP: Self = Self { size: CLUSTER_SIZE };

    /// Indexer for an arbitrary cluster size. `None` when `size` is 0.
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            Some(Self { size })
        }
    }

    /// Cluster size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Full position record for `index`.
    #[must_use]
    pub const fn position(&self, index: usize) -> ClusterPosition {
        let offset = self.offset(index);
        ClusterPosition {
            offset,
            start: index - offset,
            size: self.size,
        }
    }

    /// `index mod size`.
    #[must_use]
    pub const fn offset(&self, index: usize) -> usize {
        index % self.size
    }

    /// Global index of the leader of `index`'s cluster.
    #[must_use]
    pub const fn cluster_start(&self, index: usize) -> usize {
        index - self.offset(index)
    }

    /// Offset 0?
    #[must_use]
    pub const fn is_leader(&self, index: usize) -> bool {
        self.offset(index) == 0
    }

    /// Offset `size - 1`?
    #[must_use]
    pub const fn is_last_in_cluster(&self, index: usize) -> bool {
        self.offset(index) + 1 == self.size
    }

    /// Next position in the same cluster, wrapping the last back to the leader.
    #[must_use]
    pub const fn wrap_next(&self, index: usize) -> usize {
        self.cluster_start(index) + (self.offset(index) + 1) % self.size
    }

    /// Previous position in the same cluster, wrapping the leader to the last.
    #[must_use]
    pub const fn wrap_prev(&self, index: usize) -> usize {
        self.cluster_start(index) + (self.offset(index) + self.size - 1) % self.size
    }

    /// Number of whole clusters covering `len` units, and the leftover count.
    #[must_use]
    pub const fn split(&self, len: usize) -> (usize, usize) {
        (len / self.size, len % self.size)
    }

    /// True when `len` divides into whole clusters.
    #[must_use]
    pub const fn divides(&self, len: usize) -> bool {
        len % self.size == 0
    }
}

impl Default for ClusterIndexer {
    fn default() -> Self {
        Self::CHIP
    }
}

/// A narrower wrapping index space inside a cluster: offsets
/// `first..first + len`, e.g. the five ring slots `10..=14` of a pentagram chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubRing {
    /// First cluster offset in the ring.
    pub first: usize,
    /// Number of slots.
    pub len: usize,
}

impl SubRing {
    /// Sub-ring over `first..first + len`. `None` when `len` is 0.
    #[must_use]
    pub const fn new(first: usize, len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self { first, len })
        }
    }

    /// Does the cluster offset fall inside this ring?
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.first && offset < self.first + self.len
    }

    /// Slot number `0..len` of a cluster offset inside the ring.
    #[must_use]
    pub const fn slot(&self, offset: usize) -> usize {
        offset - self.first
    }

    /// Right-hand neighbour of `index`, wrapping inside the ring only.
    /// `start` is the global index of the owning cluster's leader.
    #[must_use]
    pub const fn wrap_next(&self, start: usize, index: usize) -> usize {
        let slot = self.slot(index - start);
        start + self.first + (slot + 1) % self.len
    }

    /// Left-hand neighbour of `index`, wrapping inside the ring only.
    #[must_use]
    pub const fn wrap_prev(&self, start: usize, index: usize) -> usize {
        let slot = self.slot(index - start);
        start + self.first + (slot + self.len - 1) % self.len
    }

    /// Global indices of every slot for the cluster starting at `start`.
    pub fn members(&self, start: usize) -> impl Iterator<Item = usize> {
        let first = start + self.first;
        first..first + self.len
    }
}
