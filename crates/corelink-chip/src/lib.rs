// SPDX-License-Identifier: AGPL-3.0-only

//! Cluster geometry for pools of homogeneous processing units.
//!
//! This crate has **no dependencies** and does no I/O. It is a pure model of
//! how units are grouped: fixed-size clusters (16 units per chip), the
//! position of a unit inside its cluster, and the wraparound arithmetic that
//! every topology builder relies on.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`cluster`] | `ClusterIndexer`, `ClusterPosition`, `SubRing` |
//! | [`pentagram`] | Role map for the five-arm star layout of one chip |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cluster;
pub mod pentagram;

pub use cluster::{ClusterIndexer, ClusterPosition, SubRing, CLUSTER_SIZE};
pub use pentagram::PentagramRole;
