//! Whole-list properties of the three topology variants

use corelink_graph::{
    Channel, EdgeTable, Link, NeighbourStates, TopologyConfig, TopologyError, TopologyGenerator,
    TopologyKind,
};
use std::collections::HashSet;

fn units(n: usize) -> Vec<Option<usize>> {
    (0..n).map(Some).collect()
}

fn table(kind: TopologyKind, units: &[Option<usize>]) -> EdgeTable {
    TopologyGenerator::for_kind(kind)
        .expect("generator")
        .table(units)
        .expect("valid unit list")
}

#[test]
fn ring_forms_one_cycle_per_cluster() {
    for clusters in 1..=4 {
        let n = clusters * 16;
        let t = table(TopologyKind::Ring, &units(n));
        assert_eq!(t.len(), n);

        for link in t.links() {
            let start = link.source - link.source % 16;
            assert!((start..start + 16).contains(&link.destination));
        }

        let cycles = t.cycles(Channel::Next);
        assert_eq!(cycles.len(), clusters);
        assert!(cycles.iter().all(|c| c.len() == 16));
        assert_eq!(t.self_loops().count(), 0);
    }
}

#[test]
fn ring_with_leader_channel_counts() {
    for clusters in 1..=3 {
        let n = clusters * 16;
        let t = table(TopologyKind::RingWithLeader, &units(n));
        assert_eq!(t.count(Channel::Ring), n);
        assert_eq!(t.count(Channel::Report), n - n / 16);
        assert_eq!(t.count(Channel::Command), 15 * n / 16);
        assert_eq!(t.len(), n + (n - n / 16) + 15 * n / 16);

        let cycles = t.cycles(Channel::Ring);
        assert_eq!(cycles.len(), clusters);
        assert!(cycles.iter().all(|c| c.len() == 16 && c[0] % 16 == 0));
    }
}

#[test]
fn every_member_reports_and_is_commanded() {
    let t = table(TopologyKind::RingWithLeader, &units(32));
    for member in (1..16).chain(17..32) {
        let leader = member - member % 16;
        let reports: Vec<&Link> = t
            .outgoing(member)
            .filter(|l| l.channel == Channel::Report)
            .collect();
        assert_eq!(reports.len(), 1, "member {member}");
        assert_eq!(reports[0].destination, leader);

        let commands: Vec<&Link> = t
            .incoming(member)
            .filter(|l| l.channel == Channel::Command)
            .collect();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].source, leader);
        assert_eq!(commands[0].label, member % 16 - 1);
    }
    assert!(t.outgoing(0).all(|l| l.channel != Channel::Report));
}

#[test]
fn pentagram_counts_per_chip() {
    for chips in 1..=5 {
        let t = table(TopologyKind::Pentagram, &units(chips * 16));
        let expect = [
            (Channel::ClusterCluster, 10),
            (Channel::ClusterRing, 10),
            (Channel::RingCluster, 10),
            (Channel::RingLeft, 5),
            (Channel::RingRight, 5),
            (Channel::RingCentre, 5),
            (Channel::CentreRing, 5),
        ];
        for (channel, per_chip) in expect {
            assert_eq!(t.count(channel), per_chip * chips, "{channel}");
        }
        assert_eq!(t.len(), 50 * chips);
        assert_eq!(t.cycles(Channel::RingRight).len(), chips);
        assert!(t.cycles(Channel::RingRight).iter().all(|c| c.len() == 5));
    }
}

#[test]
fn pentagram_links_stay_inside_their_chip() {
    let t = table(TopologyKind::Pentagram, &units(80));
    for link in t.links() {
        assert_eq!(link.source / 16, link.destination / 16, "{link}");
    }
    assert_eq!(t.self_loops().count(), 0);
}

#[test]
fn empty_list_yields_no_edges() {
    let empty: Vec<Option<usize>> = Vec::new();
    for kind in [
        TopologyKind::Ring,
        TopologyKind::RingWithLeader,
        TopologyKind::Pentagram,
    ] {
        let generator = TopologyGenerator::for_kind(kind).unwrap();
        assert_eq!(generator.edges(&empty).unwrap().count(), 0);
    }
}

#[test]
fn empty_cluster_is_skipped() {
    let mut list = units(48);
    for slot in &mut list[16..32] {
        *slot = None;
    }
    for kind in [
        TopologyKind::Ring,
        TopologyKind::RingWithLeader,
        TopologyKind::Pentagram,
    ] {
        let t = table(kind, &list);
        let untouched: HashSet<usize> = (16..32).collect();
        assert!(t
            .links()
            .iter()
            .all(|l| !untouched.contains(&l.source) && !untouched.contains(&l.destination)));
        let full = table(kind, &units(16)).len();
        assert_eq!(t.len(), 2 * full, "{kind}");
    }
}

#[test]
fn partially_empty_cluster_is_rejected() {
    let mut list = units(32);
    list[31] = None;

    let ring = TopologyGenerator::for_kind(TopologyKind::Ring).unwrap();
    assert_eq!(
        ring.validate(&list),
        Err(TopologyError::InconsistentTopology {
            unit: 30,
            missing: 31,
            channel: Channel::Next,
        })
    );

    let leader = TopologyGenerator::for_kind(TopologyKind::RingWithLeader).unwrap();
    assert_eq!(
        leader.validate(&list),
        Err(TopologyError::InconsistentTopology {
            unit: 16,
            missing: 31,
            channel: Channel::Command,
        })
    );

    let pentagram = TopologyGenerator::for_kind(TopologyKind::Pentagram).unwrap();
    assert!(matches!(
        pentagram.validate(&list),
        Err(TopologyError::InconsistentTopology { missing: 31, .. })
    ));
}

#[test]
fn empty_leader_slot_is_rejected() {
    let mut list = units(32);
    list[16] = None;

    let leader = TopologyGenerator::for_kind(TopologyKind::RingWithLeader).unwrap();
    assert_eq!(
        leader.validate(&list),
        Err(TopologyError::InconsistentTopology {
            unit: 17,
            missing: 16,
            channel: Channel::Report,
        })
    );
}

#[test]
fn pentagram_counter_skips_empty_arm_pair() {
    let mut list = units(32);
    list[0] = None;
    list[1] = None;

    let t = table(TopologyKind::Pentagram, &list);
    assert_eq!(t.len(), 94);
    for link in t.links() {
        assert!(link.source > 1 && link.destination > 1, "{link}");
    }

    let to_ring = |chip: usize| -> Vec<usize> {
        t.on(Channel::ClusterRing)
            .filter(|l| l.source / 16 == chip)
            .map(|l| l.destination)
            .collect()
    };
    assert_eq!(to_ring(0), vec![10, 10, 11, 11, 12, 12, 13, 13]);
    assert_eq!(to_ring(1), vec![26, 26, 27, 27, 28, 28, 29, 29, 30, 30]);
    assert!(t.outgoing(14).all(|l| l.channel != Channel::RingCluster));
}

#[test]
fn pentagram_rejects_half_empty_arm_pair() {
    let mut list = units(32);
    list[3] = None;

    let pentagram = TopologyGenerator::for_kind(TopologyKind::Pentagram).unwrap();
    assert_eq!(
        pentagram.validate(&list),
        Err(TopologyError::InconsistentTopology {
            unit: 2,
            missing: 3,
            channel: Channel::ClusterCluster,
        })
    );
}

#[test]
fn length_must_fill_whole_clusters() {
    for kind in [
        TopologyKind::Ring,
        TopologyKind::RingWithLeader,
        TopologyKind::Pentagram,
    ] {
        let generator = TopologyGenerator::for_kind(kind).unwrap();
        assert!(matches!(
            generator.validate(&units(24)),
            Err(TopologyError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn custom_cluster_size_ring() {
    let config = TopologyConfig::for_kind(TopologyKind::RingWithLeader)
        .with_cluster_size(4);
    let generator = TopologyGenerator::new(config).unwrap();
    let t = generator.table(&units(12)).unwrap();
    assert_eq!(t.count(Channel::Ring), 12);
    assert_eq!(t.count(Channel::Report), 9);
    assert_eq!(t.count(Channel::Command), 9);
    assert_eq!(
        t.cycles(Channel::Ring),
        vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9, 10, 11]]
    );

    let config = TopologyConfig::for_kind(TopologyKind::Pentagram)
        .with_cluster_size(4);
    assert!(matches!(
        TopologyGenerator::new(config),
        Err(TopologyError::InvalidArgument { .. })
    ));
}

#[test]
fn neighbour_states_on_ring() {
    let mut list: Vec<Option<bool>> = vec![Some(true); 16];
    list[3] = Some(false);
    let generator = TopologyGenerator::for_kind(TopologyKind::Ring).unwrap();
    let t = generator.table(&list).unwrap();

    assert_eq!(
        NeighbourStates::tally(&t, &list, 4),
        NeighbourStates { alive: 0, dead: 1 }
    );
    assert_eq!(
        NeighbourStates::tally(&t, &list, 0),
        NeighbourStates { alive: 1, dead: 0 }
    );
}

#[test]
fn emit_into_vec_sink() {
    let generator = TopologyGenerator::for_kind(TopologyKind::Ring).unwrap();
    let list = units(16);
    let mut sink: Vec<Link> = Vec::new();
    let count = generator.emit(&list, &mut sink).unwrap();
    assert_eq!(count, 16);
    assert_eq!(sink[15], Link::new(15, 0, Channel::Next));
}
