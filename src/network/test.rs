use crate::fixtures::{corridor, link_id, node_position, STEP};
use crate::network::{Network, NetworkError, Node, Scan};

use approx::assert_relative_eq;
use geo::Point;

#[test]
fn builds_corridor() {
    let network = corridor(4);

    assert_eq!(network.size(), 5);
    assert_eq!(network.link_count(), 4);

    let link = network.link(&link_id(2)).expect("link 2 must exist");
    assert_eq!(link.source.id, 2);
    assert_eq!(link.target.id, 3);
    assert_relative_eq!(link.length(), 111.19, max_relative = 0.01);

    let outgoing = network.outgoing(2).map(|link| link.id).collect::<Vec<_>>();
    assert_eq!(outgoing, vec![link_id(2)]);
}

#[test]
fn rejects_dangling_link() {
    let nodes = vec![Node::new(node_position(1), 1)];
    let result = Network::from_parts(nodes, vec![(10, 1, 2)]);

    assert!(matches!(
        result,
        Err(NetworkError::DanglingLink { link: 10, node: 2 })
    ));
}

#[test]
fn insertion_is_idempotent() {
    let mut network = Network::new();
    let first = network.insert_node(Node::new(node_position(1), 1));
    network.insert_node(Node::new(node_position(2), 2));

    // Revisiting a node keeps the original registration.
    let revisit = network.insert_node(Node::new(Point::new(50.0, 50.0), 1));
    assert_eq!(revisit, first);
    assert_eq!(network.size(), 2);

    assert!(network.insert_link(10, 1, 2).expect("nodes are registered"));
    assert!(!network.insert_link(10, 1, 2).expect("nodes are registered"));
    assert_eq!(network.link_count(), 1);
    assert_eq!(network.index().size(), 1);

    assert!(matches!(
        network.insert_link(20, 2, 3),
        Err(NetworkError::DanglingLink { link: 20, node: 3 })
    ));
}

#[test]
fn projects_onto_link() {
    let network = corridor(2);
    let link = network.link(&link_id(1)).expect("link 1 must exist");

    // Halfway along, roughly 55m north of the corridor.
    let projected = link.project(&Point::new(STEP / 2.0, 0.0005));
    assert_eq!(projected.link, link_id(1));
    assert_relative_eq!(projected.dist, link.length() / 2.0, max_relative = 0.01);
    assert_relative_eq!(projected.ref_dist, 55.6, max_relative = 0.01);

    // Behind the source, the projection clamps onto it.
    let clamped = link.project(&Point::new(-STEP, 0.0));
    assert_relative_eq!(clamped.dist, 0.0);
    assert_relative_eq!(clamped.ref_dist, link.length(), max_relative = 0.01);
}

#[test]
fn nearest_projected_sorted_by_offset() {
    let network = corridor(3);

    // Just past the middle of link 2, slightly off the corridor.
    let point = Point::new(STEP * 1.6, 0.0001);
    let found = network.nearest_projected_sorted(&point, 100.0);

    let links = found.iter().map(|p| p.link).collect::<Vec<_>>();
    assert_eq!(links.first(), Some(&link_id(2)));
    assert!(found.windows(2).all(|w| w[0].ref_dist <= w[1].ref_dist));
    assert!(found.iter().all(|p| p.ref_dist <= 100.0));

    // Nothing lies within a metre of a point far away.
    assert!(network
        .nearest_projected_sorted(&Point::new(1.0, 1.0), 1.0)
        .is_empty());
}

#[test]
fn reads_tables() {
    let nodes = "id,x,y\n1,0.0,0.0\n2,0.001,0.0\n3,0.002,0.0\n";
    let links = "id,source,target\n10,1,2\n20,2,3\n";

    let network = Network::from_readers(nodes.as_bytes(), links.as_bytes())
        .expect("tables must parse");

    assert_eq!(network.size(), 3);
    assert_eq!(network.link_count(), 2);
    assert_eq!(network.get_position(&2), Some(Point::new(0.001, 0.0)));
}
