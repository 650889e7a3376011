use hn_substrate_designer::core::dense_candidates;
use hn_substrate_designer::{Connection, ConnectionToggle, GridPoint, Layer, NodeKind, Substrate};

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

fn pairs(substrate: &Substrate) -> Vec<(GridPoint, GridPoint)> {
    substrate
        .connections_iter()
        .map(|c| (c.from, c.to))
        .collect()
}

#[test]
fn test_toggle_sequence_never_stores_both_directions() {
    let mut substrate = Substrate::new();
    let clicks = [
        (p(0, 0), p(1, 1)),
        (p(1, 1), p(0, 0)),
        (p(1, 1), p(0, 0)),
        (p(2, 0), p(1, 1)),
        (p(0, 0), p(1, 1)),
        (p(1, 1), p(2, 0)),
        (p(1, 1), p(2, 0)),
    ];

    for (a, b) in clicks {
        substrate.toggle_connection(a, b);
        let stored = pairs(&substrate);
        for (from, to) in &stored {
            assert!(!stored.contains(&(*to, *from)), "beide Richtungen gespeichert");
        }
    }

    assert_eq!(pairs(&substrate), vec![(p(1, 1), p(2, 0))]);
}

#[test]
fn test_double_toggle_restores_connection_set() {
    let mut substrate = Substrate::new();
    substrate.toggle_connection(p(0, 0), p(0, 1));
    substrate.toggle_connection(p(0, 1), p(0, 2));
    let before = pairs(&substrate);

    assert_eq!(substrate.toggle_connection(p(5, 5), p(-1, 2)), ConnectionToggle::Added);
    assert_eq!(substrate.toggle_connection(p(-1, 2), p(5, 5)), ConnectionToggle::Removed);

    assert_eq!(pairs(&substrate), before);
}

#[test]
fn test_hidden_nodes_are_disjoint_from_explicit_nodes() {
    let mut substrate = Substrate::new();
    substrate.toggle_node(NodeKind::Input, p(0, -2));
    substrate.toggle_node(NodeKind::Input, p(1, -2));
    substrate.toggle_node(NodeKind::Output, p(0, 2));
    substrate.add_dense_connections(&[p(0, -2), p(1, -2), p(0, 0), p(1, 0), p(0, 2)]);

    let hidden = substrate.hidden_nodes();
    assert_eq!(hidden, vec![p(0, 0), p(1, 0)]);
    for point in &hidden {
        assert!(!substrate.is_explicit_node(*point));
    }

    // Jeder Verbindungsendpunkt ist entweder explizit oder hidden
    for connection in substrate.connections_iter() {
        for endpoint in connection.endpoints() {
            assert!(substrate.is_explicit_node(endpoint) || hidden.contains(&endpoint));
        }
    }
}

#[test]
fn test_node_can_be_input_and_output_at_once() {
    let mut substrate = Substrate::new();
    substrate.toggle_node(NodeKind::Input, p(3, 3));
    substrate.toggle_node(NodeKind::Output, p(3, 3));

    assert!(substrate.input_nodes().contains(&p(3, 3)));
    assert!(substrate.output_nodes().contains(&p(3, 3)));
}

#[test]
fn test_layer_inference_groups_rows_top_down() {
    let layer = Layer::from_selection(&[p(0, 2), p(1, 2), p(0, 0)]).expect("Layer erwartet");
    assert_eq!(layer.shape, vec![2, 1]);
    assert_eq!(layer.nodes, vec![p(0, 2), p(1, 2), p(0, 0)]);
}

#[test]
fn test_dense_selection_skips_same_row() {
    assert_eq!(
        dense_candidates(&[p(0, 0), p(1, 0), p(0, 1)]),
        vec![
            Connection::new(p(0, 0), p(0, 1)),
            Connection::new(p(1, 0), p(0, 1)),
        ]
    );
}

#[test]
fn test_dense_rerun_adds_nothing() {
    let mut substrate = Substrate::new();
    let selection = [p(0, 0), p(1, 0), p(0, 1)];

    assert_eq!(substrate.add_dense_connections(&selection), 2);
    assert_eq!(substrate.add_dense_connections(&selection), 0);
    assert_eq!(substrate.connection_count(), 2);
}

#[test]
fn test_dense_respects_existing_reverse_connection() {
    let mut substrate = Substrate::new();
    substrate.toggle_connection(p(0, 1), p(0, 0));

    assert_eq!(substrate.add_dense_connections(&[p(0, 0), p(0, 1)]), 0);
    assert_eq!(pairs(&substrate), vec![(p(0, 1), p(0, 0))]);
}

#[test]
fn test_layers_may_overlap() {
    let mut substrate = Substrate::new();
    let first = Layer::from_selection(&[p(0, 0), p(1, 0)]).expect("Layer erwartet");
    let second = Layer::from_selection(&[p(1, 0), p(2, 0)]).expect("Layer erwartet");
    substrate.push_layer(first);
    substrate.push_layer(second);

    assert_eq!(substrate.layers().len(), 2);
    assert!(substrate.is_in_any_layer(p(1, 0)));
}
