use hn_substrate_designer::{
    save_substrate_file, write_substrate_json, GridPoint, Layer, NodeKind, Substrate,
};

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

fn simple_substrate() -> Substrate {
    let mut substrate = Substrate::new();
    substrate.toggle_node(NodeKind::Input, p(1, 1));
    substrate.toggle_node(NodeKind::Output, p(1, -1));
    substrate.toggle_connection(p(1, 1), p(1, -1));
    substrate
}

#[test]
fn test_export_of_single_connection_model() {
    let json = write_substrate_json(&simple_substrate()).expect("Export erwartet");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON erwartet");

    assert_eq!(
        value,
        serde_json::json!({
            "input_nodes": [{"x": 1, "y": 1}],
            "hidden_nodes": [],
            "output_nodes": [{"x": 1, "y": -1}],
            "connections": [{"from": {"x": 1, "y": 1}, "to": {"x": 1, "y": -1}}],
            "layers": []
        })
    );
}

#[test]
fn test_export_key_order_and_indentation() {
    let json = write_substrate_json(&simple_substrate()).expect("Export erwartet");

    let positions: Vec<usize> = [
        "\"input_nodes\"",
        "\"hidden_nodes\"",
        "\"output_nodes\"",
        "\"connections\"",
        "\"layers\"",
    ]
    .iter()
    .map(|key| json.find(key).expect("Schlüssel erwartet"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(json.starts_with("{\n  \"input_nodes\": ["));
}

#[test]
fn test_export_is_deterministic() {
    let mut substrate = simple_substrate();
    substrate.toggle_connection(p(0, 0), p(2, 2));
    substrate.push_layer(
        Layer::from_selection(&[p(0, 0), p(2, 2), p(1, 1)]).expect("Layer erwartet"),
    );

    let first = write_substrate_json(&substrate).expect("Export erwartet");
    let second = write_substrate_json(&substrate).expect("Export erwartet");
    assert_eq!(first, second);
}

#[test]
fn test_export_includes_hidden_nodes_and_layers() {
    let mut substrate = simple_substrate();
    substrate.toggle_connection(p(0, 0), p(1, 1));
    substrate.push_layer(Layer::from_selection(&[p(0, 2), p(1, 2), p(0, 0)]).expect("Layer"));

    let json = write_substrate_json(&substrate).expect("Export erwartet");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON erwartet");

    assert_eq!(value["hidden_nodes"], serde_json::json!([{"x": 0, "y": 0}]));
    assert_eq!(
        value["layers"],
        serde_json::json!([{
            "id": 0,
            "shape": [2, 1],
            "nodes": [{"x": 0, "y": 2}, {"x": 1, "y": 2}, {"x": 0, "y": 0}]
        }])
    );
}

#[test]
fn test_save_substrate_file_writes_same_text() {
    let substrate = simple_substrate();
    let path = std::env::temp_dir().join(format!(
        "hn_substrate_export_test_{}.json",
        std::process::id()
    ));

    save_substrate_file(&substrate, &path).expect("Speichern erwartet");
    let written = std::fs::read_to_string(&path).expect("Datei erwartet");
    let _ = std::fs::remove_file(&path);

    assert_eq!(
        written,
        write_substrate_json(&substrate).expect("Export erwartet")
    );
}
