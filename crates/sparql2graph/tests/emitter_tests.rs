use serde_json::Value;

use sparql2graph::ast::loader;
use sparql2graph::emitter::cytoscape::CytoscapeEmitter;
use sparql2graph::emitter::json::JsonEmitter;
use sparql2graph::emitter::GraphEmitter;
use sparql2graph::graph::builder::build_graph_model;
use sparql2graph::graph::model::GraphModel;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture_model(name: &str) -> GraphModel {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    build_graph_model(&loader::load_json(&path).expect("Failed to load fixture JSON"))
}

fn emit_json(model: &GraphModel, compact: bool) -> String {
    let mut buf = Vec::new();
    {
        let mut em = if compact {
            JsonEmitter::compact(&mut buf)
        } else {
            JsonEmitter::new(&mut buf)
        };
        em.emit(model).unwrap();
        em.flush().unwrap();
    }
    String::from_utf8(buf).unwrap()
}

fn emit_cytoscape(model: &GraphModel) -> Value {
    let mut buf = Vec::new();
    {
        let mut em = CytoscapeEmitter::compact(&mut buf);
        em.emit(model).unwrap();
        em.flush().unwrap();
    }
    serde_json::from_slice(&buf).unwrap()
}

// ---------------------------------------------------------------------------
// JSON tests
// ---------------------------------------------------------------------------

#[test]
fn json_uses_camel_case_keys() {
    let out = emit_json(&fixture_model("person_select.json"), false);
    let doc: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(doc["queryType"], "SELECT");
    assert_eq!(doc["whereTripleCount"], 3);
    assert_eq!(doc["nodes"][0]["id"], "var:?p");
    assert_eq!(doc["nodes"][0]["kind"], "variable");
    assert_eq!(doc["nodes"][0]["category"], "variable");
    assert_eq!(doc["nodes"][0]["isSelectedVar"], true);
    assert_eq!(doc["nodes"][1]["kind"], "iri");
    assert_eq!(doc["nodes"][1]["category"], "class");
    assert_eq!(doc["edges"][0]["category"], "rdfType");
    assert_eq!(doc["edges"][1]["category"], "objectProp");
    assert_eq!(doc["edges"][0]["effect"], "none");
}

#[test]
fn json_prefixes_keep_declaration_order() {
    let out = emit_json(&fixture_model("person_select.json"), true);
    let rdf = out.find("\"rdf\":").expect("rdf prefix");
    let foaf = out.find("\"foaf\":").expect("foaf prefix");
    let skos = out.find("\"skos\":").expect("skos prefix");
    assert!(rdf < foaf && foaf < skos, "prefixes out of order: {out}");
}

#[test]
fn json_scope_fields_only_when_set() {
    let out = emit_json(&fixture_model("person_select.json"), false);
    let doc: Value = serde_json::from_str(&out).unwrap();
    let first = doc["edges"][0].as_object().unwrap();
    assert!(!first.contains_key("optional"));
    assert!(!first.contains_key("branches"));
    assert!(!first.contains_key("graph"));
    assert_eq!(doc["edges"][2]["optional"], true);

    let union = emit_json(&fixture_model("union_graph.json"), false);
    let doc: Value = serde_json::from_str(&union).unwrap();
    assert_eq!(doc["edges"][1]["branches"][0]["union"], 0);
    assert_eq!(doc["edges"][1]["branches"][0]["branch"], 1);
    assert_eq!(doc["edges"][2]["graph"], "ex:g");
    assert_eq!(doc["edges"][2]["category"], "path");
    assert_eq!(doc["edges"][1]["category"], "annotationProp");
}

#[test]
fn compact_json_is_one_line() {
    let out = emit_json(&fixture_model("person_select.json"), true);
    assert_eq!(out.lines().count(), 1);
    assert!(out.ends_with('\n'));
}

#[test]
fn pretty_json_is_multi_line() {
    let out = emit_json(&fixture_model("person_select.json"), false);
    assert!(out.lines().count() > 1);
    assert!(out.ends_with('\n'));
}

// ---------------------------------------------------------------------------
// Cytoscape tests
// ---------------------------------------------------------------------------

#[test]
fn cytoscape_lists_nodes_then_edges() {
    let model = fixture_model("union_graph.json");
    let doc = emit_cytoscape(&model);
    let elements = doc.as_array().expect("elements array");
    assert_eq!(elements.len(), model.nodes.len() + model.edges.len());

    for (i, node) in model.nodes.iter().enumerate() {
        assert_eq!(elements[i]["data"]["id"], node.id.as_str());
        assert!(elements[i]["data"].get("source").is_none());
    }
    for (i, edge) in model.edges.iter().enumerate() {
        let data = &elements[model.nodes.len() + i]["data"];
        assert_eq!(data["id"], edge.id.as_str());
        assert_eq!(data["source"], edge.source.as_str());
        assert_eq!(data["target"], edge.target.as_str());
    }
}

#[test]
fn cytoscape_empty_model_is_empty_array() {
    let model = build_graph_model(&loader::from_str("{\"where\": []}").unwrap());
    assert_eq!(emit_cytoscape(&model), Value::Array(vec![]));
}
