//! Pruebas para el merge shallow disjunto.
//!
//! Verificamos la semántica: las claves de `src` se copian en el orden en
//! que fueron producidas y cualquier colisión aborta con `ReservedKey`.

use ciforge_core::{shallow_merge_into, GenerateError};
use serde_json::{json, Map, Value};

fn object(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn merge_copies_keys_in_source_order() {
    let mut dst = object(json!({ "steps": [] }));
    let src = object(json!({ "docker": [{"image": "cimg/base:2024.01"}], "resource_class": "medium" }));

    shallow_merge_into(&mut dst, &src).expect("disjoint merge should succeed");

    let keys: Vec<&str> = dst.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["steps", "docker", "resource_class"]);
    assert_eq!(dst["resource_class"], json!("medium"));
}

#[test]
fn merge_rejects_colliding_key() {
    let mut dst = object(json!({ "steps": [] }));
    let src = object(json!({ "image": "x", "steps": "sneaky" }));

    let err = shallow_merge_into(&mut dst, &src).unwrap_err();
    assert_eq!(err, GenerateError::ReservedKey("steps".into()));
}

#[test]
fn merge_aborts_without_partial_result_observation() {
    // La colisión se detecta clave por clave; las previas ya copiadas no se
    // exponen porque el caller descarta `dst` al recibir el error.
    let mut dst = object(json!({ "a": 1 }));
    let src = object(json!({ "b": 2, "a": 3 }));

    assert!(shallow_merge_into(&mut dst, &src).is_err());
}

#[test]
fn merge_of_empty_source_is_noop() {
    let mut dst = object(json!({ "steps": [] }));
    let src = Map::new();

    shallow_merge_into(&mut dst, &src).expect("empty merge");
    assert_eq!(Value::Object(dst), json!({ "steps": [] }));
}
