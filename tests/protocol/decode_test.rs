use serde_json::json;

use prismatic::plan::{AggregateSpec, QueryPlan};
use prismatic::protocol::{ProtocolError, Response};
use prismatic::statement::build;

fn response(value: serde_json::Value) -> Response {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_missing_result_key() {
    let statement = build(QueryPlan::find("User").fields(["id"])).unwrap();
    let err = statement
        .decode(&response(json!({ "data": { "findManyPet": [] } })))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::DecodeShape(_)));
}

#[test]
fn test_missing_projected_field() {
    let statement = build(QueryPlan::find("M").fields(["a", "missing"])).unwrap();
    let err = statement
        .decode(&response(json!({ "data": { "findManyM": [ { "a": 1 } ] } })))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::DecodeShape(_)));
}

#[test]
fn test_join_value_must_be_an_object() {
    let statement = build(QueryPlan::find("M").fields(["a"]).join("pets")).unwrap();
    let err = statement
        .decode(&response(json!({
            "data": { "findManyM": [ { "a": 1, "pets": 3 } ] }
        })))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::DecodeShape(_)));
}

#[test]
fn test_scalar_result_is_a_shape_error() {
    let statement = build(QueryPlan::find("M").fields(["a"])).unwrap();
    let err = statement
        .decode(&response(json!({ "data": { "findManyM": 5 } })))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::DecodeShape(_)));
}

#[test]
fn test_update_result_without_count() {
    let statement = build(QueryPlan::update_many("M").set("a", 1)).unwrap();
    let err = statement
        .decode(&response(json!({ "data": { "updateManyM": {} } })))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::DecodeShape(_)));
}

#[test]
fn test_aggregate_envelope_cardinality() {
    let plan = QueryPlan::aggregate("M").with_aggregate("total", AggregateSpec::CountAll);
    let statement = build(plan).unwrap();

    // Two result values where exactly one is expected.
    let err = statement
        .decode(&response(json!({
            "data": {
                "aggregateM": {
                    "_count": { "_all": 7 },
                    "_sum": { "amount": 12 }
                }
            }
        })))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::DecodeShape(_)));
}

#[test]
fn test_aggregate_inner_envelope_cardinality() {
    let plan = QueryPlan::aggregate("M").with_aggregate("total", AggregateSpec::CountAll);
    let statement = build(plan).unwrap();

    let err = statement
        .decode(&response(json!({
            "data": { "aggregateM": { "_count": { "_all": 7, "id": 7 } } }
        })))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::DecodeShape(_)));
}
