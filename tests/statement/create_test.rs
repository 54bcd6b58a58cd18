use serde_json::json;

use prismatic::plan::QueryPlan;
use prismatic::protocol::Response;
use prismatic::statement::build;
use prismatic::translate::TranslateError;

#[test]
fn test_data_zips_fields_with_the_value_row() {
    let plan = QueryPlan::create("M")
        .fields(["name", "email"])
        .row(["Alice", "a@x.com"]);
    let statement = build(plan).unwrap();

    assert_eq!(
        statement.serialize(),
        json!({
            "modelName": "M",
            "action": "createOne",
            "query": {
                "arguments": { "data": { "name": "Alice", "email": "a@x.com" } },
                "selection": { "$scalars": true, "$composites": true },
            },
        })
    );
}

#[test]
fn test_decode_yields_the_inserted_row() {
    let plan = QueryPlan::create("M")
        .fields(["name", "email"])
        .row(["Alice", "a@x.com"]);
    let statement = build(plan).unwrap();

    let response: Response = serde_json::from_value(json!({
        "data": { "createOneM": { "name": "Alice", "email": "a@x.com" } }
    }))
    .unwrap();

    assert_eq!(
        statement.decode(&response).unwrap(),
        vec![vec![json!("Alice"), json!("a@x.com")]]
    );
}

#[test]
fn test_more_than_one_row_is_rejected() {
    let plan = QueryPlan::create("M")
        .fields(["name"])
        .row(["Alice"])
        .row(["Bob"]);
    assert_eq!(
        build(plan).unwrap_err(),
        TranslateError::MultiRowCreate { rows: 2 }
    );
}

#[test]
fn test_zero_rows_is_rejected() {
    let plan = QueryPlan::create("M").fields(["name"]);
    assert_eq!(
        build(plan).unwrap_err(),
        TranslateError::MultiRowCreate { rows: 0 }
    );
}
