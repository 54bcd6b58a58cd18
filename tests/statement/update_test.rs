use serde_json::json;

use prismatic::plan::predicate::eq;
use prismatic::plan::QueryPlan;
use prismatic::protocol::Response;
use prismatic::statement::build;

#[test]
fn test_arguments_carry_where_and_data() {
    let plan = QueryPlan::update_many("User")
        .filter(eq("status", "inactive"))
        .set("status", "archived");
    let statement = build(plan).unwrap();

    assert_eq!(
        statement.serialize(),
        json!({
            "modelName": "User",
            "action": "updateMany",
            "query": {
                "arguments": {
                    "where": { "status": "inactive" },
                    "data": { "status": "archived" },
                },
                "selection": { "$scalars": true, "$composites": true },
            },
        })
    );
}

#[test]
fn test_decode_returns_the_mutation_count() {
    let statement = build(QueryPlan::update_many("M").set("a", 1)).unwrap();
    let response: Response = serde_json::from_value(json!({
        "data": { "updateManyM": { "count": 4 } }
    }))
    .unwrap();

    assert_eq!(statement.decode(&response).unwrap(), vec![vec![json!(4)]]);
}
