use prismatic::plan::predicate::eq;
use prismatic::plan::{Action, AggregateSpec, CacheStrategy, QueryPlan, QuerySource};

#[test]
fn test_builders_pick_the_action() {
    assert_eq!(QueryPlan::find("User").action, Action::Find);
    assert_eq!(QueryPlan::create("User").action, Action::Create);
    assert_eq!(QueryPlan::update_many("User").action, Action::UpdateMany);
    assert_eq!(QueryPlan::aggregate("User").action, Action::Aggregate);
}

#[test]
fn test_plan_records_declaration_order() {
    let plan = QueryPlan::find("User")
        .fields(["id", "name"])
        .filter(eq("name", "Alice"))
        .join("pets")
        .join("posts");

    assert_eq!(plan.entity, "User");
    assert_eq!(plan.fields, vec!["id".to_string(), "name".to_string()]);
    assert_eq!(plan.joins.len(), 2);
    assert_eq!(plan.joins[0].field, "pets");
    assert_eq!(plan.joins[1].field, "posts");
}

#[test]
fn test_aggregate_aliases_are_ordered_pairs() {
    let plan = QueryPlan::aggregate("User").with_aggregate("total", AggregateSpec::CountAll);
    assert_eq!(plan.aggregates.len(), 1);
    assert_eq!(plan.aggregates[0].0, "total");
}

#[test]
fn test_cache_latch_is_single_use() {
    let mut source = QuerySource::new("User");
    source.set_cache_strategy(CacheStrategy::new(60, 300));

    assert_eq!(
        source.take_cache_strategy(),
        Some(CacheStrategy::new(60, 300))
    );
    // Consumed; must not leak into an unrelated call.
    assert_eq!(source.take_cache_strategy(), None);
}

#[test]
fn test_cache_from_consumes_the_latch() {
    let mut source = QuerySource::new("User");
    source.set_cache_strategy(CacheStrategy::new(60, 300));

    let cached = QueryPlan::find(source.entity()).cache_from(&mut source);
    assert_eq!(cached.cache_strategy, Some(CacheStrategy::new(60, 300)));

    let uncached = QueryPlan::find(source.entity()).cache_from(&mut source);
    assert_eq!(uncached.cache_strategy, None);
}

#[test]
fn test_rearming_the_latch() {
    let mut source = QuerySource::new("User");
    source.set_cache_strategy(CacheStrategy::new(10, 20));
    let _ = source.take_cache_strategy();

    source.set_cache_strategy(CacheStrategy::new(30, 40));
    assert_eq!(
        source.take_cache_strategy(),
        Some(CacheStrategy::new(30, 40))
    );
}
