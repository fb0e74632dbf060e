use std::sync::Arc;

use pretty_assertions::assert_eq;

use sift_core::{
    driver::Dialect,
    query::{Capability, NativeQuery, QueryTarget, SelectBuilder},
    schema::{Association, Entity, Schema},
    stmt::{CompareOp, ConditionGroup, FieldSet, Logical, SearchCondition, Value},
    Connection, Error, Runtime,
};
use sift_sql::{ConditionGenerator, ConversionContext, DbType, FieldOptions, WhereBuilder};

fn runtime(dialect: Dialect) -> Arc<Runtime> {
    let schema = Schema::new()
        .entity(
            Entity::new("Invoice")
                .column("id")
                .column("status")
                .column("total")
                .column("active")
                .association("customer", Association::new("Customer", "c")),
        )
        .entity(Entity::new("Customer").column("id").column("name"));

    Arc::new(Runtime::new(schema, Connection::new(dialect)))
}

fn field_set() -> FieldSet {
    FieldSet::new(["status", "total", "customer-name", "active"])
}

fn status_eq(value: i64) -> SearchCondition {
    let mut root = ConditionGroup::new(Logical::And);
    root.add_comparison("status", CompareOp::Eq, value);
    SearchCondition::new(field_set(), root).unwrap()
}

fn native(dialect: Dialect) -> NativeQuery {
    NativeQuery::new(runtime(dialect), "SELECT i.* FROM invoices i")
}

fn mapped_builder(dialect: Dialect, condition: SearchCondition) -> WhereBuilder {
    let mut builder = WhereBuilder::new(native(dialect), condition).unwrap();
    builder.set_default_scope("Invoice", "i").unwrap();
    builder
        .set_field("status", "status", FieldOptions::default())
        .unwrap();
    builder
}

#[test]
fn end_to_end_native_query() {
    let mut builder = mapped_builder(Dialect::Sqlite, status_eq(2));
    builder.attach_to_query(" WHERE ").unwrap();

    let query = builder.into_query();
    let QueryTarget::Native(query) = &query else {
        panic!("expected a native query");
    };
    assert_eq!(query.sql(), "SELECT i.* FROM invoices i WHERE i.status = ?1");

    let context = query
        .hint(WhereBuilder::HINT_KEY)
        .expect("conversion hint registered")
        .downcast_ref::<ConversionContext>()
        .expect("hint carries the conversion context");
    assert_eq!(context.parameters(), [Value::I64(2)]);
}

#[test]
fn attach_through_an_incremental_builder() {
    let rt = runtime(Dialect::Sqlite);
    let mut query = SelectBuilder::new(rt);
    query.and_where("i.archived = 0");

    let mut builder = WhereBuilder::new(query, status_eq(2)).unwrap();
    builder.set_default_scope("Invoice", "i").unwrap();
    builder
        .set_field("status", "status", FieldOptions::default())
        .unwrap();
    builder.attach_to_query(" WHERE ").unwrap();

    let QueryTarget::Builder(query) = builder.into_query() else {
        panic!("expected a builder query");
    };
    // The builder composes conjunctions itself; the prepend is not used.
    assert_eq!(query.where_sql(), "i.archived = 0 AND i.status = ?1");
    assert!(query.hint(WhereBuilder::HINT_KEY).is_some());
}

#[test]
fn compilation_is_idempotent() {
    let mut condition_root = ConditionGroup::new(Logical::And);
    condition_root.add_comparison("status", CompareOp::Eq, 2);
    condition_root.add_comparison("active", CompareOp::Eq, true);
    let condition = SearchCondition::new(field_set(), condition_root).unwrap();

    let mut builder = mapped_builder(Dialect::Sqlite, condition);
    builder
        .set_field("active", "active", FieldOptions::default())
        .unwrap();

    let first = builder.compile_where_clause(" WHERE ").unwrap();
    let second = builder.compile_where_clause(" WHERE ").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, " WHERE i.status = ?1 AND i.active = 1");

    // A recompilation would have embedded the boolean a second time.
    let context = builder.conversion_context().unwrap();
    assert_eq!(context.platform().embedded_values(), [Value::Bool(true)]);
    assert_eq!(context.parameters(), [Value::I64(2)]);
}

#[test]
fn prepend_is_reapplied_per_call() {
    let mut builder = mapped_builder(Dialect::Sqlite, status_eq(2));

    let bare = builder.compile_where_clause("").unwrap();
    let with_where = builder.compile_where_clause(" WHERE ").unwrap();
    let with_and = builder.compile_where_clause(" AND ").unwrap();

    assert_eq!(bare, "i.status = ?1");
    assert_eq!(with_where, format!(" WHERE {bare}"));
    assert_eq!(with_and, format!(" AND {bare}"));
}

#[test]
fn mappings_freeze_after_compilation() {
    let mut builder = mapped_builder(Dialect::Sqlite, status_eq(2));
    let before = builder.compile_where_clause(" WHERE ").unwrap();

    assert_eq!(
        builder
            .set_field("total", "total", FieldOptions::default())
            .unwrap_err(),
        Error::ConfigurationClosed
    );
    assert_eq!(
        builder.set_default_scope("Customer", "c").unwrap_err(),
        Error::ConfigurationClosed
    );

    // The cached clause is untouched by the failed mutations.
    assert_eq!(builder.compile_where_clause(" WHERE ").unwrap(), before);
}

#[test]
fn empty_condition_compiles_to_an_empty_clause() {
    let mut builder = mapped_builder(Dialect::Sqlite, SearchCondition::empty(field_set()));

    assert_eq!(builder.compile_where_clause(" WHERE ").unwrap(), "");
    builder.attach_to_query(" WHERE ").unwrap();

    let QueryTarget::Native(query) = builder.into_query() else {
        panic!("expected a native query");
    };
    assert_eq!(query.sql(), "SELECT i.* FROM invoices i");
    assert!(query.hint(WhereBuilder::HINT_KEY).is_none());
}

#[test]
fn condition_on_only_unmapped_fields_compiles_to_an_empty_clause() {
    let mut root = ConditionGroup::new(Logical::And);
    root.add_comparison("total", CompareOp::Gt, 100);
    let condition = SearchCondition::new(field_set(), root).unwrap();

    // `total` never gets a mapping; it is silently excluded.
    let mut builder = mapped_builder(Dialect::Sqlite, condition);
    assert_eq!(builder.compile_where_clause(" WHERE ").unwrap(), "");
}

#[test]
fn named_mapping_replaces_the_unnamed_entry() {
    let mut builder = mapped_builder(Dialect::Sqlite, status_eq(2));
    builder
        .set_field("status#archived", "status", FieldOptions::default())
        .unwrap();

    assert_eq!(
        builder.registry().resolve("status", None).unwrap_err(),
        Error::UnmappedField("status".to_string())
    );
    assert!(builder.registry().resolve("status", Some("archived")).is_ok());
}

#[test]
fn default_scope_applies_to_subsequent_registrations_only() {
    let mut builder = WhereBuilder::new(native(Dialect::Sqlite), status_eq(2)).unwrap();
    builder.set_default_scope("Invoice", "i").unwrap();
    builder
        .set_field("status", "status", FieldOptions::default())
        .unwrap();
    builder.set_default_scope("Customer", "c").unwrap();
    builder
        .set_field("customer-name", "name", FieldOptions::default())
        .unwrap();

    let status = builder.registry().resolve("status", None).unwrap();
    assert_eq!((status.entity.as_str(), status.alias.as_str()), ("Invoice", "i"));
    let name = builder.registry().resolve("customer-name", None).unwrap();
    assert_eq!((name.entity.as_str(), name.alias.as_str()), ("Customer", "c"));
}

#[test]
fn builder_without_hint_support_is_rejected() {
    let query = SelectBuilder::with_capability(
        runtime(Dialect::Sqlite),
        Capability {
            hint_attachment: false,
            incremental_append: true,
        },
    );

    assert_eq!(
        WhereBuilder::new(query, status_eq(2)).unwrap_err(),
        Error::MissingCapability("hint attachment")
    );
}

#[test]
fn native_query_without_hint_support_is_rejected() {
    let query = NativeQuery::with_capability(
        runtime(Dialect::Sqlite),
        "SELECT 1",
        Capability {
            hint_attachment: false,
            incremental_append: false,
        },
    );

    assert!(matches!(
        WhereBuilder::new(query, status_eq(2)).unwrap_err(),
        Error::UnsupportedQueryType(_)
    ));
}

#[test]
fn conversion_context_requires_compilation() {
    let builder = mapped_builder(Dialect::Sqlite, status_eq(2));
    assert_eq!(
        builder.conversion_context().unwrap_err(),
        Error::NotYetCompiled
    );
}

#[test]
fn conversion_context_carries_only_flagged_mappings() {
    let mut root = ConditionGroup::new(Logical::And);
    root.add_comparison("status", CompareOp::Eq, 2);
    root.add_comparison("customer-name", CompareOp::Eq, "Jane");
    let condition = SearchCondition::new(field_set(), root).unwrap();

    let mut builder = WhereBuilder::new(native(Dialect::Sqlite), condition).unwrap();
    builder.set_default_scope("Invoice", "i").unwrap();
    builder
        .set_field("status", "status", FieldOptions::default().db_type(DbType::Integer))
        .unwrap();
    builder
        .set_field(
            "customer-name",
            "customer.name",
            FieldOptions::default().db_type(DbType::Uuid),
        )
        .unwrap();
    builder.compile_where_clause("").unwrap();

    let context = builder.conversion_context().unwrap();
    let flagged: Vec<&str> = context.mappings().iter().map(|m| m.field.as_str()).collect();
    assert_eq!(flagged, ["customer-name"]);
}

#[test]
fn association_path_resolves_to_the_joined_alias() {
    let mut root = ConditionGroup::new(Logical::And);
    root.add_comparison("customer-name", CompareOp::Eq, "Jane");
    let condition = SearchCondition::new(field_set(), root).unwrap();

    let mut builder = WhereBuilder::new(native(Dialect::Sqlite), condition).unwrap();
    builder.set_default_scope("Invoice", "i").unwrap();
    builder
        .set_field("customer-name", "customer.name", FieldOptions::default())
        .unwrap();

    assert_eq!(
        builder.compile_where_clause(" WHERE ").unwrap(),
        " WHERE c.name = ?1"
    );
    let context = builder.conversion_context().unwrap();
    assert_eq!(context.parameters(), [Value::String("Jane".to_string())]);
}

#[test]
fn multi_step_association_path_is_rejected() {
    let mut builder = WhereBuilder::new(native(Dialect::Sqlite), status_eq(2)).unwrap();
    builder.set_default_scope("Invoice", "i").unwrap();

    assert!(matches!(
        builder
            .set_field("customer-name", "customer.billing.city", FieldOptions::default())
            .unwrap_err(),
        Error::UnsupportedAssociationPath(_)
    ));
}

#[test]
fn unknown_search_field_is_rejected() {
    let mut builder = WhereBuilder::new(native(Dialect::Sqlite), status_eq(2)).unwrap();
    builder.set_default_scope("Invoice", "i").unwrap();

    assert_eq!(
        builder
            .set_field("label", "label", FieldOptions::default())
            .unwrap_err(),
        Error::UnknownField("label".to_string())
    );
}

#[test]
fn postgres_placeholders() {
    let mut builder = mapped_builder(Dialect::Postgresql, status_eq(2));
    assert_eq!(
        builder.compile_where_clause(" WHERE ").unwrap(),
        " WHERE i.status = $1"
    );
}

#[test]
fn mysql_placeholders() {
    let mut builder = mapped_builder(Dialect::Mysql, status_eq(2));
    assert_eq!(
        builder.compile_where_clause(" WHERE ").unwrap(),
        " WHERE i.status = ?"
    );
}
