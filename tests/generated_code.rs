use sql_class_gen::db_model::*;

fn column(pos: i16, name: &str, type_id: u32, type_name: &str, not_null: bool, primary_key: bool) -> Column {
	Column {
		pos,
		name: name.to_owned(),
		type_id,
		type_name: type_name.to_owned(),
		not_null,
		primary_key,
	}
}

fn sample_database() -> Database {
	Database {
		tables: vec![
			Table {
				id: 16385,
				schema: "public".to_owned(),
				name: "accounts".to_owned(),
				columns: vec![
					column(1, "id", 23, "int4", true, true),
					column(2, "owner_name", 25, "text", true, false),
					column(3, "balance", 20, "int8", false, false),
				],
			},
			Table {
				id: 16390,
				schema: "public".to_owned(),
				name: "order_items".to_owned(),
				columns: vec![
					column(1, "id", 23, "int4", true, true),
					column(2, "quantity", 23, "int4", true, false),
					column(3, "added_at", 1114, "timestamp", true, false),
				],
			},
			// no trailing s, no primary key
			Table {
				id: 16395,
				schema: "public".to_owned(),
				name: "audit_log".to_owned(),
				columns: vec![
					column(1, "happened_at", 1184, "timestamptz", true, false),
					column(2, "message", 25, "text", true, false),
				],
			},
		],
	}
}

#[test]
fn one_class_per_table_with_derived_names() {
	let source = sample_database().as_rust_string();
	assert!(source.contains("pub struct Account {"));
	assert!(source.contains("pub struct OrderItem {"));
	assert!(source.contains("pub struct AuditLog {"));
}

#[test]
fn module_starts_with_the_orm_preamble() {
	let source = sample_database().as_rust_string();
	assert!(source.starts_with("#![allow(non_snake_case)]"));
	assert!(source.contains("pub use sql_class_gen::orm;"));
	assert!(source.contains("use orm::*;"));
}

#[test]
fn constructor_parameters_and_assignments_share_order_and_membership() {
	let source = sample_database().as_rust_string();
	assert!(source.contains("pub fn new(owner_name: String, balance: Option<i64>) -> Account {"));
	assert!(source.contains("Account { owner_name, balance }"));
	assert!(source.contains("pub fn new(quantity: i32, added_at: NaiveDateTime) -> OrderItem {"));
	assert!(source.contains("OrderItem { quantity, added_at }"));
}

#[test]
fn primary_key_columns_stay_out_of_the_class() {
	let source = sample_database().as_rust_string();
	assert!(!source.contains("pub id:"));
	assert!(!source.contains("id: i32"));
}

#[test]
fn mappings_bind_each_class_to_its_table() {
	let source = sample_database().as_rust_string();
	assert!(source.contains("impl TableMapped for Account {"));
	assert!(source.contains("const TABLE: &'static str = \"public.accounts\";"));
	assert!(source.contains("const PRIMARY_KEY: Option<&'static str> = Some(\"id\");"));
	assert!(source.contains("impl TableMapped for AuditLog {"));
	assert!(source.contains("const PRIMARY_KEY: Option<&'static str> = None;"));
}

#[test]
fn from_row_reads_the_constructor_columns_in_order() {
	let source = sample_database().as_rust_string();
	assert!(source.contains("Ok(Account::new(row.try_get(\"owner_name\")?, row.try_get(\"balance\")?))"));
}

#[test]
fn mapping_section_comes_after_every_class() {
	let source = sample_database().as_rust_string();
	let marker = source.find("// table mappings").unwrap();
	assert!(source.find("pub struct Account").unwrap() < marker);
	assert!(source.find("impl TableMapped for Account").unwrap() > marker);
}

#[test]
fn no_classes_keeps_only_the_mappings() {
	let source = sample_database().to_source(false);
	assert!(!source.contains("pub struct"));
	assert!(source.contains("impl TableMapped for Account {"));
	assert!(source.contains("impl TableMapped for OrderItem {"));
}

#[test]
fn tables_render_in_reflection_order() {
	let source = sample_database().as_rust_string();
	let accounts = source.find("pub struct Account").unwrap();
	let order_items = source.find("pub struct OrderItem").unwrap();
	let audit_log = source.find("pub struct AuditLog").unwrap();
	assert!(accounts < order_items && order_items < audit_log);
}
