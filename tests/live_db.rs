//! Reflection against a real database. Ignored unless opted in:
//! set TEST_DATABASE_URL (or DATABASE_URL) and run `cargo test -- --ignored`.

use postgres::{Client, NoTls};
use sql_class_gen::connection::SchemaClient;
use sql_class_gen::db_model::ConvertToRust;
use std::env;

fn database_url() -> String {
	env::var("TEST_DATABASE_URL")
		.or_else(|_| env::var("DATABASE_URL"))
		.expect("set TEST_DATABASE_URL or DATABASE_URL for live tests")
}

const FIXTURE: &str = "
CREATE TABLE IF NOT EXISTS gen_smoke_accounts (
	id serial PRIMARY KEY,
	owner_name text NOT NULL,
	balance bigint
)";

#[test]
#[ignore]
fn reflects_and_generates_for_a_live_schema() {
	let mut setup = Client::connect(&database_url(), NoTls).unwrap();
	setup.batch_execute(FIXTURE).unwrap();

	let mut client = SchemaClient::new(Client::connect(&database_url(), NoTls).unwrap()).unwrap();
	let database = client.get_all().unwrap();

	let table = database
		.tables
		.iter()
		.find(|t| t.name == "gen_smoke_accounts")
		.expect("fixture table was not reflected");
	assert!(table.columns.iter().any(|c| c.name == "id" && c.primary_key));
	assert!(table.columns.iter().any(|c| c.name == "owner_name" && c.not_null));

	let source = database.as_rust_string();
	assert!(source.contains("pub struct GenSmokeAccount"));
	assert!(source.contains("impl TableMapped for GenSmokeAccount"));

	setup.batch_execute("DROP TABLE gen_smoke_accounts").unwrap();
}
