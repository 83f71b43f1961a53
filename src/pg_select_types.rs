//! Select statments into pg_* tables and corresponding return types

use postgres::{
	Error as SqlError,
	Row,
};

pub const GET_TABLES: &str = "SELECT c.oid, c.relname, ns.nspname
FROM pg_class c
JOIN pg_namespace ns
	ON c.relnamespace = ns.oid
WHERE c.relkind = 'r' AND
	ns.nspname != 'pg_catalog' AND
	ns.nspname != 'information_schema'
ORDER BY c.oid ASC";
#[derive(Debug)]
pub struct GetTables {
	pub oid: u32,
	pub name: String,
	pub schema: String,
}
impl GetTables {
	pub fn from_row(row: &Row) -> Result<GetTables, SqlError> {
		Ok(GetTables {
			oid: row.try_get(0)?,
			name: row.try_get(1)?,
			schema: row.try_get(2)?,
		})
	}
}

pub const GET_COLUMNS: &str = "SELECT attnum,
	attname,
	atttypid,
	typname,
	attnotnull
FROM pg_attribute a
LEFT JOIN pg_type b ON atttypid = b.oid
WHERE attnum > 0 AND NOT attisdropped
	AND attrelid = $1
ORDER BY attnum ASC";
#[derive(Debug)]
pub struct GetColumns {
	pub attnum: i16,
	pub name: String,
	pub typ_id: u32,
	pub typ_name: String,
	pub not_null: bool,
}
impl GetColumns {
	pub fn from_row(row: &Row) -> Result<GetColumns, SqlError> {
		Ok(GetColumns {
			attnum: row.try_get(0)?,
			name: row.try_get(1)?,
			typ_id: row.try_get(2)?,
			typ_name: row.try_get(3)?,
			not_null: row.try_get(4)?,
		})
	}
}

pub const GET_PRIMARY_KEY: &str = "SELECT a.attnum
FROM pg_index i
JOIN pg_attribute a
	ON a.attrelid = i.indrelid AND
	a.attnum = ANY(i.indkey)
WHERE i.indrelid = $1 AND
	i.indisprimary
ORDER BY a.attnum ASC";
#[derive(Debug)]
pub struct GetPrimaryKey {
	pub attnum: i16,
}
impl GetPrimaryKey {
	pub fn from_row(row: &Row) -> Result<GetPrimaryKey, SqlError> {
		Ok(GetPrimaryKey { attnum: row.try_get(0)? })
	}
}
