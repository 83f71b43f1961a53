//! Runtime support for the generated mappings
//!
//! Generated modules start with `pub use sql_class_gen::orm; use orm::*;` and
//! take everything they name from here: the [`TableMapped`] trait their
//! mapping impls fill in, the row and error types of the database driver, and
//! the chrono types the column mapping spells out.
//!
//! [`TableMapped`]: ./trait.TableMapped.html

pub use chrono::{
	DateTime,
	NaiveDate,
	NaiveDateTime,
	NaiveTime,
	Utc,
};
pub use postgres::{
	row::Row,
	types::{
		FromSql,
		ToSql,
	},
	Client,
	Error as SqlError,
};
pub use serde_json;

use crate::error::{
	Error,
	Result,
};
use std::collections::HashMap;

/// Binds a generated struct to the table it was reflected from.
///
/// The generator emits one impl per table; the provided methods are small
/// conveniences over them for callers that keep a [`Client`] around.
///
/// [`Client`]: https://docs.rs/postgres/0.19/postgres/struct.Client.html
pub trait TableMapped: Sized {
	/// Schema-qualified table name.
	const TABLE: &'static str;

	/// Name of the primary key column, if the table has one.
	const PRIMARY_KEY: Option<&'static str>;

	fn from_row(row: &Row) -> std::result::Result<Self, SqlError>;

	/// Every row of the table.
	fn select_all(client: &mut Client) -> Result<Vec<Self>> {
		let sql = select_all_sql(Self::TABLE);
		client
			.query(sql.as_str(), &[])?
			.iter()
			.map(|row| Self::from_row(row).map_err(Error::from))
			.collect()
	}

	/// The row whose primary key equals `id`, if any. Fails with
	/// [`Error::NoPrimaryKey`] on tables reflected without one.
	///
	/// [`Error::NoPrimaryKey`]: ../error/enum.Error.html
	fn get_by_id(client: &mut Client, id: &(dyn ToSql + Sync)) -> Result<Option<Self>> {
		let key = Self::PRIMARY_KEY.ok_or(Error::NoPrimaryKey(Self::TABLE))?;
		let sql = select_by_key_sql(Self::TABLE, key);
		let rows = client.query(sql.as_str(), &[id])?;
		rows.first().map(Self::from_row).transpose().map_err(Error::from)
	}

	/// Two columns of the table as a key to value map, both rendered as text.
	/// A NULL in the value column becomes `None`.
	fn column_map(
		client: &mut Client,
		key_field: &str,
		value_field: &str,
	) -> Result<HashMap<String, Option<String>>> {
		let sql = column_map_sql(Self::TABLE, key_field, value_field);
		let mut map = HashMap::new();
		for row in client.query(sql.as_str(), &[])? {
			map.insert(row.try_get(0)?, row.try_get(1)?);
		}
		Ok(map)
	}
}

fn select_all_sql(table: &str) -> String {
	format!("SELECT * FROM {}", table)
}

fn select_by_key_sql(table: &str, key: &str) -> String {
	format!("SELECT * FROM {} WHERE {} = $1", table, key)
}

fn column_map_sql(table: &str, key_field: &str, value_field: &str) -> String {
	format!("SELECT {0}::text, {1}::text FROM {2}", key_field, value_field, table)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn select_statements_name_the_table() {
		assert_eq!(select_all_sql("public.accounts"), "SELECT * FROM public.accounts");
		assert_eq!(
			select_by_key_sql("public.accounts", "id"),
			"SELECT * FROM public.accounts WHERE id = $1"
		);
		assert_eq!(
			column_map_sql("public.accounts", "id", "owner_name"),
			"SELECT id::text, owner_name::text FROM public.accounts"
		);
	}
}
