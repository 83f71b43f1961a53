use super::{
	pg_select_types::*,
	sql_tree::*,
};
use crate::error::Result;
use postgres::{
	Client,
	Statement,
};

/// Wrapper around a [`Client`] with the reflection queries prepared up front
///
/// [`Client`]: https://docs.rs/postgres/0.19/postgres/struct.Client.html
pub struct SchemaClient {
	client: Client,
	tables_stmt: Statement,
	columns_stmt: Statement,
	primary_key_stmt: Statement,
}

impl SchemaClient {
	pub fn new(mut client: Client) -> Result<SchemaClient> {
		Ok(SchemaClient {
			tables_stmt: client.prepare(GET_TABLES)?,
			columns_stmt: client.prepare(GET_COLUMNS)?,
			primary_key_stmt: client.prepare(GET_PRIMARY_KEY)?,
			client,
		})
	}

	/// Reflects every user table in the current database into a [`Database`]
	///
	/// Tables come back in pg_class oid order, columns in attnum order.
	///
	/// [`Database`]: ../db_model/struct.Database.html
	pub fn get_all(&mut self) -> Result<Database> {
		let mut database = Database { tables: Vec::new() };

		for t in self.get_tables()? {
			let mut table = Table {
				id: t.oid,
				schema: t.schema,
				name: t.name,
				columns: Vec::new(),
			};
			table.append_columns(self.get_columns(table.id)?);
			database.add_table(table);
		}
		Ok(database)
	}

	/// Deletes all rows from every user table, in reflection order, in one
	/// transaction. Plain DELETE, so delete triggers still fire.
	pub fn truncate_tables(&mut self) -> Result<()> {
		let tables = self.get_tables()?;
		let mut transaction = self.client.transaction()?;
		for t in tables {
			let delete = format!(r#"DELETE FROM "{}"."{}""#, t.schema, t.name);
			transaction.execute(delete.as_str(), &[])?;
		}
		transaction.commit()?;
		Ok(())
	}

	fn get_tables(&mut self) -> Result<Vec<GetTables>> {
		self.client
			.query(&self.tables_stmt, &[])?
			.iter()
			.map(|row| GetTables::from_row(row).map_err(Into::into))
			.collect()
	}

	fn get_columns(&mut self, table_id: TableId) -> Result<Vec<Column>> {
		let key_positions = self.get_key_positions(table_id)?;

		let rows = self.client.query(&self.columns_stmt, &[&table_id])?;
		rows.iter()
			.map(|row| {
				let c = GetColumns::from_row(row)?;
				Ok(Column {
					pos: c.attnum,
					name: c.name,
					type_id: c.typ_id,
					type_name: c.typ_name,
					not_null: c.not_null,
					primary_key: key_positions.contains(&c.attnum),
				})
			})
			.collect()
	}

	fn get_key_positions(&mut self, table_id: TableId) -> Result<Vec<i16>> {
		self.client
			.query(&self.primary_key_stmt, &[&table_id])?
			.iter()
			.map(|row| GetPrimaryKey::from_row(row).map(|k| k.attnum).map_err(Into::into))
			.collect()
	}
}
