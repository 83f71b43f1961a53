//! A simple AST of the reflected database

/// The root node, holds every user table found in the database.
#[derive(Debug, Clone)]
pub struct Database {
	pub tables: Vec<Table>,
}

impl Database {
	pub fn add_table(&mut self, table: Table) {
		self.tables.push(table);
	}
}

/// pg_class oid of a table
pub type TableId = u32;

/// One table with its columns in attnum order
#[derive(Debug, Clone)]
pub struct Table {
	pub id: TableId,
	pub schema: String,
	pub name: String,
	pub columns: Vec<Column>,
}

impl Table {
	pub fn append_columns(&mut self, mut columns: Vec<Column>) {
		self.columns.append(&mut columns);
	}

	/// The columns that feed the generated constructor, in column order.
	pub fn non_key_columns(&self) -> impl Iterator<Item = &Column> {
		self.columns.iter().filter(|c| !c.primary_key)
	}

	pub fn primary_key(&self) -> Option<&Column> {
		self.columns.iter().find(|c| c.primary_key)
	}

	/// Schema-qualified name as it appears in generated SQL.
	pub fn qualified_name(&self) -> String {
		format!("{}.{}", self.schema, self.name)
	}
}

#[derive(Debug, Clone)]
pub struct Column {
	pub pos: i16,
	pub name: String,
	pub type_id: u32,
	pub type_name: String,
	pub not_null: bool,
	pub primary_key: bool,
}
