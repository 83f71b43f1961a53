pub use super::sql_tree::*;

use crate::{
	error::Result,
	format_rust,
	Opt,
};
use heck::CamelCase;
use std::{
	fs::File,
	io::Write,
};

/// Preamble of every generated module. Generated code pulls its row and chrono
/// types from the [`orm`] module of this crate.
///
/// [`orm`]: ../orm/index.html
pub(crate) const MODULE_HEADER: &str = "#![allow(non_snake_case)]
#![allow(unused_imports)]
#![allow(non_camel_case_types)]
pub use sql_class_gen::orm;
use orm::*;
";

/// Transient description of one generated class: the struct name and the
/// columns that feed its constructor. Built per table while rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
	pub name: String,
	pub fields: Vec<String>,
}

impl ClassSpec {
	pub fn from_table(table: &Table) -> ClassSpec {
		ClassSpec {
			name: class_name(&table.name),
			fields: table.non_key_columns().map(|c| c.name.clone()).collect(),
		}
	}
}

/// `user_accounts` becomes `UserAccount`: each underscore-delimited part is
/// capitalized, then a single trailing `s` is dropped.
pub fn class_name(table_name: &str) -> String {
	let mut name = table_name.to_camel_case();
	if name.ends_with('s') {
		name.pop();
	}
	name
}

/// Maps a column to the Rust type spelled in generated code, `Option`-wrapped
/// for nullable columns. Unmapped oids fall back to `String` so the field
/// list always matches the column list.
pub(crate) fn rust_type(column: &Column) -> String {
	let base = match column.type_id {
		16 => "bool",
		17 => "Vec<u8>",
		20 => "i64",
		21 => "i16",
		23 => "i32",
		25 | 1042 | 1043 => "String",
		26 => "u32",
		700 => "f32",
		701 => "f64",
		114 | 3802 => "serde_json::Value",
		1082 => "NaiveDate",
		1083 => "NaiveTime",
		1114 => "NaiveDateTime",
		1184 => "DateTime<Utc>",
		_ => {
			log::warn!(
				"no rust type for sql type {} (oid {}), falling back to String",
				column.type_name,
				column.type_id
			);
			"String"
		},
	};
	if column.not_null || column.primary_key {
		base.to_owned()
	} else {
		format!("Option<{}>", base)
	}
}

/// Renders a node of the reflected database as Rust source text.
pub trait ConvertToRust {
	fn as_rust_string(&self) -> String;
}

impl ConvertToRust for Database {
	fn as_rust_string(&self) -> String {
		self.to_source(true)
	}
}

impl ConvertToRust for Table {
	/// One plain struct per table plus its constructor over the non-key
	/// columns. Parameters and assignments share the column order.
	fn as_rust_string(&self) -> String {
		let spec = ClassSpec::from_table(self);
		let fields: String = self.non_key_columns().map(|c| c.as_rust_string()).collect();
		let params: Vec<String> = self
			.non_key_columns()
			.map(|c| format!("{}: {}", c.name, rust_type(c)))
			.collect();
		let body = if spec.fields.is_empty() {
			format!("{} {{}}", spec.name)
		} else {
			format!("{} {{ {} }}", spec.name, spec.fields.join(", "))
		};
		format!(
			"\n#[derive(Debug, Clone)]\npub struct {0} {{{1}\n}}\nimpl {0} {{\n\tpub fn new({2}) -> {0} {{\n\t\t{3}\n\t}}\n}}\n",
			spec.name,
			fields,
			params.join(", "),
			body,
		)
	}
}

impl ConvertToRust for Column {
	fn as_rust_string(&self) -> String {
		format!("\n\tpub {}: {},", self.name, rust_type(self))
	}
}

impl Table {
	/// The mapping impl binding a generated struct to its table.
	pub fn as_mapping_string(&self) -> String {
		let spec = ClassSpec::from_table(self);
		let key = match self.primary_key() {
			Some(column) => format!("Some(\"{}\")", column.name),
			None => "None".to_owned(),
		};
		let getters: Vec<String> = spec
			.fields
			.iter()
			.map(|name| format!("row.try_get(\"{}\")?", name))
			.collect();
		format!(
			"\nimpl TableMapped for {0} {{\n\tconst TABLE: &'static str = \"{1}\";\n\tconst PRIMARY_KEY: Option<&'static str> = {2};\n\tfn from_row(row: &Row) -> Result<{0}, SqlError> {{\n\t\tOk({0}::new({3}))\n\t}}\n}}\n",
			spec.name,
			self.qualified_name(),
			key,
			getters.join(", "),
		)
	}
}

impl Database {
	/// Renders the whole generated module. With `emit_classes` false only the
	/// header and the mapping impls are kept.
	pub fn to_source(&self, emit_classes: bool) -> String {
		let mut ret = String::from(MODULE_HEADER);
		if emit_classes {
			for table in &self.tables {
				ret += &table.as_rust_string();
			}
		}
		ret += "\n// table mappings\n";
		for table in &self.tables {
			ret += &table.as_mapping_string();
		}
		ret
	}

	/// Writes the generated code to the file named in `opt`, or stdout.
	pub fn make_output(&self, opt: &Opt) -> Result<()> {
		#[cfg(feature = "use_ast")]
		let source = if opt.use_ast {
			crate::ast_convert::as_module_string(self, !opt.no_classes)
		} else {
			self.to_source(!opt.no_classes)
		};
		#[cfg(not(feature = "use_ast"))]
		let source = self.to_source(!opt.no_classes);

		let source = if opt.ugly { source } else { format_rust(&source) };

		match &opt.output {
			Some(path) => match File::create(path) {
				Ok(mut file) => file.write_all(source.as_bytes())?,
				Err(e) => {
					eprintln!("error ({}) while opening output file, writing to stdout instead", e);
					print!("{}", source);
				},
			},
			None => print!("{}", source),
		}
		Ok(())
	}
}
