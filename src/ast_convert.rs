//! Generates the same module as [`db_model`], but by way of a token stream
//!
//! The token form guarantees the output parses; the price is that rendering
//! loses all layout, so it is only readable after a trip through rustfmt.
//!
//! [`db_model`]: ../db_model/index.html

use super::db_model::{
	class_name,
	rust_type,
	ClassSpec,
	Column,
	Database,
	Table,
	MODULE_HEADER,
};
use proc_macro2::{
	Ident,
	Span,
	TokenStream,
};
use quote::quote;

/// Renders a node of the reflected database as Rust tokens.
pub trait ConvertToAst {
	type Output;
	fn to_rust_ast(&self) -> Self::Output;
}

impl ConvertToAst for Database {
	type Output = TokenStream;

	fn to_rust_ast(&self) -> TokenStream {
		let classes = self.tables.iter().map(Table::to_rust_ast);
		let mappings = self.tables.iter().map(to_mapping_ast);
		quote! {
			#(#classes)*
			#(#mappings)*
		}
	}
}

impl ConvertToAst for Table {
	type Output = TokenStream;

	fn to_rust_ast(&self) -> TokenStream {
		let spec = ClassSpec::from_table(self);
		let name = Ident::new(&spec.name, Span::call_site());
		let fields: Vec<Ident> = spec
			.fields
			.iter()
			.map(|f| Ident::new(f, Span::call_site()))
			.collect();
		let types: Vec<TokenStream> = self.non_key_columns().map(Column::type_tokens).collect();
		quote! {
			#[derive(Debug, Clone)]
			pub struct #name {
				#(pub #fields: #types,)*
			}
			impl #name {
				pub fn new(#(#fields: #types),*) -> #name {
					#name { #(#fields),* }
				}
			}
		}
	}
}

impl Column {
	// the type strings all come from the fixed oid table, so they parse
	fn type_tokens(&self) -> TokenStream {
		rust_type(self).parse().unwrap()
	}
}

fn to_mapping_ast(table: &Table) -> TokenStream {
	let spec = ClassSpec::from_table(table);
	let name = Ident::new(&class_name(&table.name), Span::call_site());
	let qualified = table.qualified_name();
	let key = match table.primary_key() {
		Some(column) => {
			let key_name = &column.name;
			quote! { Some(#key_name) }
		},
		None => quote! { None },
	};
	let getters = spec.fields.iter().map(|field| quote! { row.try_get(#field)? });
	quote! {
		impl TableMapped for #name {
			const TABLE: &'static str = #qualified;
			const PRIMARY_KEY: Option<&'static str> = #key;
			fn from_row(row: &Row) -> Result<#name, SqlError> {
				Ok(#name::new(#(#getters),*))
			}
		}
	}
}

/// String form of the token path. The file-level attributes and imports stay
/// plain text, a free token stream cannot carry inner attributes.
pub fn as_module_string(database: &Database, emit_classes: bool) -> String {
	let classes: Vec<TokenStream> = if emit_classes {
		database.tables.iter().map(Table::to_rust_ast).collect()
	} else {
		Vec::new()
	};
	let mappings = database.tables.iter().map(to_mapping_ast);
	let body = quote! {
		#(#classes)*
		#(#mappings)*
	};
	format!("{}{}\n", MODULE_HEADER, body)
}
