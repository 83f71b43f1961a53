//! Connects to a PostgreSQL database and generates plain rust structs for its tables, complete with mappings binding each struct back to the table it came from
//!
//! Also home to [`AttrDict`], a nested mapping with path-style access and JSON file persistence.
//!
//! [`AttrDict`]: ./attr_dict/struct.AttrDict.html

pub mod attr_dict;

pub mod connection;

pub mod db_model;

pub mod error;

pub mod orm;

mod pg_select_types;

mod sql_tree;

#[cfg(feature = "use_ast")]
pub mod ast_convert;

pub use error::{
	Error,
	Result,
};

use crate::connection::SchemaClient;
use postgres::{
	Client,
	NoTls,
};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
	name = "sql_class_gen",
	about = "Generates plain rust structs and table mappings from a live database schema"
)]
pub struct Opt {
	/// Don't pretty print the output with rustfmt
	#[structopt(short, long)]
	pub ugly: bool,

	/// Only generate the table mappings, skipping the struct definitions
	#[structopt(long = "no-classes")]
	pub no_classes: bool,

	/// Generate code by way of a token stream rather than direct templating
	#[cfg(feature = "use_ast")]
	#[structopt(long = "use-ast")]
	pub use_ast: bool,

	/// Connection string for the database to reflect, e.g. postgresql://user@localhost/db
	pub conn: String,

	/// File to write the generated code to, stdout if not given
	#[structopt(parse(from_os_str))]
	pub output: Option<PathBuf>,
}

impl Opt {
	/// Connects to the database and prepares the reflection statements.
	pub fn get_client(&self) -> Result<SchemaClient> {
		SchemaClient::new(Client::connect(&self.conn, NoTls)?)
	}
}

/// Runs generated code through rustfmt, returning the input unchanged when
/// rustfmt is unavailable or rejects the code.
pub fn format_rust(value: &str) -> String {
	match rustfmt(value) {
		Some(formatted) => formatted,
		None => {
			log::warn!("rustfmt failed, emitting unformatted code");
			value.to_string()
		},
	}
}

fn rustfmt(value: &str) -> Option<String> {
	use std::{
		io::Write,
		process::{
			Command,
			Stdio,
		},
	};
	let mut proc = Command::new("rustfmt")
		.arg("--emit=stdout")
		.arg("--edition=2018")
		.args(&["--config", "fn_single_line=true,hard_tabs=true"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.ok()?;
	proc.stdin.as_mut()?.write_all(value.as_bytes()).ok()?;
	let output = proc.wait_with_output().ok()?;
	if !output.stderr.is_empty() {
		log::debug!("rustfmt: {}", String::from_utf8_lossy(&output.stderr));
	}
	if output.status.success() {
		String::from_utf8(output.stdout).ok()
	} else {
		None
	}
}
