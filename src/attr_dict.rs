//! A nested mapping with attribute-style access and JSON file persistence
//!
//! Wrapping a JSON object converts every nested object into an [`AttrDict`]
//! of its own, so lookups chain the way attribute access does in dynamic
//! languages: `dict["server"]["listen"]["port"]`, or `dict.path("server.listen.port")`.
//!
//! [`AttrDict`]: ./struct.AttrDict.html

use crate::error::{
	Error,
	Result,
};
use serde::{
	Deserialize,
	Serialize,
};
use serde_json::{
	Map,
	Number,
	Value,
};
use std::{
	collections::BTreeMap,
	fs::File,
	io::{
		BufReader,
		BufWriter,
		Write,
	},
	ops::Index,
	path::Path,
};

/// Indexing with a missing key answers a reference to this, the convention
/// the `serde_json` Index impls use.
static NULL: AttrValue = AttrValue::Null;

/// A JSON value whose nested objects are [`AttrDict`]s.
///
/// [`AttrDict`]: ./struct.AttrDict.html
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
	Null,
	Bool(bool),
	Number(Number),
	Text(String),
	List(Vec<AttrValue>),
	Dict(AttrDict),
}

impl AttrValue {
	pub fn is_null(&self) -> bool {
		*self == AttrValue::Null
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			AttrValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			AttrValue::Number(n) => n.as_i64(),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			AttrValue::Number(n) => n.as_f64(),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			AttrValue::Text(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[AttrValue]> {
		match self {
			AttrValue::List(l) => Some(l),
			_ => None,
		}
	}

	pub fn as_dict(&self) -> Option<&AttrDict> {
		match self {
			AttrValue::Dict(d) => Some(d),
			_ => None,
		}
	}

	/// Back to a plain `serde_json` value.
	pub fn to_value(&self) -> Value {
		match self {
			AttrValue::Null => Value::Null,
			AttrValue::Bool(b) => Value::Bool(*b),
			AttrValue::Number(n) => Value::Number(n.clone()),
			AttrValue::Text(s) => Value::String(s.clone()),
			AttrValue::List(l) => Value::Array(l.iter().map(AttrValue::to_value).collect()),
			AttrValue::Dict(d) => d.to_value(),
		}
	}
}

/// A mapping from string keys to [`AttrValue`]s, built by recursively
/// wrapping a JSON object.
///
/// [`AttrValue`]: ./enum.AttrValue.html
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrDict {
	entries: BTreeMap<String, AttrValue>,
}

impl AttrDict {
	pub fn new() -> AttrDict {
		AttrDict::default()
	}

	/// Wraps a JSON value. Anything but an object is refused, matching what
	/// a mapping wrapper can sensibly hold.
	pub fn from_value(value: Value) -> Result<AttrDict> {
		match value {
			Value::Object(map) => Ok(AttrDict::from(map)),
			other => Err(Error::NotAMapping(json_kind(&other))),
		}
	}

	pub fn get(&self, key: &str) -> Option<&AttrValue> {
		self.entries.get(key)
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
		self.entries.insert(key.into(), value.into())
	}

	pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
		self.entries.remove(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.entries.keys()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
		self.entries.iter()
	}

	/// Dotted-path lookup: `path("a.b.c")` walks nested dicts the way
	/// chained attribute access would.
	pub fn path(&self, path: &str) -> Option<&AttrValue> {
		let mut parts = path.split('.');
		let mut current = self.get(parts.next()?)?;
		for part in parts {
			current = current.as_dict()?.get(part)?;
		}
		Some(current)
	}

	/// Back to a plain `serde_json` object value.
	pub fn to_value(&self) -> Value {
		let map: Map<String, Value> = self
			.entries
			.iter()
			.map(|(k, v)| (k.clone(), v.to_value()))
			.collect();
		Value::Object(map)
	}

	/// Value-to-key map over the text-valued entries.
	pub fn inverted(&self) -> BTreeMap<String, String> {
		self.entries
			.iter()
			.filter_map(|(k, v)| v.as_str().map(|s| (s.to_owned(), k.clone())))
			.collect()
	}

	/// Serializes to a JSON file. The handle lives only for this call.
	pub fn dump(&self, path: &Path) -> Result<()> {
		let file = File::create(path)?;
		let mut writer = BufWriter::new(file);
		serde_json::to_writer_pretty(&mut writer, self)?;
		writer.flush()?;
		Ok(())
	}

	/// Reads a JSON file written by [`dump`] (or anything whose top level is
	/// an object).
	///
	/// [`dump`]: ./struct.AttrDict.html#method.dump
	pub fn load(path: &Path) -> Result<AttrDict> {
		let file = File::open(path)?;
		Ok(serde_json::from_reader(BufReader::new(file))?)
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a bool",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

impl From<Map<String, Value>> for AttrDict {
	fn from(map: Map<String, Value>) -> AttrDict {
		AttrDict {
			entries: map.into_iter().map(|(k, v)| (k, AttrValue::from(v))).collect(),
		}
	}
}

impl From<Value> for AttrValue {
	fn from(value: Value) -> AttrValue {
		match value {
			Value::Null => AttrValue::Null,
			Value::Bool(b) => AttrValue::Bool(b),
			Value::Number(n) => AttrValue::Number(n),
			Value::String(s) => AttrValue::Text(s),
			Value::Array(values) => AttrValue::List(values.into_iter().map(AttrValue::from).collect()),
			Value::Object(map) => AttrValue::Dict(AttrDict::from(map)),
		}
	}
}

impl From<AttrDict> for AttrValue {
	fn from(dict: AttrDict) -> AttrValue {
		AttrValue::Dict(dict)
	}
}

impl From<bool> for AttrValue {
	fn from(b: bool) -> AttrValue {
		AttrValue::Bool(b)
	}
}

impl From<i64> for AttrValue {
	fn from(n: i64) -> AttrValue {
		AttrValue::Number(Number::from(n))
	}
}

impl From<f64> for AttrValue {
	// NaN and infinities have no JSON form and collapse to Null, as in serde_json
	fn from(n: f64) -> AttrValue {
		Number::from_f64(n).map_or(AttrValue::Null, AttrValue::Number)
	}
}

impl From<&str> for AttrValue {
	fn from(s: &str) -> AttrValue {
		AttrValue::Text(s.to_owned())
	}
}

impl From<String> for AttrValue {
	fn from(s: String) -> AttrValue {
		AttrValue::Text(s)
	}
}

impl<'a> Index<&'a str> for AttrDict {
	type Output = AttrValue;

	fn index(&self, key: &str) -> &AttrValue {
		self.entries.get(key).unwrap_or(&NULL)
	}
}

impl<'a> Index<&'a str> for AttrValue {
	type Output = AttrValue;

	/// Chains through nested dicts; indexing anything that is not a dict
	/// answers `Null`.
	fn index(&self, key: &str) -> &AttrValue {
		match self {
			AttrValue::Dict(dict) => &dict[key],
			_ => &NULL,
		}
	}
}
