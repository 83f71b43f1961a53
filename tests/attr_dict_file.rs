use sql_class_gen::attr_dict::AttrDict;
use serde_json::json;

#[test]
fn dump_then_load_yields_an_equal_mapping() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("settings.json");

	let dict = AttrDict::from_value(json!({
		"name": "athena",
		"retries": 3,
		"ratio": 0.25,
		"verbose": true,
		"comment": null
	}))
	.unwrap();

	dict.dump(&path).unwrap();
	let loaded = AttrDict::load(&path).unwrap();
	assert_eq!(loaded, dict);
}

#[test]
fn nested_dicts_survive_the_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("nested.json");

	let dict = AttrDict::from_value(json!({
		"server": { "listen": { "host": "::1", "port": 8080 } }
	}))
	.unwrap();

	dict.dump(&path).unwrap();
	let loaded = AttrDict::load(&path).unwrap();
	assert_eq!(loaded.path("server.listen.port").and_then(|v| v.as_i64()), Some(8080));
	assert_eq!(loaded, dict);
}

#[test]
fn load_refuses_a_file_without_an_object() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("list.json");
	std::fs::write(&path, "[1, 2, 3]").unwrap();

	assert!(AttrDict::load(&path).is_err());
}

#[test]
fn load_propagates_missing_file_errors() {
	let dir = tempfile::tempdir().unwrap();
	assert!(AttrDict::load(&dir.path().join("absent.json")).is_err());
}
