//! Integration tests for the store lifecycle and the get/put surface

use dotcfg::{ConfigError, ConfigNode, ConfigStore, ConfigTree, Selection, StaticLoader, Update};
use serde_json::json;

fn sample_loader() -> StaticLoader {
    StaticLoader::new(json!({
        "name": "defaults",
        "log": {"file": "some-file.txt", "level": "ERROR"},
        "monitoring": {
            "haproxy": {"disabled": false},
            "nginx": {"disabled": true}
        }
    }))
    .with_locals(json!({
        "name": "locals",
        "log": {"level": "DEBUG"},
        "monitoring": {"haproxy": {"disabled": true}}
    }))
}

#[test]
fn test_get_sections() {
    let store = ConfigStore::load(&sample_loader()).unwrap();

    let root = store.root().unwrap();
    assert_eq!(root["log"]["level"].as_str(), Some("DEBUG"));

    let log = store.get("log").unwrap();
    assert_eq!(
        serde_json::Value::from(log),
        json!({"file": "some-file.txt", "level": "DEBUG"})
    );
}

#[test]
fn test_select_mirrors_argument_count() {
    let store = ConfigStore::load(&sample_loader()).unwrap();
    let none: [&str; 0] = [];

    assert!(matches!(store.select(&none, None).unwrap(), Selection::Root(_)));
    assert!(matches!(store.select(&["name"], None).unwrap(), Selection::One(_)));

    let fallback = ConfigNode::from(false);
    match store
        .select(&["monitoring.nginx.disabled", "monitoring.apache.disabled"], Some(&fallback))
        .unwrap()
    {
        Selection::Many(nodes) => {
            assert_eq!(nodes[0].as_bool(), Some(true));
            assert_eq!(nodes[1].as_bool(), Some(false));
        }
        other => panic!("unexpected selection: {other:?}"),
    }
}

#[test]
fn test_put_then_get_round_trip() {
    let mut store = ConfigStore::load(&sample_loader()).unwrap();

    store.put("log.level=INFO").unwrap();
    assert_eq!(store.get("log.level").unwrap().as_str(), Some("INFO"));

    assert!(matches!(store.put("log.level"), Err(ConfigError::UpdateNotValid(_))));
    assert!(matches!(store.put("log=INFO"), Err(ConfigError::PropertyNotScalar(_))));
    assert_eq!(store.get("log.level").unwrap().as_str(), Some("INFO"));
}

#[test]
fn test_put_all_update_forms() {
    let mut store = ConfigStore::load(&sample_loader()).unwrap();

    store
        .put(Update::expressions(["name=first", "name=second"]))
        .unwrap();
    assert_eq!(store.get("name").unwrap().as_str(), Some("second"));

    let mut haproxy = ConfigTree::new();
    haproxy.insert("disabled", false).unwrap();
    haproxy.insert("port", 8404).unwrap();
    store
        .put(Update::assign("monitoring.haproxy", haproxy))
        .unwrap();
    assert_eq!(store.get("monitoring.haproxy.port").unwrap().as_i64(), Some(8404));

    store
        .put(Update::named([("name", ConfigNode::from(true))]))
        .unwrap();
    assert_eq!(store.get("name").unwrap().as_bool(), Some(true));

    let mut root = ConfigTree::new();
    root.insert("name", "replaced").unwrap();
    store.put(root).unwrap();
    assert_eq!(store.get("name").unwrap().as_str(), Some("replaced"));
    assert_eq!(store.get("log.file").unwrap().as_str(), Some("some-file.txt"));
}

#[test]
fn test_misspelled_paths_are_rejected() {
    let mut store = ConfigStore::load(&sample_loader()).unwrap();
    let before = store.root().unwrap().clone();

    assert!(matches!(
        store.put("log.levle=INFO"),
        Err(ConfigError::PropertyNotFound(p)) if p == "log.levle"
    ));
    assert!(matches!(
        store.put_named([("nmae", "x")]),
        Err(ConfigError::PropertyNotFound(p)) if p == "nmae"
    ));
    assert_eq!(store.root().unwrap(), &before);
}

#[test]
fn test_get_splits_whitespace_separated_paths() {
    let store = ConfigStore::load(&sample_loader()).unwrap();

    match store.select(&["name log.level"], None).unwrap() {
        Selection::Many(nodes) => {
            assert_eq!(nodes.len(), 2);
            assert_eq!(nodes[0].as_str(), Some("locals"));
            assert_eq!(nodes[1].as_str(), Some("DEBUG"));
        }
        other => panic!("unexpected selection: {other:?}"),
    }
}

#[test]
fn test_independent_stores() {
    let mut first = ConfigStore::load(&sample_loader()).unwrap();
    let second = ConfigStore::load(&sample_loader()).unwrap();

    first.put_str("log.level=TRACE").unwrap();

    assert_eq!(first.get("log.level").unwrap().as_str(), Some("TRACE"));
    assert_eq!(second.get("log.level").unwrap().as_str(), Some("DEBUG"));
}

#[test]
fn test_reinitialize_is_idempotent() {
    let loader = sample_loader();
    let mut store = ConfigStore::load(&loader).unwrap();
    let first = store.root().unwrap().clone();

    store.put_str("name=changed").unwrap();
    store.initialize(&loader).unwrap();

    assert_eq!(store.root().unwrap(), &first);
}

#[test]
fn test_typed_extraction() {
    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct LogSettings {
        file: String,
        level: String,
    }

    let store = ConfigStore::load(&sample_loader()).unwrap();
    let log: LogSettings = store.get_as("log").unwrap();
    assert_eq!(
        log,
        LogSettings {
            file: "some-file.txt".to_string(),
            level: "DEBUG".to_string(),
        }
    );
}
