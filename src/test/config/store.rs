use super::ConfigStore;
use crate::config::ConfigError;
use crate::menu::{HostItem, Item, MenuItem};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn test_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock drift").as_nanos();
    let serial = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("sshmenu_config_{name}_{nanos}_{serial}"));
    fs::create_dir_all(&dir).expect("create test dir");
    dir
}

const SAMPLE: &str = r#"global:
  tooltip: Hosts
  back_up_config: 0
classes:
  app.model.hostitem: GnomeHost
items:
  - type: host
    title: Web Server
    sshparams: www.example.com
    geometry: 80x25
    profile: Blue
  - type: separator
  - type: menu
    title: Databases
    items:
      - type: host
        title: Primary
        sshparams: db1.example.com
        geometry: ~
      - type: bogus
  - type: host
    title: Primary
    sshparams: other.example.com
    geometry: ~
"#;

#[test]
fn first_load_writes_defaults() {
    let dir = test_dir("first_load");
    let path = dir.join(".sshmenu");
    let mut store = ConfigStore::new(&path);
    assert!(store.not_configured());

    let parsed = store.load().expect("load");
    assert!(!parsed);
    assert!(!store.not_configured());
    assert!(store.items().is_empty());
    assert_eq!(store.globals().tooltip(), "Open an SSH session in a new window");

    let written = fs::read_to_string(&path).expect("read config");
    assert!(written.contains("global:"));
    assert!(written.contains("items:"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn loads_tree_globals_and_classes() {
    let dir = test_dir("load");
    let path = dir.join(".sshmenu");
    fs::write(&path, SAMPLE).expect("write config");

    let mut store = ConfigStore::new(&path);
    assert!(store.load().expect("load"));

    assert_eq!(store.globals().tooltip(), "Hosts");
    assert!(store.classes().get("app.model.hostitem").is_some());
    assert_eq!(store.items().len(), 4);
    assert!(store.items()[1].is_separator());
    let menu = store.items()[2].as_menu().expect("menu");
    assert_eq!(menu.items.len(), 1, "unknown record dropped");
    assert_eq!(store.warnings().len(), 1);
    assert_eq!(store.warnings()[0].type_name, "bogus");

    let web = store.items()[0].as_host().expect("host");
    assert_eq!(web.profile(), Some("Blue"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unchanged_file_is_not_reloaded() {
    let dir = test_dir("mtime");
    let path = dir.join(".sshmenu");
    fs::write(&path, SAMPLE).expect("write config");

    let mut store = ConfigStore::new(&path);
    assert!(store.load().expect("first load"));
    store.items_mut().clear();

    assert!(!store.load().expect("second load"));
    assert!(store.items().is_empty(), "in-memory state kept while file is unchanged");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn malformed_file_reports_path_and_keeps_state() {
    let dir = test_dir("malformed");
    let path = dir.join(".sshmenu");
    fs::write(&path, SAMPLE).expect("write config");

    let mut store = ConfigStore::new(&path);
    store.load().expect("load");

    let broken = dir.join("broken");
    fs::write(&broken, "items: [unclosed\n").expect("write broken");
    store.set_path(&broken);
    match store.load() {
        Err(ConfigError::Read { path, .. }) => assert_eq!(path, broken),
        other => panic!("expected read error, got {:?}", other.map(|_| ())),
    }
    assert_eq!(store.items().len(), 4);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn empty_file_and_legacy_item_key_are_accepted() {
    let dir = test_dir("legacy");
    let empty = dir.join("empty");
    fs::write(&empty, "").expect("write empty");
    let mut store = ConfigStore::new(&empty);
    assert!(store.load().expect("load empty"));
    assert!(store.items().is_empty());

    let legacy = dir.join("legacy");
    fs::write(&legacy, "item:\n  - type: host\n    title: Old\n    sshparams: old.example.com\n").expect("write legacy");
    let mut store = ConfigStore::new(&legacy);
    store.load().expect("load legacy");
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].title(), Some("Old"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn save_round_trips_and_backs_up() {
    let dir = test_dir("save");
    let path = dir.join(".sshmenu");
    fs::write(&path, SAMPLE).expect("write config");

    let mut store = ConfigStore::new(&path);
    store.load().expect("load");
    store.globals_mut().set_back_up_config(true);
    store.save().expect("save");

    let backup = dir.join(".sshmenu.bak");
    assert_eq!(fs::read_to_string(&backup).expect("read backup"), SAMPLE);

    let mut reloaded = ConfigStore::new(&path);
    reloaded.load().expect("reload");
    assert_eq!(reloaded.items(), store.items());
    assert!(reloaded.globals().back_up_config());
    assert_eq!(reloaded.classes(), store.classes());

    let saved = fs::read_to_string(&path).expect("read saved");
    assert!(saved.contains("back_up_config: 1"));
    assert!(!saved.contains("enable_bcvi"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn failed_backup_does_not_block_save() {
    let dir = test_dir("backup_blocked");
    let path = dir.join(".sshmenu");
    fs::write(&path, SAMPLE).expect("write config");
    fs::create_dir_all(dir.join(".sshmenu.bak")).expect("create blocking dir");

    let mut store = ConfigStore::new(&path);
    store.load().expect("load");
    let count = store.items().len();
    store.globals_mut().set_back_up_config(true);
    store.items_mut().push(Item::Separator);
    assert!(store.save().is_ok());

    let mut reloaded = ConfigStore::new(&path);
    reloaded.load().expect("reload");
    assert_eq!(reloaded.items().len(), count + 1);
    assert_eq!(reloaded.items().last(), Some(&Item::Separator));
    assert!(dir.join(".sshmenu.bak").is_dir());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn save_failure_is_a_write_error() {
    let dir = test_dir("write_error");
    let mut store = ConfigStore::new(dir.join("missing").join(".sshmenu"));
    assert!(matches!(store.save(), Err(ConfigError::Write { .. })));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn append_host_persists_immediately() {
    let dir = test_dir("append");
    let path = dir.join(".sshmenu");
    let mut store = ConfigStore::new(&path);
    store.load().expect("load");

    store.append_host(HostItem::new("New", "new.example.com")).expect("append");

    let mut reloaded = ConfigStore::new(&path);
    reloaded.load().expect("reload");
    assert_eq!(reloaded.items().len(), 1);
    assert_eq!(reloaded.items()[0].title(), Some("New"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn host_by_name_prefers_first_depth_first_match() {
    let mut store = ConfigStore::new("/nonexistent/.sshmenu");
    let mut menu = MenuItem::new("Databases");
    menu.append_item(Item::Host(HostItem::new("Primary", "db1.example.com")));
    store.set_items(vec![Item::Menu(menu), Item::Host(HostItem::new("Primary", "other.example.com"))]);

    assert_eq!(store.host_by_name("Primary").sshparams, "db1.example.com");

    let transient = store.host_by_name("adhoc.example.com");
    assert_eq!(transient.title, "adhoc.example.com");
    assert_eq!(transient.sshparams, "adhoc.example.com");
}

#[test]
fn autoconfigure_seeds_items_from_importer() {
    let mut store = ConfigStore::new("/nonexistent/.sshmenu");
    let records = serde_yml::from_str("- type: host\n  title: alpha\n  sshparams: -AX alpha\n").expect("yaml");
    assert!(store.autoconfigure(|| Some(records)));
    assert_eq!(store.items().len(), 1);

    assert!(!store.autoconfigure(|| None));
    assert_eq!(store.items().len(), 1);
}
