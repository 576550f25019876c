use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Descriptor {
    configuration: Configuration,
    libraries: BTreeMap<String, toml::Value>,
}

#[derive(Debug, Deserialize)]
struct Configuration {
    entry_symbol: String,
    compatibility_minimum: String,
    #[serde(default)]
    reloadable: bool,
}

fn load_descriptor() -> Descriptor {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("godot")
        .join("pdd_voxel.gdextension");
    let text = std::fs::read_to_string(&path).unwrap();
    toml::from_str(&text).unwrap()
}

#[test]
fn entry_symbol_matches_exported_function() {
    let descriptor = load_descriptor();
    assert_eq!(descriptor.configuration.entry_symbol, pdd_voxel::ENTRY_SYMBOL);
}

#[test]
fn requires_godot_4_2() {
    let descriptor = load_descriptor();
    assert_eq!(descriptor.configuration.compatibility_minimum, "4.2");
}

#[test]
fn library_is_hot_reloadable() {
    let descriptor = load_descriptor();
    assert!(descriptor.configuration.reloadable);
}

#[test]
fn every_desktop_platform_has_a_library() {
    let descriptor = load_descriptor();
    for platform in ["linux", "windows", "macos"] {
        assert!(
            descriptor.libraries.contains_key(platform),
            "no library declared for {platform}"
        );
    }
}
