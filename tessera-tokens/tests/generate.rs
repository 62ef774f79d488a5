use std::collections::BTreeSet;

use regex::Regex;
use serde_json::Value;
use tessera_tokens::{BaseColors, Error, GeneratorConfig, TOKEN_COUNT, generate};

const EXPECTED_KEYS: [&str; TOKEN_COUNT] = [
    "primary",
    "on_primary",
    "primary_container",
    "on_primary_container",
    "secondary",
    "on_secondary",
    "secondary_container",
    "on_secondary_container",
    "tertiary",
    "on_tertiary",
    "tertiary_container",
    "on_tertiary_container",
    "error",
    "on_error",
    "error_container",
    "on_error_container",
    "warning",
    "on_warning",
    "warning_container",
    "on_warning_container",
    "background",
    "on_background",
    "surface",
    "on_surface",
    "surface_variant",
    "on_surface_variant",
    "surface_dim",
    "surface_bright",
    "surface_container_lowest",
    "surface_container_low",
    "surface_container",
    "surface_container_high",
    "surface_container_highest",
    "outline",
    "outline_variant",
    "inverse_surface",
    "inverse_on_surface",
    "inverse_primary",
    "scrim",
    "shadow",
    "inactive",
    "on_inactive",
];

fn read_json(path: &std::path::Path) -> (String, serde_json::Map<String, Value>) {
    let text = std::fs::read_to_string(path).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    match value {
        Value::Object(map) => (text, map),
        other => panic!("expected a JSON object, got {other}"),
    }
}

#[tokio::test]
async fn default_run_writes_dark_theme() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::default().with_output_dir(dir.path());

    let written = generate(&config).await.unwrap();
    let dark_path = dir.path().join("dark-theme.json");
    assert_eq!(written, [dark_path.clone()]);
    assert!(!dir.path().join("light-theme.json").exists());

    let (text, map) = read_json(&dark_path);
    let keys: BTreeSet<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, EXPECTED_KEYS.into_iter().collect::<BTreeSet<_>>());

    let hex = Regex::new("^#[0-9a-fA-F]{6}$").unwrap();
    for (key, value) in &map {
        let value = value
            .as_str()
            .unwrap_or_else(|| panic!("{key} is not a string"));
        assert!(hex.is_match(value), "{key} = {value}");
    }
    assert_eq!(map["inactive"], "#CAC4D0");
    assert_eq!(map["on_inactive"], "#FFFFFF");

    // Keys appear in file order exactly as listed.
    let mut cursor = 0;
    for key in EXPECTED_KEYS {
        let needle = format!("\n  \"{key}\": ");
        let found = text[cursor..]
            .find(&needle)
            .unwrap_or_else(|| panic!("{key} missing or out of order"));
        cursor += found + needle.len();
    }
}

#[tokio::test]
async fn light_theme_is_written_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::default()
        .with_output_dir(dir.path())
        .with_light(true);

    let written = generate(&config).await.unwrap();
    assert_eq!(written.len(), 2);

    let (_, dark) = read_json(&dir.path().join("dark-theme.json"));
    let (_, light) = read_json(&dir.path().join("light-theme.json"));
    assert_eq!(
        dark.keys().collect::<BTreeSet<_>>(),
        light.keys().collect::<BTreeSet<_>>()
    );
    assert_eq!(light["on_inactive"], "#000000");
    for key in [
        "on_primary_container",
        "on_secondary_container",
        "on_tertiary_container",
        "on_error_container",
    ] {
        assert_ne!(light[key], dark[key], "{key} should invert between modes");
    }
}

#[tokio::test]
async fn invalid_primary_leaves_outputs_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("dark-theme.json");
    std::fs::write(&existing, "previous run").unwrap();

    let base = BaseColors {
        primary: "not-a-color".into(),
        ..BaseColors::default()
    };
    let config = GeneratorConfig::default()
        .with_output_dir(dir.path())
        .with_base_colors(base)
        .with_light(true);

    match generate(&config).await {
        Err(Error::InvalidColorFormat { value }) => assert_eq!(value, "not-a-color"),
        other => panic!("expected InvalidColorFormat, got {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(&existing).unwrap(), "previous run");
    assert!(!dir.path().join("light-theme.json").exists());
}

#[tokio::test]
async fn invalid_input_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let base = BaseColors {
        warning: "#F9A8".into(),
        ..BaseColors::default()
    };
    let config = GeneratorConfig::default()
        .with_output_dir(dir.path())
        .with_base_colors(base);

    assert!(matches!(
        generate(&config).await,
        Err(Error::InvalidColorFormat { .. })
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
