//! End-to-end theme resolution against real directory trees.

mod common;

use common::Scratch;
use serde_json::{json, Value};
use std::fs;
use waltheme::config::{Settings, DEFAULT_ALPHA};
use waltheme::error::ThemeError;
use waltheme::theme::{
    parse, FileLastUsedStore, LastUsedStore, ThemeIdentifier, ThemeResolver, ThemeVariant,
};

fn resolver(root: &Scratch) -> ThemeResolver<FileLastUsedStore> {
    let settings = Settings::with_roots(
        root.path().join("builtin"),
        root.path().join("user"),
        root.path().join("cache"),
    );
    ThemeResolver::from_settings(settings)
}

fn sixteen_colors() -> Value {
    let table: serde_json::Map<String, Value> = (0..16)
        .map(|i| (format!("color{i}"), json!(format!("#{i:02x}{i:02x}{i:02x}"))))
        .collect();
    Value::Object(table)
}

#[test]
fn bundled_gruvbox_loads_with_default_alpha_and_records_last_used() {
    let root = Scratch::new("e2e-gruvbox");
    let source = json!({
        "wallpaper": "bg.jpg",
        "colors": sixteen_colors(),
        "special": {"foreground": "#ebdbb2", "background": "#282828", "cursor": "#ebdbb2"},
    });
    root.write(
        "builtin/colorschemes/dark/gruvbox.json",
        &serde_json::to_string_pretty(&source).unwrap(),
    );

    let resolver = resolver(&root);
    let data = resolver
        .resolve_and_load(&ThemeIdentifier::parse("gruvbox"), false)
        .unwrap();

    let mut expected = source.as_object().unwrap().clone();
    expected.insert("alpha".to_string(), json!(DEFAULT_ALPHA));
    assert_eq!(data.as_json(), &expected);

    let record = fs::read_to_string(root.path().join("cache/last_used_theme")).unwrap();
    assert_eq!(record, "gruvbox.json");
    assert_eq!(
        resolver.store().load().unwrap().as_deref(),
        Some("gruvbox.json")
    );
}

#[test]
fn legacy_export_is_normalized_on_load() {
    let root = Scratch::new("e2e-legacy");
    let path = root.write(
        "downloads/sexy.json",
        r##"{"foreground":"#fff","background":"#000","color":["#1","#2","#3","#4","#5","#6","#7","#8","#9","#a"]}"##,
    );

    let data = parse(&path, DEFAULT_ALPHA).unwrap();
    assert_eq!(data.special("cursor"), Some("#a"));
    assert_eq!(data.color("color9"), Some("#a"));
    assert_eq!(data.special("background"), Some("#000"));
    assert_eq!(data.wallpaper(), Some("None"));
}

#[test]
fn literal_path_outside_theme_dirs_is_used_for_both_variants() {
    let root = Scratch::new("e2e-literal");
    let path = root.write("downloads/mine.json", r#"{"wallpaper": "mine.png"}"#);
    let id = ThemeIdentifier::parse(&path.to_string_lossy());

    let resolver = resolver(&root);
    for light in [false, true] {
        let data = resolver.resolve_and_load(&id, light).unwrap();
        assert_eq!(data.wallpaper(), Some("mine.png"));
    }
}

#[test]
fn user_theme_shadows_builtin_theme() {
    let root = Scratch::new("e2e-shadow");
    root.write(
        "builtin/colorschemes/light/paper.json",
        r#"{"wallpaper": "builtin"}"#,
    );
    root.write(
        "user/colorschemes/light/paper.json",
        r#"{"wallpaper": "user"}"#,
    );

    let data = resolver(&root)
        .resolve_and_load(&ThemeIdentifier::parse("paper"), true)
        .unwrap();
    assert_eq!(data.wallpaper(), Some("user"));
}

#[test]
fn unknown_theme_fails_without_recording() {
    let root = Scratch::new("e2e-unknown");
    fs::create_dir_all(root.path().join("builtin/colorschemes/dark")).unwrap();

    let resolver = resolver(&root);
    let err = resolver
        .resolve_and_load(&ThemeIdentifier::parse("does-not-exist"), false)
        .unwrap_err();
    assert!(matches!(
        err,
        ThemeError::ThemeNotFound {
            variant: ThemeVariant::Dark
        }
    ));
    assert!(!root.path().join("cache/last_used_theme").exists());
}

#[test]
fn random_over_empty_builtin_set_never_returns_a_theme() {
    let root = Scratch::new("e2e-random-empty");
    fs::create_dir_all(root.path().join("builtin/colorschemes/dark")).unwrap();

    let err = resolver(&root)
        .resolve_and_load(&ThemeIdentifier::Random, false)
        .unwrap_err();
    assert!(
        matches!(
            err,
            ThemeError::ThemeNotFound { .. } | ThemeError::DirectoryNotFound(_)
        ),
        "got: {err}"
    );
}

#[test]
fn random_user_picks_from_user_dirs() {
    let root = Scratch::new("e2e-random-user");
    root.write(
        "user/colorschemes/dark/only.json",
        r#"{"wallpaper": "only"}"#,
    );

    let resolver = resolver(&root);
    let data = resolver
        .resolve_and_load(&ThemeIdentifier::RandomUser, true)
        .unwrap();
    assert_eq!(data.wallpaper(), Some("only"));
    assert_eq!(resolver.store().load().unwrap().as_deref(), Some("only.json"));
}
