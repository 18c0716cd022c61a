// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::config::{self, Config, SortOrder};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::asset_source;
use iced_gallery::gallery::Gallery;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write english config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-title"), "Gallery");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[drag\nactivation_distance = ")
        .expect("Failed to write broken config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_drag_section_round_trips_through_toml() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[gallery]\nsort_order = \"modified-date\"\n\n[drag]\nactivation_distance = 4.0\ntouch_enabled = false\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.gallery.sort_order, Some(SortOrder::ModifiedDate));

    let drag = config.drag.to_drag_config();
    assert!((drag.activation_distance - 4.0).abs() < f32::EPSILON);
    assert!(!drag.touch_enabled);
}

#[test]
fn test_scanned_directory_feeds_gallery_in_order() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["beach.png", "alps.jpeg", "readme.md", "city.webp"] {
        fs::write(dir.path().join(name), b"").expect("Failed to write file");
    }
    fs::create_dir(dir.path().join("nested.png")).expect("Failed to create dir");

    let paths = asset_source::scan(dir.path(), SortOrder::Alphabetical).expect("scan");
    let gallery = Gallery::load(paths);

    let names: Vec<String> = gallery
        .iter()
        .map(|record| record.source().file_name())
        .collect();
    assert_eq!(names, vec!["alps.jpeg", "beach.png", "city.webp"]);
}

#[test]
fn test_scan_missing_directory_is_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    assert!(asset_source::scan(&dir.path().join("absent"), SortOrder::default()).is_err());
}
