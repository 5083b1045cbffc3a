//! Mode detection against a real token directory.

use std::fs;
use tempfile::tempdir;
use token_babel::ModeDetector;

#[test]
fn brand_with_light_and_dark_folders_has_modes() {
    let dir = tempdir().unwrap();
    let color = dir.path().join("brands").join("apollo").join("color");
    fs::create_dir_all(color.join("light")).unwrap();
    fs::create_dir_all(color.join("dark")).unwrap();

    let mut detector = ModeDetector::new();
    let config = detector.detect("apollo", dir.path());
    assert!(config.has_modes);
    assert_eq!(config.light_path.as_deref(), Some("apollo/color/light"));
    assert_eq!(config.dark_path.as_deref(), Some("apollo/color/dark"));
}

#[test]
fn light_folder_alone_is_not_enough() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("brands/fieldedge/color/light")).unwrap();

    let config = ModeDetector::new().detect("fieldedge", dir.path());
    assert!(!config.has_modes);
    assert!(config.light_path.is_none());
}

#[test]
fn a_file_named_dark_does_not_count() {
    let dir = tempdir().unwrap();
    let color = dir.path().join("brands/apollo/color");
    fs::create_dir_all(color.join("light")).unwrap();
    fs::write(color.join("dark"), "{}").unwrap();

    assert!(!ModeDetector::new().detect("apollo", dir.path()).has_modes);
}

#[test]
fn results_are_cached_until_cleared() {
    let dir = tempdir().unwrap();
    let mut detector = ModeDetector::new();
    assert!(!detector.detect("apollo", dir.path()).has_modes);

    let color = dir.path().join("brands/apollo/color");
    fs::create_dir_all(color.join("light")).unwrap();
    fs::create_dir_all(color.join("dark")).unwrap();
    assert!(!detector.detect("apollo", dir.path()).has_modes);

    detector.clear();
    assert!(detector.detect("apollo", dir.path()).has_modes);
}
