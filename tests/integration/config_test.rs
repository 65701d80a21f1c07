//! Config file loading and saving.

use super::helpers::temp_file;
use ircflow::Config;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_temp, path) = temp_file("config.toml", "[view]\nwidth = 420\n\n[measure]\nbold_extra = 1\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.view.width, Some(420));
    assert_eq!(config.view.line_height, 14);
    assert_eq!(config.measure.bold_extra, 1);
    assert_eq!(config.measure.cell_width, 7);
    assert_eq!(config.wrap.lookback, 25);
    assert!(config.clipboard.copy_on_release);
}

#[test]
fn saved_config_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.view.width = Some(640);
    config.wrap.lookback = 10;
    config.clipboard.copy_on_release = false;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn invalid_values_are_rejected() {
    let (_temp, path) = temp_file("config.toml", "[wrap]\nlookback = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("wrap.lookback"));
}

#[test]
fn malformed_toml_is_an_error() {
    let (_temp, path) = temp_file("config.toml", "[view\nwidth = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn config_drives_the_line_breaker() {
    let (_temp, path) = temp_file("config.toml", "[wrap]\nlookback = 3\n[measure]\ncell_width = 1\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.line_breaker().lookback(), 3);
    assert_eq!(config.width_for_columns(80), 80);
}
