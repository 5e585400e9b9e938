use super::*;

#[test]
fn test_log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.log_level, Level::INFO);
    assert!(!config.json_format);
    assert!(config.log_dir.ends_with("logs"));
}

#[test]
fn test_log_config_default_log_dir_contains_item_daemon() {
    let config = LogConfig::default();
    let path_str = config.log_dir.to_string_lossy();
    assert!(path_str.contains(".item-daemon"));
}

#[test]
fn test_log_file_is_inside_log_dir() {
    let config = LogConfig {
        log_dir: PathBuf::from("/var/log/item-daemon"),
        ..Default::default()
    };
    assert_eq!(
        config.log_file(),
        PathBuf::from("/var/log/item-daemon/item-daemon.log")
    );
}

#[test]
fn test_parse_rotation_hourly() {
    let rotation = parse_rotation("hourly");
    // Rotation doesn't impl PartialEq, so use debug
    let debug = format!("{rotation:?}");
    assert_eq!(debug, format!("{:?}", Rotation::HOURLY));
}

#[test]
fn test_parse_rotation_never() {
    let debug = format!("{:?}", parse_rotation("never"));
    assert_eq!(debug, format!("{:?}", Rotation::NEVER));
}

#[test]
fn test_parse_rotation_case_insensitive() {
    let debug = format!("{:?}", parse_rotation("HOURLY"));
    assert_eq!(debug, format!("{:?}", Rotation::HOURLY));
}

#[test]
fn test_parse_rotation_unknown_defaults_to_daily() {
    let rotation = parse_rotation("weekly");
    let debug = format!("{rotation:?}");
    let daily = format!("{:?}", parse_rotation("daily"));
    assert_eq!(debug, daily);
}

#[test]
fn test_log_filename_constant() {
    assert_eq!(LOG_FILENAME, "item-daemon.log");
}
