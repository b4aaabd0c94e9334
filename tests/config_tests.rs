use discountbot::config::Config;
use discountbot::errors::AppError;

fn with_color(color: &str) -> Config {
    Config {
        highlight_color: color.to_string(),
        ..Config::default()
    }
}

#[test]
fn test_highlight_color_accepts_hex() {
    assert_eq!(with_color("FFFF00").highlight_rgb().unwrap(), 0xFFFF00);
    assert_eq!(with_color("#00ff7f").highlight_rgb().unwrap(), 0x00FF7F);
    assert_eq!(with_color(" 123abc ").highlight_rgb().unwrap(), 0x123ABC);
}

#[test]
fn test_highlight_color_rejects_non_hex() {
    for color in ["+FFFFF", "-FFFFF", "yellow", "FFFF0", "FFFF000", "0xFFFF", "FF FF0", ""] {
        assert!(
            matches!(with_color(color).highlight_rgb(), Err(AppError::Config(_))),
            "color {color:?} should be rejected"
        );
    }
}

#[test]
fn test_resolve_path_prefers_explicit_file() {
    let explicit = std::path::Path::new("/tmp/other.conf");
    assert_eq!(Config::resolve_path(Some(explicit)), explicit);
    assert_eq!(Config::resolve_path(None), Config::config_file());
}
