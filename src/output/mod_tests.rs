use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: sarif");
}

#[test]
fn explicit_color_modes_ignore_terminal() {
    assert!(ColorMode::Always.enabled(false));
    assert!(!ColorMode::Never.enabled(true));
}

#[test]
fn auto_color_requires_terminal() {
    assert!(!ColorMode::Auto.enabled(false));
}
