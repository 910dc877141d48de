use qpx::config;
use std::env;

// Environment variables are process-wide, so each variable is exercised
// from a single test.

#[test]
fn test_get_encoding() {
    env::remove_var(config::ENCODING_VAR);
    assert_eq!(config::get_encoding(), config::DEFAULT_ENCODING);

    env::set_var(config::ENCODING_VAR, "  ISO-8859-7 ");
    assert_eq!(config::get_encoding(), "ISO-8859-7");

    env::set_var(config::ENCODING_VAR, "   ");
    assert_eq!(config::get_encoding(), config::DEFAULT_ENCODING);

    env::remove_var(config::ENCODING_VAR);
}

#[test]
fn test_get_detect_double_encoding() {
    env::remove_var(config::DETECT_DOUBLE_ENCODING_VAR);
    assert_eq!(
        config::get_detect_double_encoding(),
        config::DEFAULT_DETECT_DOUBLE_ENCODING
    );

    env::set_var(config::DETECT_DOUBLE_ENCODING_VAR, "true");
    assert!(config::get_detect_double_encoding());

    env::set_var(config::DETECT_DOUBLE_ENCODING_VAR, "off");
    assert!(!config::get_detect_double_encoding());

    env::remove_var(config::DETECT_DOUBLE_ENCODING_VAR);
}

#[test]
fn test_get_output_field() {
    env::remove_var(config::OUTPUT_FIELD_VAR);
    assert_eq!(config::get_output_field(), None);

    env::set_var(config::OUTPUT_FIELD_VAR, "referrer");
    assert_eq!(config::get_output_field(), Some("referrer".to_string()));

    env::remove_var(config::OUTPUT_FIELD_VAR);
}

#[test]
fn test_load_env_file() {
    use std::io::Write;
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("test.env");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "QPX_TEST_ONLY_VALUE=from-env-file").unwrap();
    drop(file);

    config::load_env_file(path.to_str());
    assert_eq!(env::var("QPX_TEST_ONLY_VALUE").unwrap(), "from-env-file");
}
