use std::path::PathBuf;

use quill::config::{ConfigFlags, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".quillrc");
    let content = r#"
# comment
--no-syntax

--tab-stop 4

--log-file=quill.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.no_syntax);
    assert_eq!(flags.tab_stop, Some(4));
    assert_eq!(flags.log_file, Some(PathBuf::from("quill.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".quillrc");
    let content = "--tab-stop 2\n--quit-times 5\n--log-file file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "quill".to_string(),
        "--tab-stop".to_string(),
        "4".to_string(),
        "--no-syntax".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert_eq!(effective.tab_stop, Some(4), "cli should override tab stop");
    assert_eq!(effective.quit_times, Some(5), "file flags should remain");
    assert!(effective.no_syntax, "cli flags should be applied");
    assert_eq!(
        effective.log_file,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_effective_settings_from_layers() {
    let global = ConfigFlags {
        quit_times: Some(1),
        ..ConfigFlags::default()
    };
    let local = ConfigFlags {
        tab_stop: Some(4),
        ..ConfigFlags::default()
    };
    let settings = global.union(&local).settings();
    assert_eq!(settings.tab_stop, 4);
    assert_eq!(settings.quit_times, 1);
    assert!(settings.syntax_enabled);
}
