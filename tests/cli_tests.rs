use clap::Parser;
use resub::cli::Args;
use resub::config::LogLevel;
use std::path::PathBuf;

#[test]
fn resolved_directory_precedence_flag_over_positional() {
    let args = Args::parse_from(["resub", "--directory", "/tmp/flag_dir", "/tmp/pos_dir"]);
    let dir = args.resolved_directory().unwrap();
    assert_eq!(dir, PathBuf::from("/tmp/flag_dir"));
}

#[test]
fn resolved_directory_uses_positional_when_flag_absent() {
    let args = Args::parse_from(["resub", "/tmp/pos_dir"]);
    let dir = args.resolved_directory().unwrap();
    assert_eq!(dir, PathBuf::from("/tmp/pos_dir"));
}

#[test]
fn resolved_directory_none_when_not_given() {
    let args = Args::parse_from(["resub"]);
    assert!(args.resolved_directory().is_none());
}

#[test]
fn search_flag_disables_interactive_mode() {
    let args = Args::parse_from(["resub", "--search", "v1"]);
    assert!(!args.interactive());

    let args = Args::parse_from(["resub"]);
    assert!(args.interactive());
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["resub", "--debug", "--log-level", "quiet"]);
    let lvl = args.effective_log_level().unwrap();
    assert_eq!(lvl, LogLevel::Debug); // --debug wins

    let args = Args::parse_from(["resub", "--log-level", "info"]);
    let lvl = args.effective_log_level().unwrap();
    assert_eq!(lvl, LogLevel::Info);

    let args = Args::parse_from(["resub"]);
    assert!(args.effective_log_level().is_none());
}

#[test]
fn behavior_flags_default_off() {
    let args = Args::parse_from(["resub"]);
    assert!(!args.no_preview);
    assert!(!args.yes);
    assert!(!args.force);
    assert!(!args.dry_run);
    assert!(!args.json);
}

#[test]
fn short_flags_parse() {
    let args = Args::parse_from(["resub", "-C", "/d", "-s", "a", "-r", "b", "-y"]);
    assert_eq!(args.directory, Some(PathBuf::from("/d")));
    assert_eq!(args.search.as_deref(), Some("a"));
    assert_eq!(args.replace.as_deref(), Some("b"));
    assert!(args.yes);
}
