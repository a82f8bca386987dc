mod common;

use common::TestEnv;

#[test]
fn test_help_lists_options() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.success);
    for option in ["--folded", "--separator", "--config", "--log-file", "[FILE]"] {
        assert!(
            result.stdout.contains(option),
            "help output should mention {}; got:\n{}",
            option,
            result.stdout
        );
    }
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let env = TestEnv::new();
    let result = env.run(&["--no-such-flag"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
}

#[test]
fn test_separator_must_be_one_char() {
    let env = TestEnv::new();
    let result = env.run(&["-s", "::"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
}
