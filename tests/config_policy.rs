use std::io::Write;

use password_policy::{Config, PasswordPolicy, UserAttributes, ViolationCode};

#[test]
fn config_env_overrides_apply() {
    // Single test touching the process environment; the other tests in
    // this binary construct Config directly.
    std::env::set_var("PASSWORD_MIN_LENGTH", "12");
    std::env::set_var("PASSWORD_MAX_SIMILARITY", "0.5");
    std::env::set_var("PASSWORD_SIMILARITY_ATTRIBUTES", "username, nickname");

    let config = Config::load().unwrap();
    assert_eq!(config.min_length, 12);
    assert_eq!(config.max_similarity, 0.5);
    assert_eq!(config.similarity_attributes, vec!["username", "nickname"]);

    std::env::remove_var("PASSWORD_MIN_LENGTH");
    std::env::remove_var("PASSWORD_MAX_SIMILARITY");
    std::env::remove_var("PASSWORD_SIMILARITY_ATTRIBUTES");
}

#[test]
fn configured_min_length_reaches_the_policy() {
    let config = Config {
        min_length: 12,
        ..Config::default()
    };
    let policy = config.build_policy().unwrap();
    let report = policy.evaluate("elevenchars", None);
    assert_eq!(report.codes(), vec![ViolationCode::PasswordTooShort]);
}

#[test]
fn configured_attributes_reach_the_similarity_rule() {
    let config = Config {
        similarity_attributes: vec!["nickname".to_string()],
        ..Config::default()
    };
    let policy = config.build_policy().unwrap();

    let mut user = UserAttributes::new();
    user.insert("nickname", "moonlight");
    user.insert("username", "unrelated");
    let report = policy.evaluate("moonlight", Some(&user));
    assert_eq!(report.codes(), vec![ViolationCode::PasswordTooSimilar]);

    // The default "username" attribute is no longer consulted.
    let report = policy.evaluate("unrelated", Some(&user));
    assert!(report.is_ok());
}

#[test]
fn denylist_file_is_loaded_once_and_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# site-specific denylist").unwrap();
    writeln!(file, "OnlyHere2024").unwrap();
    writeln!(file).unwrap();
    file.flush().unwrap();

    let config = Config {
        denylist_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    let policy = config.build_policy().unwrap();

    let report = policy.evaluate("onlyhere2024", None);
    assert_eq!(report.codes(), vec![ViolationCode::PasswordTooCommon]);

    // Entries from the embedded default list are not in play.
    let report = policy.evaluate("Password1", None);
    assert!(report.is_ok());
}

#[test]
fn custom_validator_chain_controls_report_order() {
    use password_policy::validation::denylist::Denylist;
    use password_policy::validation::validators::{
        CommonPasswordValidator, MinimumLengthValidator, NumericPasswordValidator,
    };

    // Numeric first, then common, then length: the report must follow.
    let policy = PasswordPolicy::new(vec![
        Box::new(NumericPasswordValidator),
        Box::new(CommonPasswordValidator::new(Denylist::from_entries([
            "1234567",
        ]))),
        Box::new(MinimumLengthValidator::new(8)),
    ]);
    let report = policy.evaluate("1234567", None);
    assert_eq!(
        report.codes(),
        vec![
            ViolationCode::PasswordEntirelyNumeric,
            ViolationCode::PasswordTooCommon,
            ViolationCode::PasswordTooShort,
        ]
    );
}
