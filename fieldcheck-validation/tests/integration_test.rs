//! Integration tests for fieldcheck-validation

use fieldcheck_validation::*;
use std::io::Write;
use std::sync::Arc;

#[test]
fn test_default_message_constants() {
    assert_eq!(EMAIL, "email");
    assert_eq!(EMAIL_MSG, "%s is not valid");
    assert_eq!(MIN_INT_MSG, "%s should be more than %v");
    assert_eq!(MIN_FLOAT_MSG, "%s should be more than %v");
    assert_eq!(MIN_STRING_MSG, "%s should have more than %v characters");
}

#[test]
fn test_passing_checks_leave_validator_clean() {
    let mut v = Validator::new();
    for _ in 0..5 {
        v.email("john.doe@example.com", "email", "")
            .min_int(10, 10, "age", "")
            .min_float(0.1, 0.1, "ratio", "")
            .min_string("ab", 2, "code", "");
    }

    assert!(v.is_passed());
    assert!(!v.is_failed());
    assert!(v.errors().is_empty());
}

#[test]
fn test_failed_state_is_sticky() {
    let mut v = Validator::new();
    v.min_int(1, 2, "a", "");
    assert!(v.is_failed());

    v.min_int(5, 2, "b", "").required("x", "c", "");
    assert!(v.is_failed());
    assert_eq!(v.is_failed(), !v.is_passed());
    assert_eq!(v.errors().len(), 1);
}

#[test]
fn test_first_failure_wins_by_call_order() {
    let mut v = Validator::new();
    v.min_string("", 5, "username", "too short")
        .required("", "username", "missing");
    assert_eq!(v.error("username"), Some("too short"));

    let mut v = Validator::new();
    v.required("", "username", "missing")
        .min_string("", 5, "username", "too short");
    assert_eq!(v.error("username"), Some("missing"));
}

#[test]
fn test_all_fields_accumulate() {
    let mut v = Validator::new();
    v.email("a@b", "email", "")
        .min_int(3, 10, "score", "")
        .min_float(9.75, 10.0, "goal", "")
        .min_string(" ", 2, "username", "")
        .min_string("rey", 2, "name", "");

    let errors = v.errors();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors["email"], "email is not valid");
    assert_eq!(errors["score"], "score should be more than 10");
    assert_eq!(errors["goal"], "goal should be more than 10");
    assert_eq!(errors["username"], "username should have more than 2 characters");
    assert!(!errors.contains_key("name"));
}

#[test]
fn test_custom_message_is_verbatim_for_every_rule() {
    let msg = "Custom: %s stays %v";
    let pattern = regex::Regex::new("^x$").unwrap();

    let mut v = Validator::new();
    v.required("", "r", msg)
        .email("bad", "e", msg)
        .min_int(0, 1, "mi", msg)
        .min_float(0.0, 1.0, "mf", msg)
        .min_string("", 1, "ms", msg)
        .max_int(2, 1, "xi", msg)
        .between_int(0, 1, 2, "bi", msg)
        .len_string("", 1, "ls", msg)
        .matches("y", &pattern, "re", msg)
        .one_of(&0, &[1], "oo", msg)
        .check(false, "cu", msg);

    assert_eq!(v.errors().len(), 11);
    assert!(v.errors().values().all(|m| m == msg));
}

#[test]
fn test_into_result_json() {
    let mut v = Validator::new();
    v.required("", "name", "").min_int(3, 10, "score", "");

    let errors = v.into_result().unwrap_err();
    let json = errors.to_json();
    assert_eq!(json["errors"][0]["field"], "name");
    assert_eq!(json["errors"][1]["message"], "score should be more than 10");
}

#[test]
fn test_validate_trait_propagates_with_question_mark() {
    struct Login<'a> {
        email: &'a str,
        password: &'a str,
    }

    impl Validate for Login<'_> {
        fn validate(&self, v: &mut Validator) {
            v.email(self.email, "email", "")
                .min_string(self.password, 8, "password", "");
        }
    }

    fn handle(login: &Login<'_>) -> Result<&'static str, Box<dyn std::error::Error>> {
        login.check()?;
        Ok("welcome")
    }

    let good = Login {
        email: "user@example.com",
        password: "correct horse",
    };
    assert_eq!(handle(&good).unwrap(), "welcome");

    let bad = Login {
        email: "user@example.com",
        password: "short",
    };
    let err = handle(&bad).unwrap_err();
    assert_eq!(
        err.to_string(),
        "password: password should have more than 8 characters\n"
    );
}

#[cfg(feature = "toml")]
#[test]
fn test_message_table_from_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, r#"minInt = "%s must be %v or higher""#).unwrap();
    writeln!(file, r#"required = "please provide %s""#).unwrap();

    let table = MessageTable::from_file(file.path()).unwrap();
    let mut v = Validator::with_messages(Arc::new(table));
    v.min_int(1, 5, "level", "").required("", "name", "");

    assert_eq!(v.error("level"), Some("level must be 5 or higher"));
    assert_eq!(v.error("name"), Some("please provide name"));
}

#[test]
fn test_message_table_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"email": "%s looks wrong"}}"#).unwrap();

    let table = MessageTable::from_file(file.path()).unwrap();
    assert_eq!(table.template(Rule::Email), "%s looks wrong");
}

#[cfg(feature = "toml")]
#[test]
fn test_message_table_file_errors() {
    let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    assert!(matches!(
        MessageTable::from_file(file.path()),
        Err(ConfigError::Parse(_))
    ));

    assert!(matches!(
        MessageTable::from_file("/nonexistent/messages.toml"),
        Err(ConfigError::Io(_))
    ));

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, r#"maxInt = "%s is too big""#).unwrap();
    assert!(matches!(
        MessageTable::from_file(file.path()),
        Err(ConfigError::MalformedTemplate { .. })
    ));
}

#[test]
fn test_validators_share_default_table() {
    let a = Validator::new();
    let b = Validator::default();
    assert_eq!(a.messages(), b.messages());
    assert_eq!(a.messages().template(Rule::MinString), MIN_STRING_MSG);
}
