// Validation traits

use crate::{ValidationErrors, Validator};

/// Types that describe their own checks.
///
/// Implementors push rules onto the validator they are given; `check`
/// runs them against a fresh validator and reports the outcome.
pub trait Validate {
    fn validate(&self, v: &mut Validator);

    fn check(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        self.validate(&mut v);
        v.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Signup {
        username: String,
        email: String,
        age: i64,
    }

    impl Validate for Signup {
        fn validate(&self, v: &mut Validator) {
            v.required(&self.username, "username", "")
                .min_string(&self.username, 3, "username", "")
                .email(&self.email, "email", "")
                .min_int(self.age, 18, "age", "");
        }
    }

    #[test]
    fn test_valid_record() {
        let signup = Signup {
            username: "rey".to_string(),
            email: "rey@example.com".to_string(),
            age: 18,
        };
        assert!(signup.check().is_ok());
    }

    #[test]
    fn test_all_fields_reported() {
        let signup = Signup {
            username: String::new(),
            email: "rey".to_string(),
            age: 12,
        };

        let errors = signup.check().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("username"), Some("username is required"));
        assert_eq!(errors.get("email"), Some("email is not valid"));
        assert_eq!(errors.get("age"), Some("age should be more than 18"));
    }
}
