use crate::errors::{Result, UniversityError};
use crate::models::EntityKind;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// 去除首尾空白，空名称在查询前拒绝
pub fn normalize_name(kind: EntityKind, name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(UniversityError::validation(format!(
            "{kind} name must not be blank"
        )));
    }
    Ok(trimmed)
}

/// 分数必须是 0 到 100 之间的有限数
pub fn validate_score(score: f64) -> Result<()> {
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(UniversityError::validation(format!(
            "Score must be between 0 and 100, got {score}"
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(UniversityError::validation(format!(
            "Email format is invalid: {email}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name(EntityKind::Group, "  Group 1 ").unwrap(), "Group 1");
        assert!(normalize_name(EntityKind::Student, "").is_err());
        assert!(normalize_name(EntityKind::Student, " \t ").is_err());
    }

    #[test]
    fn test_validate_score() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(100.0).is_ok());
        assert!(validate_score(-1.0).is_err());
        assert!(validate_score(100.5).is_err());
        assert!(validate_score(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("alice@localhost").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice example@x.com").is_err());
        assert!(validate_email("alice@example.c").is_err());
        assert!(validate_email("").is_err());
    }
}
