use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Minimum password length accepted by the sign-in form
pub const MIN_PASSWORD_LEN: usize = 6;

/// The signed-in staff member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Staff")
    }

    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Token plus user returned by a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
}

impl CredentialError {
    pub fn message(&self) -> &'static str {
        match self {
            CredentialError::EmailRequired => "Email is required",
            CredentialError::EmailInvalid => "Please enter a valid email address",
            CredentialError::PasswordRequired => "Password is required",
            CredentialError::PasswordTooShort => "Password must be at least 6 characters",
        }
    }
}

impl std::fmt::Display for CredentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-field validation result for the sign-in form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<CredentialError>,
    pub password: Option<CredentialError>,
}

impl CredentialErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn first(&self) -> Option<CredentialError> {
        self.email.or(self.password)
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> CredentialErrors {
        let email = self.email.trim();
        let email_error = if email.is_empty() {
            Some(CredentialError::EmailRequired)
        } else if !looks_like_email(email) {
            Some(CredentialError::EmailInvalid)
        } else {
            None
        };

        let password_error = if self.password.is_empty() {
            Some(CredentialError::PasswordRequired)
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            Some(CredentialError::PasswordTooShort)
        } else {
            None
        };

        CredentialErrors {
            email: email_error,
            password: password_error,
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validates_email_then_password() {
        let errors = Credentials::new("", "").validate();
        assert_eq!(errors.email, Some(CredentialError::EmailRequired));
        assert_eq!(errors.password, Some(CredentialError::PasswordRequired));
        assert_eq!(errors.first(), Some(CredentialError::EmailRequired));

        let errors = Credentials::new("staff@", "12345").validate();
        assert_eq!(errors.email, Some(CredentialError::EmailInvalid));
        assert_eq!(errors.password, Some(CredentialError::PasswordTooShort));

        assert!(
            Credentials::new("staff@sevakendra.org", "secret1")
                .validate()
                .is_empty()
        );
    }

    #[test]
    fn too_short_password_message() {
        assert_eq!(
            CredentialError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn session_decodes_mongo_user_id() {
        let session: Session = serde_json::from_value(json!({
            "token": "abc",
            "user": { "_id": "u1", "name": "Asha Rao", "email": "asha@sk.org", "role": "admin", "phone": "9876543210" }
        }))
        .unwrap();

        assert_eq!(session.user.id.as_deref(), Some("u1"));
        assert_eq!(session.user.initials(), "AR");
        assert_eq!(session.user.extra.get("phone"), Some(&json!("9876543210")));
    }
}
