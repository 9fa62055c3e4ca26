use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of account roles. Route guards check membership against this
/// enum, so an unknown role name cannot silently widen access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

/// JWT payload carried by every bearer token. Authorization reflects these
/// claims as issued; only the principal's existence is re-checked per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user ID
    pub email: String,
    pub role: Role,
    pub iat: usize, // issued at (unix timestamp)
    pub exp: usize, // expires at (unix timestamp)
    pub iss: String,
    pub aud: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), r#""teacher""#);
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), r#""student""#);
    }

    #[test]
    fn roles_deserialize_lowercase() {
        let role: Role = serde_json::from_str(r#""student""#).unwrap();
        assert_eq!(role, Role::Student);
        assert!(serde_json::from_str::<Role>(r#""admin""#).is_err());
    }

    #[test]
    fn default_role_is_student() {
        assert_eq!(Role::default(), Role::Student);
    }
}
