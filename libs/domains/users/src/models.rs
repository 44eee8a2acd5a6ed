use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::identifier::format_user_id;

/// User document as stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string; never serialized to clients.
    pub hashed_password: String,
}

/// Document body for inserts and full replacements; the store owns `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub hashed_password: String,
}

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// 24-character lowercase hex identifier
    #[schema(example = "68eeafce05740b9d36aab307")]
    pub id: String,
    #[schema(example = "Juan Pérez")]
    pub name: String,
    #[schema(example = "juan@email.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: format_user_id(&user.id),
            name: user.name,
            email: user.email,
        }
    }
}

/// RFC 5322 address whose domain has at least two non-empty labels, so
/// `a@b` is rejected while `a@b.co` passes.
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    let dotted_domain = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| {
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        });

    if email.validate_email() && dotted_domain {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message(Cow::Borrowed("Invalid email format")))
    }
}

/// DTO for creating a new user
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Juan Pérez")]
    pub name: String,

    #[validate(custom(function = "validate_email_address"))]
    #[schema(example = "juan@email.com")]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "secret1", min_length = 6)]
    pub password: String,
}

/// DTO for replacing a user; every field is required.
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Juan Pérez")]
    pub name: String,

    #[validate(custom(function = "validate_email_address"))]
    #[schema(example = "juan.perez@email.com")]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "secret2", min_length = 6)]
    pub password: String,
}

/// Outcome of a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_response_hides_digest() {
        let id = ObjectId::new();
        let user = User {
            id,
            name: "Ana".into(),
            email: "ana@example.com".into(),
            hashed_password: "$argon2id$v=19$...".into(),
        };

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            value,
            json!({ "id": id.to_hex(), "name": "Ana", "email": "ana@example.com" })
        );
    }

    #[test]
    fn test_user_document_uses_underscore_id() {
        let user = User {
            id: ObjectId::new(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            hashed_password: "digest".into(),
        };
        let doc = mongodb::bson::to_document(&user).unwrap();
        assert!(doc.contains_key("_id"));
        assert!(!doc.contains_key("id"));
    }

    #[test]
    fn test_create_user_validation() {
        let valid = CreateUser {
            name: "Juan Pérez".into(),
            email: "juan@email.com".into(),
            password: "secret1".into(),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateUser {
            name: String::new(),
            email: "juan-at-email".into(),
            password: "12345".into(),
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_email_requires_dotted_domain() {
        for ok in ["juan@email.com", "a@b.co", "first.last@mail.example.org"] {
            assert!(validate_email_address(ok).is_ok(), "{ok} should pass");
        }
        for bad in ["a@b", "a@b.", "a@.com", "a@b..com", "juan-at-email", "@email.com", ""] {
            let err = validate_email_address(bad).unwrap_err();
            assert_eq!(err.code, "email", "{bad}");
        }
    }

    #[test]
    fn test_update_user_rejects_undotted_domain() {
        let input = UpdateUser {
            name: "Juan".into(),
            email: "juan@localhost".into(),
            password: "secret1".into(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_delete_result_wire_name() {
        let value = serde_json::to_value(DeleteResult { deleted_count: 1 }).unwrap();
        assert_eq!(value, json!({ "deletedCount": 1 }));
    }
}
