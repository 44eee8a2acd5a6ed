//! External user identifiers: the 24-character lowercase hex form of a
//! MongoDB `ObjectId`.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use mongodb::bson::oid::ObjectId;

use crate::error::{UserError, UserResult};

const ID_LEN: usize = 24;

/// Parses an external identifier.
///
/// Only exactly 24 characters from `[0-9a-f]` are accepted; uppercase hex,
/// surrounding whitespace and any other length are rejected with
/// [`UserError::InvalidIdentifier`].
pub fn parse_user_id(external: &str) -> UserResult<ObjectId> {
    let well_formed = external.len() == ID_LEN
        && external
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

    if !well_formed {
        return Err(UserError::InvalidIdentifier {
            identifier: external.to_string(),
        });
    }

    ObjectId::parse_str(external).map_err(|_| UserError::InvalidIdentifier {
        identifier: external.to_string(),
    })
}

/// Formats a key for clients; inverse of [`parse_user_id`].
pub fn format_user_id(id: &ObjectId) -> String {
    id.to_hex()
}

/// Raw `{id}` path segment.
///
/// A segment axum cannot decode (e.g. percent-encoded invalid UTF-8) is
/// rejected as [`UserError::InvalidIdentifier`] carrying the still-encoded
/// segment. Format checks are left to [`parse_user_id`].
pub struct UserIdPath(pub String);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = UserError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(UserIdPath(id)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Undecodable user id in path");
                let identifier = parts
                    .uri
                    .path()
                    .rsplit('/')
                    .next()
                    .unwrap_or_default()
                    .to_string();
                Err(UserError::InvalidIdentifier { identifier })
            }
        }
    }
}
