//! JWT claim structure for access tokens issued by the identity provider.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
///
/// `role` and `permissions` are copied verbatim from the provider's user
/// record. Missing claims deserialize to an empty role and an empty grant
/// list, so a token without them authorizes nothing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// Role name as stored by the provider (e.g. "Tesoureiro")
    #[serde(default)]
    pub role: String,
    /// Permission strings granted to the user ("module.action")
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
