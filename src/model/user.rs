use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Profile information visible only to the user it belongs to.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrivateUserInfoDto {
    /// User id, serialized as a string.
    pub id: String,
    pub username: String,
    pub is_admin: bool,
    pub verified: bool,
}
