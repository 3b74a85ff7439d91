use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub display_name: String,
    pub points: i32,
    /// Derived from points via the level ladder; never persisted
    pub level: u32,
}
