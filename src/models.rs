use serde::{Deserialize, Serialize};

/// An animal record, both the stored shape and the wire shape
///
/// `id` defaults to 0 when absent from a request body: POST treats 0 as
/// "unset", while PUT discards the body id entirely in favor of the path id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Animal {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub r#class: String,
    pub legs: u32,
}
