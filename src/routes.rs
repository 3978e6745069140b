// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const ANIMALS: &str = "/v1/animals";
pub const ANIMAL_ITEM: &str = "/v1/animals/{id}";
