pub const TEST_MAPS_API_KEY: &str = "test-maps-api-key";
pub const TEST_LLM_API_KEY: &str = "test-llm-api-key";
pub const TEST_LLM_MODEL: &str = "test-model";
pub const TEST_STORAGE_API_KEY: &str = "test-storage-api-key";
pub const TEST_STORAGE_BUCKET: &str = "review-photos";
pub const TEST_USER_AGENT: &str = "savora-tests/0.1.0";

pub const TEST_SEARCH_CENTER_LAT: f64 = 39.92;
pub const TEST_SEARCH_CENTER_LNG: f64 = 32.85;
pub const TEST_SEARCH_RADIUS_M: u32 = 15_000;
pub const TEST_SEARCH_REGION: &str = "Ankara";
