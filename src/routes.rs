// Route path constants - single source of truth for all fixture paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const VERSION: &str = "/version";

// Only mounted when SERVE_DOCS is enabled
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
