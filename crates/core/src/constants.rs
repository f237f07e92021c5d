/// Default backend origin, including the versioned API root.
pub const DEFAULT_API_URL: &str = "http://localhost:3002/api/v1";

/// Environment variable that overrides the backend origin.
pub const API_URL_ENV: &str = "POSTUREKIT_API_URL";

/// Fixed timeout applied to every backend request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credential-store key under which the bearer token persists.
pub const ACCESS_TOKEN_KEY: &str = "posturekit_access_token";

/// Credential-store key for the selected display locale.
pub const LOCALE_KEY: &str = "posturekit_locale";

/// Page size for patient listings.
pub const PATIENTS_PAGE_LIMIT: u32 = 50;

/// Page size for assessment listings.
pub const ASSESSMENTS_PAGE_LIMIT: u32 = 20;
