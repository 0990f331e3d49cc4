// ============================================================================
// SHARED CONSTANTS - storage keys, page sizes, routes
// ============================================================================

/// Cookie holding the opaque bearer token
pub const TOKEN_COOKIE: &str = "scm_session_token";

/// Token cookie lifetime: 7 days
pub const TOKEN_COOKIE_MAX_AGE_SECONDS: i64 = 7 * 24 * 60 * 60;

/// localStorage key for the serialized user snapshot
pub const STORAGE_KEY_USER_SNAPSHOT: &str = "scm_user";

/// Quiet period before a search term takes effect
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

// Page sizes per list instance
pub const EVENTS_PAGE_SIZE: u32 = 6;
pub const PUBLICATIONS_PAGE_SIZE: u32 = 6;
pub const RESOURCES_PAGE_SIZE: u32 = 9;
pub const MEMBERS_PAGE_SIZE: u32 = 12;

// Routes the session layer navigates to
pub const ROUTE_HOME: &str = "/";
pub const ROUTE_LOGIN: &str = "/login";
pub const ROUTE_DASHBOARD: &str = "/dashboard";
