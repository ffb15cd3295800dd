//! Fixed protocol constants for the storefront login endpoint

/// Authentication endpoint credentials are posted to
pub const LOGIN_URL: &str = "https://apis.ccbp.in/login";

/// Response field holding the issued token on success
pub const TOKEN_FIELD: &str = "jwt_token";

/// Response field holding the rejection message on failure
pub const ERROR_FIELD: &str = "error_msg";

/// Cookie key the session token is stored under
pub const TOKEN_COOKIE: &str = "jwt_token";

/// Session cookie lifetime
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Route authenticated users are sent to
pub const HOME_ROUTE: &str = "/";

/// Route the form is mounted on
pub const LOGIN_ROUTE: &str = "/login";

// Branding
pub const LOGO_URL: &str = "https://assets.ccbp.in/frontend/react-js/nxt-trendz-logo-img.png";
pub const LOGIN_IMAGE_URL: &str =
  "https://assets.ccbp.in/frontend/react-js/nxt-trendz-login-img.png";

// Messages shown when the server gives none
pub const FALLBACK_REJECTION: &str = "Login failed";
pub const TRANSPORT_FAILURE: &str = "Unable to reach the login service";
pub const DECODE_FAILURE: &str = "Unexpected response from the login service";
pub const STORAGE_FAILURE: &str = "Could not save your session";
