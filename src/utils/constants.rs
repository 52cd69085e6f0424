/// localStorage key holding the bearer token (raw string, not JSON)
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Shown when a failed response carries no usable message
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Value of `payment_status` for settled packages
pub const PAYMENT_STATUS_PAID: &str = "PAID";

pub const NO_PACKAGES_MESSAGE: &str = "No packages";

// Element ids
pub const APP_ROOT_ID: &str = "app";
pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Shown when a payment succeeds with an empty body
pub const PAYMENT_DONE_MESSAGE: &str = "Payment completed";
