/// Default device URL (address of the device in access point mode)
pub const DEFAULT_HOST: &str = "http://192.168.4.1";

/// Environment variable overriding the device URL
pub const HOST_ENV: &str = "PIXELIX_HOST";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the request timeout
pub const TIMEOUT_ENV: &str = "PIXELIX_TIMEOUT";
