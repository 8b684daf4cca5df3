/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: &str = "8080";

/// Default number of entries per directory listing page
pub const DEFAULT_PAGE_SIZE: &str = "5";

/// Environment variables read when the matching argument is absent
pub const HOST_ENV: &str = "SIM_HOST";
pub const PORT_ENV: &str = "SIM_PORT";
pub const PAGE_SIZE_ENV: &str = "SIM_PAGE_SIZE";
