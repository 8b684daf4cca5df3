//! Device REST API paths, shared by the client and the simulator

/// Base URI of the REST API
pub const BASE_URI: &str = "/rest/api/v1";

/// Directory listing endpoint
pub const FS_ENDPOINT: &str = "/fs";

/// File read/write/delete endpoint
pub const FS_FILE_ENDPOINT: &str = "/fs/file";

/// Plugin slot endpoint
pub const DISPLAY_SLOTS_ENDPOINT: &str = "/display/slots";

/// Sensor endpoint
pub const SENSORS_ENDPOINT: &str = "/sensors";

/// Single setting endpoint (key list when no key is given)
pub const SETTING_ENDPOINT: &str = "/setting";

/// Multipart field carrying an uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// Content type of uploaded files
pub const UPLOAD_MIME: &str = "text/plain";

/// Root directory
pub const ROOT_DIR: &str = "/";
