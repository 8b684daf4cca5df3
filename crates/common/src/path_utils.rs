/// Error type for path and key validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    Empty,
    ContainsNullByte,
}

impl ArgumentError {
    pub fn message(&self) -> &'static str {
        match self {
            ArgumentError::Empty => "must not be empty",
            ArgumentError::ContainsNullByte => "must not contain null bytes",
        }
    }
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ArgumentError {}

/// Validate a file path received by the simulated device.
/// The device takes both "/name" and "name", so only the obviously
/// unusable values are rejected:
/// - empty paths
/// - paths with an embedded null byte
pub fn validate_path(path: &str) -> Result<(), ArgumentError> {
    validate_non_empty(path)
}

/// Validate a settings key. Same rules as paths.
pub fn validate_key(key: &str) -> Result<(), ArgumentError> {
    validate_non_empty(key)
}

fn validate_non_empty(value: &str) -> Result<(), ArgumentError> {
    if value.is_empty() {
        return Err(ArgumentError::Empty);
    }

    if value.contains('\0') {
        return Err(ArgumentError::ContainsNullByte);
    }

    Ok(())
}

/// Make a path absolute by prefixing "/" when missing
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Normalize a directory so it always ends with "/"
/// ("" and "/" both mean the root directory)
pub fn normalize_dir(dir: &str) -> String {
    let mut dir = normalize_path(dir);
    if !dir.ends_with('/') {
        dir.push('/');
    }
    dir
}
