use crate::server::error::config::ConfigError;

/// Parses a boolean flag from an environment variable value
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, ignoring case and
/// surrounding whitespace.
///
/// # Arguments
/// - `name` - Name of the environment variable, used in the error
/// - `value` - The raw value to parse
///
/// # Returns
/// - `Ok(bool)` - Successfully parsed flag
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a recognised boolean
pub fn parse_bool_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

/// Parses a strictly positive integer from an environment variable value
///
/// # Arguments
/// - `name` - Name of the environment variable, used in the error
/// - `value` - The raw value to parse
///
/// # Returns
/// - `Ok(T)` - Successfully parsed non-zero value
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a number or is zero
pub fn parse_positive<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let parsed = value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })?;

    if parsed == T::default() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(parsed)
}
