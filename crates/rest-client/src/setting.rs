use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Value of a device setting, sent as a query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{}", value),
            SettingValue::Int(value) => write!(f, "{}", value),
            SettingValue::UInt(value) => write!(f, "{}", value),
            SettingValue::Float(value) => write_float(f, *value),
            SettingValue::Text(value) => f.write_str(value),
        }
    }
}

/// Number notation the device web interface sends: named non-finite values,
/// exponent form outside [1e-6, 1e21), no negative zero
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", value);
    }

    let exponent = format!("{:e}", value);
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, power)
        }
        _ => f.write_str(&exponent),
    }
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for SettingValue {
                fn from(value: $ty) -> Self {
                    SettingValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_from!(Bool: bool);
impl_from!(Int: i8, i16, i32, i64);
impl_from!(UInt: u8, u16, u32, u64);
impl_from!(Float: f64);
impl_from!(Text: String, &str);

/// Parses command line input: booleans, then integers, then finite floats,
/// anything else is text
impl FromStr for SettingValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<bool>() {
            return Ok(SettingValue::Bool(value));
        }
        if let Ok(value) = s.parse::<i64>() {
            return Ok(SettingValue::Int(value));
        }
        if let Ok(value) = s.parse::<u64>() {
            return Ok(SettingValue::UInt(value));
        }
        match s.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(SettingValue::Float(value)),
            _ => Ok(SettingValue::Text(s.to_string())),
        }
    }
}
