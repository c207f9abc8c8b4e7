/// Log priorities understood by the Android log buffer
use strum_macros::{Display, EnumString, VariantNames};

/// Priority of a log line.
///
/// The discriminants are the values of `android_LogPriority` from
/// `<android/log.h>` and are handed to liblog unchanged. `UNKNOWN`,
/// `DEFAULT` and `SILENT` exist in the C enum but are not valid for writes,
/// so they have no variant here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, VariantNames,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[repr(i32)]
pub enum Priority {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Fatal = 7,
}

impl Priority {
    /// Every writable priority, lowest first.
    pub const ALL: [Priority; 6] = [
        Priority::Verbose,
        Priority::Debug,
        Priority::Info,
        Priority::Warn,
        Priority::Error,
        Priority::Fatal,
    ];

    /// Numeric value as expected by `__android_log_write`.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Single-letter code used by logcat's brief format.
    pub fn letter(self) -> char {
        match self {
            Priority::Verbose => 'V',
            Priority::Debug => 'D',
            Priority::Info => 'I',
            Priority::Warn => 'W',
            Priority::Error => 'E',
            Priority::Fatal => 'F',
        }
    }
}

impl TryFrom<i32> for Priority {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, String> {
        match value {
            2 => Ok(Priority::Verbose),
            3 => Ok(Priority::Debug),
            4 => Ok(Priority::Info),
            5 => Ok(Priority::Warn),
            6 => Ok(Priority::Error),
            7 => Ok(Priority::Fatal),
            _ => Err(format!("Invalid log priority: {value}")),
        }
    }
}

impl From<log::Level> for Priority {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Priority::Verbose,
            log::Level::Debug => Priority::Debug,
            log::Level::Info => Priority::Info,
            log::Level::Warn => Priority::Warn,
            log::Level::Error => Priority::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::VariantNames;

    #[test]
    fn test_priority_values_match_android_log_h() {
        assert_eq!(Priority::Verbose.as_i32(), 2);
        assert_eq!(Priority::Debug.as_i32(), 3);
        assert_eq!(Priority::Info.as_i32(), 4);
        assert_eq!(Priority::Warn.as_i32(), 5);
        assert_eq!(Priority::Error.as_i32(), 6);
        assert_eq!(Priority::Fatal.as_i32(), 7);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::Verbose.to_string(), "VERBOSE");
        assert_eq!(Priority::Warn.to_string(), "WARN");
        assert_eq!(Priority::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!(Priority::from_str("INFO").ok(), Some(Priority::Info));
        assert_eq!(Priority::from_str("error").ok(), Some(Priority::Error));
        assert_eq!(Priority::from_str("Debug").ok(), Some(Priority::Debug));
        assert!(Priority::from_str("silent").is_err());
    }

    #[test]
    fn test_priority_try_from() {
        for priority in Priority::ALL {
            assert_eq!(Priority::try_from(priority.as_i32()), Ok(priority));
        }
        // UNKNOWN, DEFAULT and SILENT are not writable
        assert!(Priority::try_from(0).is_err());
        assert!(Priority::try_from(1).is_err());
        assert!(Priority::try_from(8).is_err());
        assert!(Priority::try_from(-1).is_err());
    }

    #[test]
    fn test_priority_ordering() {
        let mut sorted = Priority::ALL;
        sorted.sort();
        assert_eq!(sorted, Priority::ALL);
        assert!(Priority::Verbose < Priority::Fatal);
    }

    #[test]
    fn test_priority_letters() {
        let letters: String = Priority::ALL.iter().map(|p| p.letter()).collect();
        assert_eq!(letters, "VDIWEF");
    }

    #[test]
    fn test_priority_variant_names() {
        assert_eq!(
            Priority::VARIANTS,
            &["VERBOSE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"]
        );
    }

    #[test]
    fn test_priority_from_log_level() {
        assert_eq!(Priority::from(log::Level::Trace), Priority::Verbose);
        assert_eq!(Priority::from(log::Level::Debug), Priority::Debug);
        assert_eq!(Priority::from(log::Level::Info), Priority::Info);
        assert_eq!(Priority::from(log::Level::Warn), Priority::Warn);
        assert_eq!(Priority::from(log::Level::Error), Priority::Error);
    }
}
