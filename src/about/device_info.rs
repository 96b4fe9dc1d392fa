//! Formatting of device facts for row summaries.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Summary for values the device does not report
pub const DEVICE_INFO_DEFAULT: &str = "Unknown";

/// Summary when `/proc/version` cannot be parsed
pub const KERNEL_VERSION_UNAVAILABLE: &str = "Unavailable";

static PROC_VERSION_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn proc_version_regex() -> Option<&'static Regex> {
    PROC_VERSION_REGEX
        .get_or_init(|| {
            Regex::new(
                r"^Linux version (\S+) \((\S+?)\) (?:\(.+?\) )*(#\d+) (?:.*?)?((?:Sun|Mon|Tue|Wed|Thu|Fri|Sat).+)$",
            )
            .ok()
        })
        .as_ref()
}

/// Kernel version summary from the contents of `/proc/version`
///
/// `Linux version 4.19.157 (build@host) (clang ...) #1 SMP PREEMPT Tue Jan 5 ...`
/// becomes `"4.19.157\nbuild@host #1\nTue Jan 5 ..."`.
pub fn format_kernel_version(proc_version: &str) -> Option<String> {
    let caps = proc_version_regex()?.captures(proc_version.trim())?;
    Some(format!("{}\n{} {}\n{}", &caps[1], &caps[2], &caps[3], &caps[4]))
}

/// Security patch summary: `2024-03-05` becomes `March 5, 2024`.
/// Unparseable values are shown as-is.
pub fn format_security_patch(patch: &str) -> String {
    match NaiveDate::parse_from_str(patch.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => patch.to_string(),
    }
}

/// Suffix appended to the model on engineering boards
pub fn msv_suffix(msv: Option<&str>) -> &'static str {
    match msv.map(str::trim).filter(|m| !m.is_empty()) {
        Some(msv) if u64::from_str_radix(msv, 16) == Ok(0) => " (ENGINEERING)",
        _ => "",
    }
}

/// One comma-separated summary for all radios
pub fn join_baseband(versions: &[Option<String>]) -> String {
    versions
        .iter()
        .map(|v| v.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kernel_version() {
        let proc = "Linux version 4.19.157-perf (builder@buildhost) (Android clang version 12.0.5) #1 SMP PREEMPT Tue Jan 5 10:00:00 UTC 2021";
        assert_eq!(
            format_kernel_version(proc).unwrap(),
            "4.19.157-perf\nbuilder@buildhost #1\nTue Jan 5 10:00:00 UTC 2021"
        );
    }

    #[test]
    fn test_format_kernel_version_without_compiler() {
        let proc = "Linux version 5.10.0 (a@b) #7 Sat Mar 2 01:02:03 UTC 2024\n";
        assert_eq!(
            format_kernel_version(proc).unwrap(),
            "5.10.0\na@b #7\nSat Mar 2 01:02:03 UTC 2024"
        );
    }

    #[test]
    fn test_format_kernel_version_garbage() {
        assert!(format_kernel_version("not a kernel").is_none());
    }

    #[test]
    fn test_format_security_patch() {
        assert_eq!(format_security_patch("2024-03-05"), "March 5, 2024");
        assert_eq!(format_security_patch("March 2024"), "March 2024");
    }

    #[test]
    fn test_msv_suffix() {
        assert_eq!(msv_suffix(Some("0000")), " (ENGINEERING)");
        assert_eq!(msv_suffix(Some("00a1")), "");
        assert_eq!(msv_suffix(Some("zz")), "");
        assert_eq!(msv_suffix(None), "");
    }

    #[test]
    fn test_join_baseband() {
        let versions = vec![Some("M1".to_string()), None, Some("M2".to_string())];
        assert_eq!(join_baseband(&versions), "M1,,M2");
        assert_eq!(join_baseband(&[]), "");
    }
}
