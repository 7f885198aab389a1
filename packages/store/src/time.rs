//! Platform-aware wall clock. The browser has no `SystemTime`, so timestamps
//! come from `js_sys::Date` on wasm and `chrono` everywhere else.

/// Current UTC time as an ISO-8601 string with millisecond precision,
/// e.g. `"2024-03-01T10:15:30.120Z"`.
#[cfg(target_arch = "wasm32")]
pub fn now_iso8601() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_iso8601_utc() {
        let ts = now_iso8601();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.split('T').count(), 2);
    }
}
