//! Browser glue: navigation, timers, URI components and the local clock. Native
//! builds get inert fallbacks so the crate still compiles and tests on the host.

use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};

/// Full page navigation. Used after a session expires, when the router state must
/// be discarded along with the user.
pub fn redirect_to(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {}: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect requested to {}", url);
    }
}

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Percent-encode a query-string component.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Decode a query-string component, treating `+` as a space. Input that is not
/// valid UTF-8 once decoded is returned unchanged.
pub fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    match urlencoding::decode(&value) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::debug!("Leaving undecodable component as is: {}", e);
            value
        }
    }
}

/// The browser's UTC offset at the given instant; UTC off the browser.
pub fn local_offset(at: chrono::DateTime<Utc>) -> FixedOffset {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(at.timestamp_millis() as f64));
        // getTimezoneOffset is minutes *behind* UTC.
        let seconds = -(date.get_timezone_offset() as i32) * 60;
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = at;
        Utc.fix()
    }
}

/// The browser's IANA time zone, if it reports one.
pub fn detect_timezone() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let options = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
            .resolved_options();
        js_sys::Reflect::get(&options, &wasm_bindgen::JsValue::from_str("timeZone"))
            .ok()
            .and_then(|tz| tz.as_string())
            .filter(|tz| !tz.is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_escapes_spaces_and_reserved() {
        assert_eq!(
            encode_component("Session expired. Please login again."),
            "Session%20expired.%20Please%20login%20again."
        );
        assert_eq!(encode_component("/mentions?x=1"), "%2Fmentions%3Fx%3D1");
    }

    #[test]
    fn test_decode_component_round_trips_and_tolerates_garbage() {
        let msg = "Registration successful! Please login.";
        assert_eq!(decode_component(&encode_component(msg)), msg);
        assert_eq!(decode_component("a+b"), "a b");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%2Fsettings"), "/settings");
        assert_eq!(decode_component("%FF"), "%FF");
    }
}
