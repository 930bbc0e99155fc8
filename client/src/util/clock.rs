//! Submission timestamps.
//!
//! Cards record when the user pressed submit, in the browser's local time
//! zone and `pt-BR` date-time format (e.g. `19/10/2026, 14:03:05`).
//!
//! TRADE-OFFS
//! ==========
//! Formatting is delegated to `Date.prototype.toLocaleString` so the output
//! matches what the user sees elsewhere in the browser. SSR never submits a
//! form, so the server path returns an empty string.

const LOCALE: &str = "pt-BR";

/// Current local date-time formatted for card descriptions.
pub fn local_timestamp() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        String::from(now.to_locale_string(LOCALE, &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = LOCALE;
        String::new()
    }
}
