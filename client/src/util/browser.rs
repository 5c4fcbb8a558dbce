//! Thin wrappers over `window` APIs used by pages.
//!
//! All functions no-op (or return a fixed value) outside the browser so SSR
//! rendering stays deterministic.

use chrono::NaiveDate;

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Hard navigation to `href` (full page load).
pub fn set_href(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Today's date in the user's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Current year for the footer.
pub fn current_year() -> i32 {
    use chrono::Datelike as _;
    today().year()
}
