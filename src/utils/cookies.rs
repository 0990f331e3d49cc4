use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Build the Set-Cookie style attribute string for a session cookie.
/// SameSite=Strict keeps the cookie off cross-site requests; the bearer
/// credential used for API calls is attached from memory, never read from
/// this cookie by the backend.
pub fn build_cookie(name: &str, value: &str, max_age_seconds: i64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; SameSite=Strict",
        name, value, max_age_seconds
    )
}

/// Extract a cookie value from a `document.cookie` style header
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

pub fn set_cookie(name: &str, value: &str, max_age_seconds: i64) -> Result<(), String> {
    let document = html_document().ok_or("document is not available")?;
    document
        .set_cookie(&build_cookie(name, value, max_age_seconds))
        .map_err(|_| "Could not write cookie".to_string())
}

pub fn get_cookie(name: &str) -> Option<String> {
    let document = html_document()?;
    let header = document.cookie().ok()?;
    cookie_value(&header, name)
}

pub fn delete_cookie(name: &str) -> Result<(), String> {
    // Max-Age=0 expires the cookie immediately
    let document = html_document().ok_or("document is not available")?;
    document
        .set_cookie(&build_cookie(name, "", 0))
        .map_err(|_| "Could not delete cookie".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_cookie_carries_samesite_and_max_age() {
        let cookie = build_cookie("scm_session_token", "abc123", 604_800);
        assert_eq!(
            cookie,
            "scm_session_token=abc123; Max-Age=604800; Path=/; SameSite=Strict"
        );
    }

    #[test]
    fn cookie_value_finds_the_named_cookie() {
        let header = "theme=dark; scm_session_token=tok-1; lang=en";
        assert_eq!(
            cookie_value(header, "scm_session_token").as_deref(),
            Some("tok-1")
        );
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn cookie_value_does_not_match_name_prefixes() {
        let header = "scm_session_token_old=stale; scm_session_token=fresh";
        assert_eq!(
            cookie_value(header, "scm_session_token").as_deref(),
            Some("fresh")
        );
    }
}
