// Browser-backed implementations of the session seams: the token lives in
// a SameSite=Strict cookie, the user snapshot in localStorage.

use wasm_bindgen::JsValue;
use web_sys::window;

use crate::state::session::{CredentialStore, Navigator};
use crate::utils::constants::{
    STORAGE_KEY_USER_SNAPSHOT, TOKEN_COOKIE, TOKEN_COOKIE_MAX_AGE_SECONDS,
};
use crate::utils::{cookies, storage};

#[derive(Clone, Default)]
pub struct BrowserCredentialStore;

impl CredentialStore for BrowserCredentialStore {
    fn token(&self) -> Option<String> {
        cookies::get_cookie(TOKEN_COOKIE).filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) -> Result<(), String> {
        cookies::set_cookie(TOKEN_COOKIE, token, TOKEN_COOKIE_MAX_AGE_SECONDS)
    }

    fn clear_token(&self) {
        if let Err(e) = cookies::delete_cookie(TOKEN_COOKIE) {
            log::warn!("⚠️ Could not delete token cookie: {}", e);
        }
    }

    fn user_snapshot(&self) -> Option<String> {
        storage::load_raw(STORAGE_KEY_USER_SNAPSHOT)
    }

    fn set_user_snapshot(&self, json: &str) -> Result<(), String> {
        storage::save_raw(STORAGE_KEY_USER_SNAPSHOT, json)
    }

    fn clear_user_snapshot(&self) {
        if let Err(e) = storage::remove_from_storage(STORAGE_KEY_USER_SNAPSHOT) {
            log::warn!("⚠️ Could not remove user snapshot: {}", e);
        }
    }
}

/// pushState navigation. A synthetic popstate event tells the router to
/// re-read the location; browser back/forward fires the same event.
#[derive(Clone, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let Some(win) = window() else {
            return;
        };
        let Ok(history) = win.history() else {
            return;
        };
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .is_err()
        {
            log::warn!("⚠️ pushState failed for {}", path);
            return;
        }
        if let Ok(event) = web_sys::Event::new("popstate") {
            let _ = win.dispatch_event(&event);
        }
    }
}

/// Current pathname, "/" when unavailable
pub fn current_path() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
