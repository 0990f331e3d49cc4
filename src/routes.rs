/// Pathname-based routes. Navigation goes through the `Navigator` seam
/// (pushState + synthetic popstate); the root component re-parses the
/// location on every popstate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Events,
    Publications,
    Resources,
    Members,
    Login,
    Apply,
    Dashboard,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        match normalized {
            "/" => Route::Home,
            "/about" => Route::About,
            "/events" => Route::Events,
            "/publications" => Route::Publications,
            "/resources" => Route::Resources,
            "/members" => Route::Members,
            "/login" => Route::Login,
            "/apply" => Route::Apply,
            "/dashboard" => Route::Dashboard,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Events => "/events",
            Route::Publications => "/publications",
            Route::Resources => "/resources",
            Route::Members => "/members",
            Route::Login => "/login",
            Route::Apply => "/apply",
            Route::Dashboard => "/dashboard",
            Route::NotFound => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_parse() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/events"), Route::Events);
        assert_eq!(Route::from_path("/events/"), Route::Events);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(Route::from_path("/no-such-page"), Route::NotFound);
        assert_eq!(Route::from_path("/events/123"), Route::NotFound);
    }
}
