pub mod app;
pub mod auth_redirect;
pub mod error_banner;
pub mod loading_indicator;
pub mod nav_bar;
pub mod pagination;
pub mod protected_route;

pub use app::App;
pub use auth_redirect::AuthRedirect;
pub use error_banner::ErrorBanner;
pub use loading_indicator::LoadingIndicator;
pub use nav_bar::NavBar;
pub use pagination::Pagination;
pub use protected_route::ProtectedRoute;
