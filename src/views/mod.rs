// ============================================================================
// VIEWS - one module per routed page
// ============================================================================

pub mod about;
pub mod apply;
pub mod dashboard;
pub mod events;
pub mod home;
pub mod login;
pub mod members;
pub mod not_found;
pub mod publications;
pub mod resources;

pub use about::AboutView;
pub use apply::ApplyView;
pub use dashboard::DashboardView;
pub use events::EventsView;
pub use home::HomeView;
pub use login::LoginView;
pub use members::MembersView;
pub use not_found::NotFoundView;
pub use publications::PublicationsView;
pub use resources::ResourcesView;
