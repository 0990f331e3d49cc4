pub mod browser;
pub mod list;
pub mod session;

pub use browser::{current_path, BrowserCredentialStore, BrowserNavigator};
pub use list::{
    DebouncedSearch, ListController, ListPhase, ListQuery, PageFetcher, PageResult,
};
pub use session::{
    anonymous_only_decision, members_only_decision, CredentialStore, GuardDecision, Navigator,
    SessionService,
};
