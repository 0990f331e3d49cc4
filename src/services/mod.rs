pub mod api_client;
pub mod application_service;
pub mod auth_service;
pub mod cms_client;
pub mod error;
pub mod member_service;
pub mod payment_service;

pub use api_client::ApiClient;
pub use cms_client::{CmsClient, EventsFetcher, PublicationsFetcher, ResourcesFetcher};
pub use error::ApiError;
pub use member_service::DirectoryFetcher;
