pub mod application;
pub mod auth;
pub mod event;
pub mod member;
pub mod payment;
pub mod publication;
pub mod resource;
pub mod user;

pub use application::{ApplicationDraft, ApplicationStatus, ApplicationSummary, SubmitApplicationResponse};
pub use auth::{LoginRequest, LoginResponse};
pub use event::Event;
pub use member::{DirectoryResponse, MemberRecord};
pub use payment::{Payment, PaymentStatus};
pub use publication::Publication;
pub use resource::ResourceItem;
pub use user::{MemberStatus, User, UserRole};
