pub mod use_filtered_list;
pub mod use_membership_form;
pub mod use_session;

pub use use_filtered_list::{use_filtered_list, UseFilteredListHandle};
pub use use_membership_form::{use_membership_form, UseMembershipFormHandle, WizardStep};
pub use use_session::{use_session, SessionContext, SessionProvider};
