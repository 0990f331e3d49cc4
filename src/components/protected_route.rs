use yew::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::hooks::use_session;
use crate::state::browser::BrowserNavigator;
use crate::state::session::{members_only_decision, GuardDecision, Navigator};

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub children: Html,
}

/// Members-only guard. Until rehydration resolves only a loading indicator
/// renders; an anonymous visitor is sent to the login page and never sees
/// the protected children.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let ctx = use_session();
    let decision = members_only_decision(ctx.session.is_loading(), ctx.session.is_authenticated());

    use_effect_with(decision, move |decision| {
        if let GuardDecision::Redirect(path) = decision {
            BrowserNavigator.navigate(path);
        }
        || ()
    });

    match decision {
        GuardDecision::Render => props.children.clone(),
        GuardDecision::Wait | GuardDecision::Redirect(_) => html! { <LoadingIndicator /> },
    }
}
