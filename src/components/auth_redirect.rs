use yew::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::hooks::use_session;
use crate::state::browser::BrowserNavigator;
use crate::state::session::{anonymous_only_decision, GuardDecision, Navigator};

#[derive(Properties, PartialEq)]
pub struct AuthRedirectProps {
    #[prop_or_default]
    pub children: Html,
}

/// Wraps pages that only make sense for anonymous visitors (login, apply):
/// a signed-in member is sent to the dashboard instead.
#[function_component(AuthRedirect)]
pub fn auth_redirect(props: &AuthRedirectProps) -> Html {
    let ctx = use_session();
    let decision =
        anonymous_only_decision(ctx.session.is_loading(), ctx.session.is_authenticated());

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
