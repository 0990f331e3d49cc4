use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    /// Nothing renders when there is no message
    #[prop_or_default]
    pub message: Option<String>,
}

/// Inline, list-scoped error. The stale items stay on screen underneath;
/// retrying any input change dismisses it.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="error-banner" role="alert">
                <span class="error-banner-icon">{"⚠"}</span>
                <span>{message.clone()}</span>
            </div>
        },
        None => html! {},
    }
}
