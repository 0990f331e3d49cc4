use yew::prelude::*;

#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! {
        <div class="loading-indicator">
            <div class="spinner"></div>
            <p>{"Loading..."}</p>
        </div>
    }
}
