use yew::prelude::*;

use crate::components::nav_bar::NavLink;
use crate::routes::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <section class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for does not exist or has moved."}</p>
            <NavLink to={Route::Home} label="Back to the home page" />
        </section>
    }
}
