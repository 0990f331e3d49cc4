use yew::prelude::*;

use crate::components::nav_bar::NavLink;
use crate::routes::Route;

/// Public landing page
#[function_component(HomeView)]
pub fn home_view() -> Html {
    html! {
        <section class="home-page">
            <div class="hero">
                <h1>{"Society of Clinical Medicine"}</h1>
                <p class="hero-lead">
                    {"Advancing clinical practice through education, research and \
                      a community of members across every specialty."}
                </p>
                <div class="hero-actions">
                    <NavLink to={Route::Apply} label="Apply for membership" />
                    <NavLink to={Route::Events} label="Upcoming events" />
                </div>
            </div>
            <div class="home-highlights">
                <article class="highlight-card">
                    <h2>{"Events and conferences"}</h2>
                    <p>{"Annual scientific meetings, regional study days and \
                         specialty masterclasses throughout the year."}</p>
                    <NavLink to={Route::Events} label="Browse events" />
                </article>
                <article class="highlight-card">
                    <h2>{"Publications"}</h2>
                    <p>{"Clinical guidelines, position statements and the \
                         society journal, open to all readers."}</p>
                    <NavLink to={Route::Publications} label="Browse publications" />
                </article>
                <article class="highlight-card">
                    <h2>{"Member resources"}</h2>
                    <p>{"Training materials, recorded lectures and the member \
                         directory for those signed in."}</p>
                    <NavLink to={Route::Resources} label="Browse resources" />
                </article>
            </div>
        </section>
    }
}
