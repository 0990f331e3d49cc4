// ============================================================================
// APP ROOT - session provider + pathname router
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::components::auth_redirect::AuthRedirect;
use crate::components::nav_bar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::hooks::SessionProvider;
use crate::routes::Route;
use crate::state::browser::current_path;
use crate::views::{
    AboutView, ApplyView, DashboardView, EventsView, HomeView, LoginView, MembersView,
    NotFoundView, PublicationsView, ResourcesView,
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <RouterOutlet />
        </SessionProvider>
    }
}

#[function_component(RouterOutlet)]
fn router_outlet() -> Html {
    let route = use_state(|| Route::from_path(&current_path()));

    // Re-parse the location on every popstate: browser back/forward and the
    // synthetic event BrowserNavigator dispatches after pushState.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(Route::from_path(&current_path()));
            }) as Box<dyn FnMut(web_sys::Event)>);
            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            }
            // Registered once for the app's lifetime, so leaking it is fine
            closure.forget();
            || ()
        });
    }

    let view = match *route {
        Route::Home => html! { <HomeView /> },
        Route::About => html! { <AboutView /> },
        Route::Events => html! { <EventsView /> },
        Route::Publications => html! { <PublicationsView /> },
        Route::Resources => html! { <ResourcesView /> },
        Route::Members => html! {
            <ProtectedRoute><MembersView /></ProtectedRoute>
        },
        Route::Login => html! {
            <AuthRedirect><LoginView /></AuthRedirect>
        },
        Route::Apply => html! {
            <AuthRedirect><ApplyView /></AuthRedirect>
        },
        Route::Dashboard => html! {
            <ProtectedRoute><DashboardView /></ProtectedRoute>
        },
        Route::NotFound => html! { <NotFoundView /> },
    };

    html! {
        <>
            <NavBar />
            <main class="page">{ view }</main>
            <footer class="site-footer">
                <p>{"© Society of Clinical Medicine"}</p>
            </footer>
        </>
    }
}
