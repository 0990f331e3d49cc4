use yew::prelude::*;

use crate::hooks::use_session;
use crate::routes::Route;
use crate::state::browser::BrowserNavigator;
use crate::state::session::Navigator;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: Route,
    pub label: String,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let to = props.to;
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        BrowserNavigator.navigate(to.path());
    });
    html! {
        <a class="nav-link" href={to.path()} {onclick}>{ props.label.clone() }</a>
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let ctx = use_session();

    let on_logout = {
        let session = ctx.session.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            session.logout();
        })
    };

    let account_area = if ctx.session.is_loading() {
        html! {}
    } else if let Some(user) = ctx.session.user() {
        html! {
            <div class="nav-account">
                <NavLink to={Route::Dashboard} label={user.display_name()} />
                <a class="nav-link" href="/" onclick={on_logout}>{"Sign out"}</a>
            </div>
        }
    } else {
        html! {
            <div class="nav-account">
                <NavLink to={Route::Login} label="Sign in" />
                <NavLink to={Route::Apply} label="Join us" />
            </div>
        }
    };

    html! {
        <header class="nav-bar">
            <NavLink to={Route::Home} label="Society of Clinical Medicine" />
            <nav class="nav-links">
                <NavLink to={Route::About} label="About" />
                <NavLink to={Route::Events} label="Events" />
                <NavLink to={Route::Publications} label="Publications" />
                <NavLink to={Route::Resources} label="Resources" />
                <NavLink to={Route::Members} label="Directory" />
            </nav>
            { account_area }
        </header>
    }
}
