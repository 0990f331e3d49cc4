use yew::prelude::*;

use crate::components::nav_bar::NavLink;
use crate::routes::Route;

#[function_component(AboutView)]
pub fn about_view() -> Html {
    html! {
        <section class="about-page">
            <h1>{"About the society"}</h1>
            <p>
                {"The Society of Clinical Medicine is a professional association \
                  for clinicians at every stage of their career. We set standards \
                  for training, publish clinical guidance, and bring members \
                  together through a national programme of events."}
            </p>
            <h2>{"What we do"}</h2>
            <ul>
                <li>{"Continuing education through conferences, study days and recorded lectures"}</li>
                <li>{"Peer-reviewed publications and clinical position statements"}</li>
                <li>{"A member directory connecting specialists across the country"}</li>
                <li>{"Representation of the profession to regulators and policy makers"}</li>
            </ul>
            <h2>{"Membership"}</h2>
            <p>
                {"Membership is open to qualified clinicians and trainees. \
                  Applications are reviewed by the membership committee, \
                  usually within four weeks."}
            </p>
            <NavLink to={Route::Apply} label="Apply for membership" />
        </section>
    }
}
