// ============================================================================
// SESSION CONTEXT - Yew wiring for the session service
// ============================================================================
// The service itself lives in state/session.rs and knows nothing about Yew;
// this provider constructs the browser-backed instance once, rehydrates it
// after the first render, and re-renders consumers whenever it changes.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::state::browser::{BrowserCredentialStore, BrowserNavigator};
use crate::state::session::{CredentialStore, Navigator, SessionService};

#[derive(Clone)]
pub struct SessionContext {
    pub session: SessionService,
    epoch: u32,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.epoch == other.epoch
    }
}

struct Epoch(u32);

impl Reducible for Epoch {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Epoch(self.0.wrapping_add(1)))
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let epoch = use_reducer(|| Epoch(0));
    let service = use_mut_ref(|| {
        SessionService::new(
            Rc::new(BrowserCredentialStore) as Rc<dyn CredentialStore>,
            Rc::new(BrowserNavigator) as Rc<dyn Navigator>,
        )
    });
    let session = service.borrow().clone();

    {
        let session = session.clone();
        let dispatcher = epoch.dispatcher();
        use_effect_with((), move |_| {
            session.set_on_change(move || dispatcher.dispatch(()));
            // Rehydration is local-storage only and resolves synchronously;
            // the first paint still shows the loading state of the guards.
            session.rehydrate();
            || ()
        });
    }

    let context = SessionContext {
        session,
        epoch: epoch.0,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must run inside a SessionProvider")
}
