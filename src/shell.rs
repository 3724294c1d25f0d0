//! Router shell - the one place navigation side effects live

use dioxus::prelude::*;

use crate::Route;
use crate::nav;
use crate::store;

/// Wraps every routed screen. Watches the destination route and applies
/// the entry-route policy from `nav` before the screen's own effects run.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let mut store = store::use_store();

    // Mirror the live route into a signal so the effect re-runs exactly
    // once per navigation.
    let mut arrived = use_signal(|| None::<Route>);
    if *arrived.peek() != Some(route.clone()) {
        arrived.set(Some(route));
    }

    use_effect(move || {
        if let Some(dest) = arrived() {
            if nav::clears_session(&dest) {
                store.reset_session();
                web_sys::console::debug_1(&format!("session cleared on {dest}").into());
            }
        }
    });

    rsx! {
        Outlet::<Route> {}
    }
}
