//! App Root Component
//!
//! Main application component with routing, global state, and the responsive
//! breakpoint listener.

use leptos::*;
use leptos_router::*;

use crate::pages::Tracker;
use crate::state::global::{provide_global_state, viewport_is_small, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Keep the small-screen flag in step with window resizes
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    window_event_listener(ev::resize, move |_| {
        state.small_screen.set(viewport_is_small());
    });

    view! {
        <Router>
            <main class="background">
                <Routes>
                    <Route path="/" view=Tracker />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Back to the Chronicle"</A>
        </div>
    }
}
