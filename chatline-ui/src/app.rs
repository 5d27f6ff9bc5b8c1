//! App Root Component
//!
//! Router and context providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{CreateUser, Login, MainChat};
use crate::state::session::provide_session_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Login />
                        <Route path="/create-user" view=CreateUser />
                        <Route path="/chat" view=MainChat />
                        <Route path="/chat/:channel_id" view=MainChat />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
