//! Login Page
//!
//! Credentials form plus the backend address the client talks to.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::session::{Session, SessionState};

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let api_url = create_rw_signal(api::get_api_base());
    let submitting = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = username.get_untracked().trim().to_string();
        let pass = password.get_untracked();
        api::set_api_base(&api_url.get_untracked());

        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&name, &pass).await {
                Ok(user_id) => {
                    logging::log!("Logged in as {} ({})", name, user_id);
                    session.sign_in(Session {
                        user_id,
                        username: name,
                    });
                    navigate("/chat", Default::default());
                }
                Err(e) => logging::warn!("Login failed: {}", e),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12 bg-gray-800 rounded-xl p-8">
            <h1 class="text-3xl font-bold mb-6">"Log in"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Server"</label>
                    <input
                        type="url"
                        placeholder=api::DEFAULT_API_BASE
                        prop:value=move || api_url.get()
                        on:input=move |ev| api_url.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>

            <p class="text-gray-400 text-sm mt-6">
                "No account? "
                <A href="/create-user" class="text-primary-400 hover:underline">"Create one"</A>
            </p>
        </div>
    }
}
