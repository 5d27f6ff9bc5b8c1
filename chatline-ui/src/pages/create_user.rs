//! Create User Page

use leptos::*;
use leptos_router::*;

use crate::api;

/// Sign-up form; returns to the login page on success
#[component]
pub fn CreateUser() -> impl IntoView {
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let submitting = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = username.get_untracked().trim().to_string();
        let pass = password.get_untracked();

        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_user(&name, &pass).await {
                Ok(user_id) => {
                    logging::log!("Created user {} ({})", name, user_id);
                    navigate("/", Default::default());
                }
                Err(e) => logging::warn!("Sign-up failed: {}", e),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12 bg-gray-800 rounded-xl p-8">
            <h1 class="text-3xl font-bold mb-6">"Create account"</h1>

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

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                >
                    "Sign up"
                </button>
            </form>

            <p class="text-gray-400 text-sm mt-6">
                "Already registered? "
                <A href="/" class="text-primary-400 hover:underline">"Log in"</A>
            </p>
        </div>
    }
}
