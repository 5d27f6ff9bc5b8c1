//! Navigation Component
//!
//! Header bar with the brand and the signed-in user.

use leptos::*;
use leptos_router::*;

use crate::state::session::SessionState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let on_sign_out = move |_: web_sys::MouseEvent| {
        session.sign_out();
        navigate("/", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/chat" class="flex items-center space-x-3">
                        <span class="text-2xl">"💬"</span>
                        <span class="text-xl font-bold text-white">"Chatline"</span>
                    </A>

                    {move || match session.username() {
                        Some(username) => view! {
                            <div class="flex items-center space-x-4">
                                <span class="text-gray-300">{username}</span>
                                <button
                                    on:click=on_sign_out.clone()
                                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                >
                                    "Sign out"
                                </button>
                            </div>
                        }
                        .into_view(),
                        None => view! {
                            <div class="flex items-center space-x-1">
                                <NavLink href="/" label="Log in" />
                                <NavLink href="/create-user" label="Sign up" />
                            </div>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
