//! Main Chat Page
//!
//! Channel list on the left, the selected channel on the right. Serves both
//! `/chat` and `/chat/:channel_id`.

use leptos::*;
use leptos_router::*;

use crate::components::{ChannelList, MessagePane};
use crate::state::channels::{ChannelId, SelectedChannel};

/// Main chat view
#[component]
pub fn MainChat() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let route_channel = create_memo(move |_| {
        params.with(|p| ChannelId::from_route_param(p.get("channel_id").map(String::as_str)))
    });

    let selected = create_rw_signal(None::<SelectedChannel>);

    // A route that names no channel clears the header
    create_effect(move |_| {
        if route_channel.get().is_none() {
            selected.set(None);
        }
    });

    let on_select = Callback::new(move |channel: SelectedChannel| {
        if route_channel.get_untracked() != Some(channel.id) {
            navigate(&channel.id.chat_path(), Default::default());
        }
        let _ = selected.try_set(Some(channel));
    });

    let selected_id = Signal::derive(move || selected.with(|s| s.as_ref().map(|s| s.id)));

    view! {
        <div class="flex space-x-6">
            <ChannelList on_select=on_select />

            <section class="flex-1 flex flex-col space-y-4">
                <h1 class="text-2xl font-bold">
                    {move || {
                        selected
                            .with(|s| s.as_ref().map(|s| format!("# {}", s.name)))
                            .unwrap_or_else(|| "Chatline".to_string())
                    }}
                </h1>

                <MessagePane channel=selected_id />
            </section>
        </div>
    }
}
