//! Message Pane Component
//!
//! Messages of the selected channel, refreshed by polling, plus a composer.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api;
use crate::state::channels::ChannelId;
use crate::state::messages::MessageLog;
use crate::state::session::SessionState;

const POLL_INTERVAL_MS: u32 = 3_000;

/// Messages for `channel`; empty placeholder when nothing is selected
#[component]
pub fn MessagePane(#[prop(into)] channel: Signal<Option<ChannelId>>) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let log = create_rw_signal(MessageLog::default());
    let draft = create_rw_signal(String::new());
    let sending = create_rw_signal(false);

    // Start over whenever the channel changes
    create_effect(move |_| {
        let current = channel.get();
        log.set(MessageLog::for_channel(current));
        if let Some(id) = current {
            fetch_newer(log, id);
        }
    });

    let interval = Interval::new(POLL_INTERVAL_MS, move || {
        if let Some(id) = channel.try_get_untracked().flatten() {
            fetch_newer(log, id);
        }
    });
    on_cleanup(move || drop(interval));

    let on_send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(channel_id) = channel.get_untracked() else {
            return;
        };
        let Some(user_id) = session.session.with_untracked(|s| s.as_ref().map(|s| s.user_id)) else {
            logging::warn!("Cannot send without a session");
            return;
        };
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }

        sending.set(true);
        spawn_local(async move {
            match api::send_message(channel_id, user_id, &text).await {
                Ok(id) => {
                    logging::log!("Sent message {} to channel {}", id, channel_id);
                    let _ = draft.try_set(String::new());
                    fetch_newer(log, channel_id);
                }
                Err(e) => logging::warn!("Failed to send message: {}", e),
            }
            let _ = sending.try_set(false);
        });
    };

    let can_send = move || {
        session.user_id().is_some() && channel.get().is_some() && !sending.get()
    };

    view! {
        <div class="flex-1 flex flex-col bg-gray-800 rounded-lg p-4 min-h-[60vh]">
            <div class="flex-1 space-y-2 overflow-y-auto">
                {move || {
                    if channel.get().is_none() {
                        return view! {
                            <p class="text-gray-500">"Pick a channel to start chatting."</p>
                        }
                        .into_view();
                    }

                    let messages = log.with(|l| l.messages().to_vec());
                    if messages.is_empty() {
                        view! { <p class="text-gray-500">"No messages yet."</p> }.into_view()
                    } else {
                        messages
                            .into_iter()
                            .map(|message| view! {
                                <div class="text-sm">
                                    <span class="font-semibold text-primary-400 mr-2">{message.author()}</span>
                                    <span class="text-gray-200">{message.text}</span>
                                </div>
                            })
                            .collect_view()
                    }
                }}
            </div>

            <form on:submit=on_send class="mt-4 flex space-x-2">
                <input
                    type="text"
                    placeholder=move || {
                        if session.user_id().is_some() {
                            "Write a message"
                        } else {
                            "Log in to send messages"
                        }
                    }
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    disabled=move || !can_send()
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none
                           disabled:opacity-50"
                />
                <button
                    type="submit"
                    disabled=move || !can_send()
                    class="bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg px-4 py-2 font-semibold transition-colors"
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

/// Fetch messages after the last one held and merge them into `log`
fn fetch_newer(log: RwSignal<MessageLog>, channel: ChannelId) {
    let Some(after) = log
        .try_with_untracked(|l| (l.channel() == Some(channel)).then(|| l.last_id()))
        .flatten()
    else {
        return;
    };

    spawn_local(async move {
        match api::fetch_messages(channel, after).await {
            Ok(batch) => {
                let _ = log.try_update(|l| l.merge(channel, batch));
            }
            Err(e) => logging::warn!("Failed to fetch messages for channel {}: {}", channel, e),
        }
    });
}
