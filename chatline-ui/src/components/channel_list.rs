//! Channel List Component
//!
//! Side panel that loads the channel directory, reports the channel named
//! in the URL to its parent and lets the user add channels.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::channels::{apply_create_result, ChannelDirectory, ChannelId, ChannelRow, SelectedChannel};

/// Channel list panel
///
/// `on_select` fires when the `:channel_id` route segment matches a loaded
/// channel, and whenever a row is clicked.
#[component]
pub fn ChannelList(#[prop(into)] on_select: Callback<SelectedChannel>) -> impl IntoView {
    let params = use_params_map();
    let route_channel = create_memo(move |_| {
        params.with(|p| ChannelId::from_route_param(p.get("channel_id").map(String::as_str)))
    });

    let directory = create_rw_signal(ChannelDirectory::default());
    let pending_name = create_rw_signal(String::new());

    // Load once on mount
    spawn_local(async move {
        match api::fetch_channels().await {
            Ok(loaded) => {
                logging::log!("Loaded {} channels", loaded.len());
                let _ = directory.try_set(loaded);
            }
            Err(e) => logging::warn!("Failed to load channels: {}", e),
        }
    });

    report_route_selection(directory.into(), route_channel.into(), on_select);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = pending_name.get_untracked();

        spawn_local(async move {
            let result = api::create_channel(&name).await;

            let (Some(mut current), Some(mut pending)) =
                (directory.try_get_untracked(), pending_name.try_get_untracked())
            else {
                return;
            };

            match apply_create_result(&mut current, &mut pending, &name, result) {
                Ok(id) => {
                    logging::log!("Created channel {} ({})", name, id);
                    let _ = directory.try_set(current);
                    let _ = pending_name.try_set(pending);
                }
                Err(e) => logging::warn!("Failed to create channel {}: {}", name, e),
            }
        });
    };

    view! {
        <aside class="w-64 shrink-0 bg-gray-800 rounded-lg p-4 flex flex-col">
            <h2 class="text-sm font-semibold text-gray-400 uppercase tracking-wide mb-3">
                "Channels"
            </h2>

            <ul class="flex-1 space-y-1 overflow-y-auto">
                {move || {
                    let rows = directory.with(|d| d.rows(route_channel.get()));
                    if rows.is_empty() {
                        view! {
                            <li class="text-gray-500 text-sm px-3 py-2">"No channels yet"</li>
                        }
                        .into_view()
                    } else {
                        rows.into_iter()
                            .map(|row| view! { <ChannelRowItem row=row on_select=on_select /> })
                            .collect_view()
                    }
                }}
            </ul>

            <form on:submit=on_submit class="mt-4 flex space-x-2">
                <input
                    type="text"
                    placeholder="New channel"
                    prop:value=move || pending_name.get()
                    on:input=move |ev| pending_name.set(event_target_value(&ev))
                    class="flex-1 min-w-0 bg-gray-700 rounded-lg px-3 py-2 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    class="bg-primary-600 hover:bg-primary-700 rounded-lg px-3 py-2 font-semibold transition-colors"
                >
                    "Add"
                </button>
            </form>
        </aside>
    }
}

/// Call `on_select` whenever the channel named by `route` is in `directory`
///
/// The match is memoized, so the callback fires once when a load makes the
/// route resolvable and again only when the match itself changes.
pub fn report_route_selection(
    directory: Signal<ChannelDirectory>,
    route: Signal<Option<ChannelId>>,
    on_select: Callback<SelectedChannel>,
) {
    let route_selection = create_memo(move |_| directory.with(|d| d.select(route.get())));

    create_effect(move |_| {
        if let Some(channel) = route_selection.get() {
            on_select.call(channel);
        }
    });
}

#[component]
fn ChannelRowItem(row: ChannelRow, on_select: Callback<SelectedChannel>) -> impl IntoView {
    let selection = SelectedChannel::from(&row.channel);

    let class = if row.active {
        "px-3 py-2 rounded-lg cursor-pointer bg-gray-700 text-white font-medium"
    } else {
        "px-3 py-2 rounded-lg cursor-pointer text-gray-300 hover:bg-gray-700 hover:text-white transition-colors"
    };

    view! {
        <li class=class on:click=move |_| on_select.call(selection.clone())>
            "# " {row.channel.name}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::channels::Channel;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn channel(id: i64, name: &str) -> Channel {
        Channel {
            id: ChannelId(id),
            name: name.to_string(),
        }
    }

    /// Wire up selection for a raw route segment, recording every callback
    fn harness(
        raw_route: &str,
    ) -> (
        RwSignal<ChannelDirectory>,
        RwSignal<Option<String>>,
        Rc<RefCell<Vec<SelectedChannel>>>,
    ) {
        let directory = create_rw_signal(ChannelDirectory::default());
        let raw = create_rw_signal(Some(raw_route.to_string()));
        let route = create_memo(move |_| raw.with(|r| ChannelId::from_route_param(r.as_deref())));

        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorded = calls.clone();
        let on_select = Callback::new(move |selected: SelectedChannel| {
            recorded.borrow_mut().push(selected);
        });

        report_route_selection(directory.into(), route.into(), on_select);
        (directory, raw, calls)
    }

    #[test]
    fn test_selection_fires_once_when_load_lands() {
        let runtime = create_runtime();
        let (directory, _raw, calls) = harness("1");

        assert!(calls.borrow().is_empty());

        directory.set(ChannelDirectory::from_response(Some(vec![channel(1, "general")])));
        assert_eq!(
            *calls.borrow(),
            vec![SelectedChannel {
                name: "general".to_string(),
                id: ChannelId(1)
            }]
        );

        directory.update(|d| d.push(channel(2, "random")));
        assert_eq!(calls.borrow().len(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_selection_follows_route_changes() {
        let runtime = create_runtime();
        let (directory, raw, calls) = harness("1");
        directory.set(ChannelDirectory::from_response(Some(vec![
            channel(1, "general"),
            channel(2, "random"),
        ])));

        raw.set(Some("2".to_string()));

        let ids: Vec<ChannelId> = calls.borrow().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![ChannelId(1), ChannelId(2)]);

        runtime.dispose();
    }

    #[test]
    fn test_non_numeric_route_never_fires() {
        let runtime = create_runtime();
        let (directory, _raw, calls) = harness("abc");

        directory.set(ChannelDirectory::from_response(Some(vec![channel(1, "general")])));
        directory.update(|d| d.push(channel(2, "random")));

        assert!(calls.borrow().is_empty());

        runtime.dispose();
    }
}
