//! Chat widget showing the conversation log and an input for new messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `ChatState` per instance, so several widgets on a page keep
//! separate threads. Rendering only reads that state; the turn itself runs
//! through `ChatState::submit`, `ChatClient::send` and `ChatState::settle`.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::api::{BrowserTransport, ChatClient};
use crate::state::chat::{ChatState, SubmitOutcome};
use crate::util::keys::{KeyAction, key_action};

/// Conversation log, typing indicator, and message input.
#[component]
pub fn ChatWidget(#[prop(optional)] config: WidgetConfig) -> impl IntoView {
    let placeholder = config.placeholder.clone();
    let client = StoredValue::new(ChatClient::new(BrowserTransport, config));

    let state = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let log_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry (or the indicator) in view.
    Effect::new(move || {
        state.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = log_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        // Empty and Busy leave the input as typed.
        if let Some(SubmitOutcome::Accepted(pending)) = state.try_update(|s| s.submit(&text)) {
            input.set(String::new());
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                let result = client.send(&pending).await;
                state.update(|s| s.settle(result));
            });
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if key_action(&ev.key(), ev.shift_key()) == KeyAction::Submit {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !state.with(ChatState::is_typing);

    view! {
        <div class="chat-widget">
            <div class="chat-widget__log" role="log" aria-live="polite" node_ref=log_ref>
                {move || {
                    state
                        .with(|s| s.entries().to_vec())
                        .into_iter()
                        .map(|entry| {
                            let class = format!("message {}", entry.role.as_class());
                            view! { <div class=class>{entry.text}</div> }
                        })
                        .collect::<Vec<_>>()
                }}

                <Show when=move || state.with(ChatState::is_typing)>
                    <div class="typing-indicator" aria-label="Assistant is typing">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
            </div>

            <div class="chat-widget__input-row">
                <textarea
                    class="chat-widget__input"
                    rows="1"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button class="btn btn--primary chat-widget__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
