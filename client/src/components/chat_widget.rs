//! Floating chat widget that relays visitor messages to the remote assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the application root, outside `<Routes>`, so navigation
//! never resets the conversation. Protocol rules live in `state::chat`; this
//! component wires them to the DOM, the network call, the prompt timer and
//! the window click listener.
//!
//! LIFECYCLE
//! =========
//! The click listener and any pending prompt timer are released in
//! `on_cleanup`. A chat request cannot be cancelled; its outcome is applied
//! whenever it lands.

use leptos::prelude::*;

use crate::content::OWNER_NAME;
use crate::net::api::send_chat;
use crate::net::types::ChatReply;
use crate::state::chat::{ChatMessage, ChatState, Role};
use crate::util::markdown::render_markdown_html;

/// Launcher button, proactive prompt bubble and chat panel.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let end_ref = NodeRef::<leptos::html::Div>::new();

    // First click anywhere on the page unlocks the proactive prompt.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::click, move |_| {
            let latched = chat.with_untracked(|c| c.engagement == crate::state::chat::Engagement::Interacted);
            if !latched {
                chat.update(|c| {
                    c.record_interaction();
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    // One prompt timer per epoch. Replacing the stored timer drops, and so
    // cancels, the one armed for the previous epoch.
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        let pending = StoredValue::new_local(None::<Timeout>);
        let epoch = Memo::new(move |_| chat.with(|c| c.prompt_epoch));
        Effect::new(move || {
            let armed = epoch.get();
            let timer = Timeout::new(crate::state::chat::prompt_delay_millis(), move || {
                if chat.try_update(|c| c.fire_prompt_timer(armed)).unwrap_or(false) {
                    crate::util::audio::play_notification();
                }
            });
            pending.set_value(Some(timer));
        });
        on_cleanup(move || {
            pending.try_update_value(Option::take);
        });
    }

    // Keep the newest message in view.
    let transcript_marker = Memo::new(move |_| {
        chat.with(|c| (c.is_open(), c.is_loading(), c.messages.last().map(|m| m.id.clone())))
    });
    Effect::new(move || {
        let _ = transcript_marker.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = end_ref.get() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(request) = chat.try_update(|c| c.begin_send(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        let had_thread = request.thread_id.is_some();
        leptos::task::spawn_local(async move {
            match send_chat(&request).await {
                Ok(body) => chat.update(|c| c.complete(ChatReply::classify(body, had_thread))),
                Err(err) => {
                    leptos::logging::error!("chat request failed: {err}");
                    chat.update(|c| {
                        c.fail();
                    });
                }
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_toggle = move |_| chat.update(ChatState::toggle);
    let can_send = move || !input.get().trim().is_empty() && !chat.with(ChatState::is_loading);
    let first_name = OWNER_NAME.split_whitespace().next().unwrap_or(OWNER_NAME);

    view! {
        <div class="chat-widget">
            <Show when=move || chat.with(ChatState::is_prompting)>
                <div class="chat-widget__bubble">
                    <button
                        class="chat-widget__bubble-close"
                        title="Dismiss"
                        on:click=move |_| chat.update(ChatState::dismiss_prompt)
                    >
                        "×"
                    </button>
                    <p class="chat-widget__bubble-text">
                        {format!("Hey there! {first_name} salutes you. Would you like to talk to Virtual {first_name}? 👋")}
                    </p>
                </div>
            </Show>

            <button class="chat-widget__launcher" title="Chat" on:click=on_toggle>
                <img class="chat-widget__avatar" src="/assets/chat-avatar.svg" alt="Chat"/>
                <span class="chat-widget__badge" aria-hidden="true">"💬"</span>
            </button>

            <Show when=move || chat.with(ChatState::is_open)>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <h3 class="chat-widget__title">{format!("Chat with Virtual {first_name}")}</h3>
                        <button class="chat-widget__close" title="Close" on:click=on_toggle>
                            "✕"
                        </button>
                    </div>

                    <div class="chat-widget__messages">
                        <For
                            each=move || chat.with(|c| c.messages.clone())
                            key=|msg: &ChatMessage| msg.id.clone()
                            children=move |msg: ChatMessage| {
                                let is_user = msg.role == Role::User;
                                let rendered = render_markdown_html(&msg.content);
                                view! {
                                    <div
                                        class="chat-widget__message"
                                        class:chat-widget__message--user=is_user
                                        class:chat-widget__message--assistant=!is_user
                                    >
                                        <div class="chat-widget__message-body" inner_html=rendered></div>
                                    </div>
                                }
                            }
                        />

                        {move || {
                            chat.with(ChatState::is_loading)
                                .then(|| {
                                    view! {
                                        <div class="chat-widget__typing">
                                            <span class="chat-widget__dot"></span>
                                            <span class="chat-widget__dot"></span>
                                            <span class="chat-widget__dot"></span>
                                        </div>
                                    }
                                })
                        }}
                        <div class="chat-widget__end" node_ref=end_ref></div>
                    </div>

                    <div class="chat-widget__input-row">
                        <textarea
                            class="chat-widget__input"
                            rows="1"
                            placeholder="Type your message..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        ></textarea>
                        <button
                            class="btn btn--primary chat-widget__send"
                            on:click=move |_| do_send()
                            disabled=move || !can_send()
                        >
                            {move || {
                                if chat.with(ChatState::is_loading) {
                                    view! { <span class="chat-widget__spinner"></span> }.into_any()
                                } else {
                                    view! { "Send" }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
