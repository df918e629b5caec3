use super::*;

fn reply(thread: &str, response: &str, history: Option<Vec<HistoryEntry>>, had_thread: bool) -> ChatReply {
    ChatReply::classify(
        crate::net::types::ChatResponseBody {
            thread_id: thread.to_owned(),
            response: response.to_owned(),
            history,
        },
        had_thread,
    )
}

fn history(n: usize) -> Vec<HistoryEntry> {
    (0..n)
        .map(|i| HistoryEntry { user_message: format!("u{i}"), assistant_response: format!("a{i}") })
        .collect()
}

fn contents(state: &ChatState) -> Vec<(Role, &str)> {
    state.messages.iter().map(|m| (m.role, m.content.as_str())).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_closed_idle_with_greeting() {
    let state = ChatState::default();
    assert_eq!(state.panel, Panel::Closed);
    assert_eq!(state.exchange, Exchange::Idle);
    assert_eq!(state.engagement, Engagement::Untouched);
    assert_eq!(state.thread_id, None);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::Assistant);
    assert!(state.messages[0].content.starts_with("Hi! I'm Muja's AI assistant."));
}

#[test]
fn message_ids_are_unique() {
    let a = ChatMessage::user("x");
    let b = ChatMessage::user("x");
    assert_ne!(a.id, b.id);
}

// =============================================================
// Panel toggling
// =============================================================

#[test]
fn toggle_opens_and_closes_without_touching_transcript() {
    let mut state = ChatState::default();
    let before = state.messages.clone();

    state.toggle();
    assert!(state.is_open());
    state.toggle();
    assert_eq!(state.panel, Panel::Closed);
    assert_eq!(state.messages, before);
}

#[test]
fn toggle_restarts_prompt_timer() {
    let mut state = ChatState::default();
    let epoch = state.prompt_epoch;
    state.toggle();
    assert_eq!(state.prompt_epoch, epoch + 1);
}

#[test]
fn opening_clears_prompt() {
    let mut state = ChatState::default();
    state.record_interaction();
    assert!(state.fire_prompt_timer(state.prompt_epoch));
    assert!(state.is_prompting());

    state.toggle();
    assert_eq!(state.panel, Panel::Open);
    assert!(!state.is_prompting());
}

#[test]
fn dismiss_prompt_returns_to_closed() {
    let mut state = ChatState::default();
    state.record_interaction();
    state.fire_prompt_timer(state.prompt_epoch);
    state.dismiss_prompt();
    assert_eq!(state.panel, Panel::Closed);
}

#[test]
fn dismiss_prompt_does_not_close_open_panel() {
    let mut state = ChatState::default();
    state.toggle();
    state.dismiss_prompt();
    assert_eq!(state.panel, Panel::Open);
}

// =============================================================
// Proactive prompt
// =============================================================

#[test]
fn record_interaction_latches_once() {
    let mut state = ChatState::default();
    assert!(state.record_interaction());
    let epoch = state.prompt_epoch;
    assert!(!state.record_interaction());
    assert_eq!(state.prompt_epoch, epoch);
    assert_eq!(state.engagement, Engagement::Interacted);
}

#[test]
fn prompt_requires_interaction() {
    let mut state = ChatState::default();
    assert!(!state.fire_prompt_timer(state.prompt_epoch));
    assert_eq!(state.panel, Panel::Closed);
}

#[test]
fn prompt_fires_when_closed_and_interacted() {
    let mut state = ChatState::default();
    state.record_interaction();
    assert!(state.fire_prompt_timer(state.prompt_epoch));
    assert_eq!(state.panel, Panel::Prompting);
}

#[test]
fn prompt_never_fires_while_open() {
    let mut state = ChatState::default();
    state.record_interaction();
    state.toggle();
    assert!(!state.fire_prompt_timer(state.prompt_epoch));
    assert_eq!(state.panel, Panel::Open);
}

#[test]
fn stale_timer_is_ignored() {
    let mut state = ChatState::default();
    state.record_interaction();
    let stale = state.prompt_epoch;
    state.toggle();
    state.toggle();
    assert!(!state.fire_prompt_timer(stale));
    assert_eq!(state.panel, Panel::Closed);
    assert!(state.fire_prompt_timer(state.prompt_epoch));
}

#[test]
fn timer_armed_before_interaction_is_stale_after_it() {
    let mut state = ChatState::default();
    let initial = state.prompt_epoch;
    state.record_interaction();
    assert!(!state.fire_prompt_timer(initial));
}

#[test]
fn prompt_delay_is_ten_seconds() {
    assert_eq!(PROMPT_DELAY, Duration::from_secs(10));
    assert_eq!(prompt_delay_millis(), 10_000);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_issues_request_and_sets_loading() {
    let mut state = ChatState::default();
    let req = state.begin_send("hello").expect("request");
    assert_eq!(req, ChatRequest { message: "hello".to_owned(), thread_id: None });
    assert!(state.is_loading());
    assert_eq!(state.exchange, Exchange::InFlight { pending: "hello".to_owned() });
}

#[test]
fn begin_send_rejects_blank_input() {
    let mut state = ChatState::default();
    for input in ["", "   ", "\n\t"] {
        assert_eq!(state.begin_send(input), None, "input {input:?}");
    }
    assert!(!state.is_loading());
}

#[test]
fn begin_send_while_loading_is_noop() {
    let mut state = ChatState::default();
    state.begin_send("first").unwrap();
    let snapshot = state.clone();

    assert_eq!(state.begin_send("second"), None);
    assert_eq!(state, snapshot);
}

#[test]
fn begin_send_keeps_untrimmed_text() {
    let mut state = ChatState::default();
    let req = state.begin_send("  spaced  ").unwrap();
    assert_eq!(req.message, "  spaced  ");
}

#[test]
fn transcript_is_unchanged_until_reply() {
    let mut state = ChatState::default();
    state.begin_send("hello").unwrap();
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// complete
// =============================================================

#[test]
fn first_exchange_with_history_replaces_transcript() {
    let mut state = ChatState::default();
    state.begin_send("new question").unwrap();
    state.complete(reply("t1", "new answer", Some(history(3)), false));

    assert_eq!(state.messages.len(), 2 * 3 + 2);
    assert_eq!(
        contents(&state),
        vec![
            (Role::User, "u0"),
            (Role::Assistant, "a0"),
            (Role::User, "u1"),
            (Role::Assistant, "a1"),
            (Role::User, "u2"),
            (Role::Assistant, "a2"),
            (Role::User, "new question"),
            (Role::Assistant, "new answer"),
        ]
    );
    assert_eq!(state.thread_id.as_deref(), Some("t1"));
    assert!(!state.is_loading());
}

#[test]
fn first_exchange_without_history_appends() {
    let mut state = ChatState::default();
    state.begin_send("hi").unwrap();
    state.complete(reply("t1", "hello", None, false));

    assert_eq!(state.messages.len(), 3);
    assert_eq!(contents(&state)[1..], [(Role::User, "hi"), (Role::Assistant, "hello")]);
}

#[test]
fn continuing_exchange_appends_two() {
    let mut state = ChatState::default();
    state.begin_send("one").unwrap();
    state.complete(reply("t1", "r1", None, false));
    let before = state.messages.len();

    let req = state.begin_send("two").unwrap();
    let had_thread = req.thread_id.is_some();
    state.complete(reply("t1", "r2", Some(history(5)), had_thread));

    assert_eq!(state.messages.len(), before + 2);
    assert_eq!(state.messages[before].content, "two");
    assert_eq!(state.messages[before + 1].content, "r2");
}

#[test]
fn thread_id_is_reused_on_every_later_request() {
    let mut state = ChatState::default();
    let first = state.begin_send("a").unwrap();
    assert_eq!(first.thread_id, None);
    state.complete(reply("thread_42", "ok", None, false));

    for text in ["b", "c", "d"] {
        let req = state.begin_send(text).unwrap();
        assert_eq!(req.thread_id.as_deref(), Some("thread_42"));
        state.complete(reply("thread_42", "ok", None, true));
    }
}

#[test]
fn thread_id_updates_to_returned_value() {
    let mut state = ChatState::default();
    state.begin_send("a").unwrap();
    state.complete(reply("t1", "ok", None, false));
    state.begin_send("b").unwrap();
    state.complete(reply("t2", "ok", None, true));
    assert_eq!(state.thread_id.as_deref(), Some("t2"));
}

#[test]
fn first_exchange_stores_thread_id() {
    let mut state = ChatState::default();
    state.begin_send("hi").unwrap();
    state.complete(reply("t9", "ok", Some(history(1)), false));
    assert_eq!(state.thread_id.as_deref(), Some("t9"));
    assert_eq!(state.begin_send("again").unwrap().thread_id.as_deref(), Some("t9"));
}

#[test]
fn reply_applies_while_panel_closed() {
    let mut state = ChatState::default();
    state.toggle();
    state.begin_send("hi").unwrap();
    state.toggle();
    state.complete(reply("t1", "late", None, false));
    assert_eq!(state.messages.last().unwrap().content, "late");
    assert_eq!(state.panel, Panel::Closed);
}

#[test]
fn complete_without_request_is_ignored() {
    let mut state = ChatState::default();
    let snapshot = state.clone();
    state.complete(reply("t1", "orphan", None, false));
    assert_eq!(state, snapshot);
}

// =============================================================
// fail
// =============================================================

#[test]
fn failure_clears_loading_and_keeps_transcript() {
    let mut state = ChatState::default();
    let before = state.messages.clone();
    state.begin_send("lost").unwrap();

    assert_eq!(state.fail().as_deref(), Some("lost"));
    assert!(!state.is_loading());
    assert_eq!(state.messages, before);
    assert_eq!(state.thread_id, None);
}

#[test]
fn failure_allows_next_send() {
    let mut state = ChatState::default();
    state.begin_send("lost").unwrap();
    state.fail();
    assert!(state.begin_send("retry by hand").is_some());
}

#[test]
fn fail_when_idle_returns_none() {
    let mut state = ChatState::default();
    assert_eq!(state.fail(), None);
}

// =============================================================
// flatten_history
// =============================================================

#[test]
fn flatten_history_alternates_roles() {
    let flat = flatten_history(&history(2));
    let roles: Vec<Role> = flat.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User, Role::Assistant]);
}

#[test]
fn flatten_empty_history() {
    assert!(flatten_history(&[]).is_empty());
}
