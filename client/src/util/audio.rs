//! Best-effort notification sound.
//!
//! Browsers refuse autoplay until the page has seen a user gesture, and the
//! asset may be missing. Either way the failure is logged and dropped.

/// Site-relative URL of the notification sound.
pub const NOTIFICATION_SOUND: &str = "/assets/notification.wav";

/// Start playing the notification sound without waiting for it.
pub fn play_notification() {
    #[cfg(feature = "hydrate")]
    {
        let audio = match web_sys::HtmlAudioElement::new_with_src(NOTIFICATION_SOUND) {
            Ok(audio) => audio,
            Err(err) => {
                leptos::logging::log!("audio element unavailable: {err:?}");
                return;
            }
        };
        let promise: js_sys::Promise = match audio.play() {
            Ok(promise) => promise,
            Err(err) => {
                leptos::logging::log!("audio play failed: {err:?}");
                return;
            }
        };
        leptos::task::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                leptos::logging::log!("audio play failed: {err:?}");
            }
        });
    }
}
