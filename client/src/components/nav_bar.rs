//! Fixed top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the window scroll listener. The listener only writes `UiState` when
//! the threshold is crossed, so scrolling does not re-render on every frame.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, OWNER_NAME};
use crate::state::ui::UiState;

/// Brand link plus nav links; turns opaque once the page scrolls.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let crossed = ui.with_untracked(|u| crate::state::ui::is_past_threshold(scroll_y) != u.scrolled);
            if crossed {
                ui.update(|u| {
                    u.observe_scroll(scroll_y);
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <nav class="nav-bar" class:nav-bar--scrolled=move || ui.get().scrolled>
            <div class="nav-bar__inner">
                <a class="nav-bar__brand" href="/">
                    <img class="nav-bar__logo" src="/assets/logo.svg" alt="logo"/>
                    <span class="nav-bar__name">"</" {OWNER_NAME} ">"</span>
                </a>
                <ul class="nav-bar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let title = link.title;
                            view! {
                                <li>
                                    <a
                                        class="nav-bar__link"
                                        class:nav-bar__link--active=move || ui.get().active_nav == Some(title)
                                        href=link.path
                                        on:click=move |_| ui.update(|u| u.active_nav = Some(title))
                                    >
                                        {title}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}
