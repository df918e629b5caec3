//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{chat_widget::ChatWidget, nav_bar::NavBar};
use crate::content::OWNER_NAME;
use crate::pages::{
    home::{HomePage, PostIndexPage},
    post::PostPage,
};
use crate::routes::HOME_PATH;
use crate::state::{chat::ChatState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/assets/logo.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, the page chrome and client-side routing.
/// The chat widget sits outside `<Routes>` so it survives navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(ui);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=OWNER_NAME/>

        <Router>
            <div class="site">
                <div class="site__background" aria-hidden="true"></div>
                <NavBar/>
                <main class="site__main">
                    <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("post") view=PostIndexPage/>
                        <Route path=(StaticSegment("post"), ParamSegment("slug")) view=PostPage/>
                    </Routes>
                </main>
                <ChatWidget/>
            </div>
        </Router>
    }
}
