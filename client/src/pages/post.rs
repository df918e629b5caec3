//! Single post page (`/post/{slug}`).

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::components::post_article::PostArticle;
use crate::content::find_post;
use crate::routes::HOME_PATH;

/// Full post for the slug in the URL. Unknown slugs redirect home.
#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let post = move || params.read().get("slug").and_then(|slug| find_post(&slug));

    move || match post() {
        Some(post) => view! {
            <section class="post-page">
                <h1 class="category-title">"<Post>"</h1>
                <div class="post-page__card">
                    <PostArticle post/>
                </div>
                <h1 class="category-title category-title--bottom">"</Post>"</h1>
            </section>
        }
        .into_any(),
        None => view! { <Redirect path=HOME_PATH/> }.into_any(),
    }
}
