//! Post listing pages: home (`/`) and the post index (`/post`).

use leptos::prelude::*;

use crate::components::blog_card::BlogCard;
use crate::content::POSTS;

/// Landing page: every post under the "Blog" heading.
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <PostListing heading="Blog"/> }
}

/// Post index: the same cards under "All Posts".
#[component]
pub fn PostIndexPage() -> impl IntoView {
    view! { <PostListing heading="All Posts"/> }
}

#[component]
fn PostListing(heading: &'static str) -> impl IntoView {
    view! {
        <section class="post-listing">
            <h1 class="category-title">"<" {heading} ">"</h1>
            <div class="post-listing__grid">
                {POSTS.iter().map(|post| view! { <BlogCard post/> }).collect::<Vec<_>>()}
            </div>
            <h1 class="category-title category-title--bottom">"</" {heading} ">"</h1>
        </section>
    }
}
