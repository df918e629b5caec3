//! Post summary card linking to the full post.

use leptos::prelude::*;

use crate::content::BlogPost;

/// Card showing title, date and summary of a post.
#[component]
pub fn BlogCard(post: &'static BlogPost) -> impl IntoView {
    view! {
        <a class="blog-card" href=post.href()>
            <article class="blog-card__body">
                <h3 class="blog-card__title">{post.title}</h3>
                <p class="blog-card__date">{post.date}</p>
                <p class="blog-card__summary">{post.summary}</p>
                <span class="blog-card__more">"Read more →"</span>
            </article>
        </a>
    }
}
