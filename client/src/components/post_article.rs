//! Full post body rendered from markdown.

use leptos::prelude::*;

use crate::content::BlogPost;
use crate::util::markdown::render_post_html;

/// Title, date and rendered markdown of one post.
#[component]
pub fn PostArticle(post: &'static BlogPost) -> impl IntoView {
    let body = render_post_html(post.content);

    view! {
        <article class="post">
            <h1 class="post__title">{post.title}</h1>
            <div class="post__date">{post.date}</div>
            <div class="post__body" inner_html=body></div>
        </article>
    }
}
