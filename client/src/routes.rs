//! Path-to-view resolution shared by the router, the server fallback and the
//! static exporter.
//!
//! The Leptos `<Routes>` table in `app` is the browser-side form of this
//! contract. `SiteRoute::resolve` is the same contract as a pure function so
//! the server can answer paths the router never sees.

use crate::content::{POSTS, find_post};

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Where every unknown path ends up.
pub const HOME_PATH: &str = "/";

/// A resolved site location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SiteRoute {
    /// `/`: post summaries under the "Blog" heading.
    Home,
    /// `/post`: the same summaries under "All Posts".
    PostIndex,
    /// `/post/{slug}`: one full post.
    Post(&'static str),
    /// Anything else: replace the location with the given path.
    Redirect(&'static str),
}

impl SiteRoute {
    /// Resolve a request path. Query strings and fragments are ignored and a
    /// single trailing slash is tolerated.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["post"] => Self::PostIndex,
            ["post", slug] => find_post(slug).map_or(Self::Redirect(HOME_PATH), |post| Self::Post(post.slug)),
            _ => Self::Redirect(HOME_PATH),
        }
    }

    /// Canonical path of a renderable route. Redirects report their target.
    pub fn path(&self) -> String {
        match self {
            Self::Home => HOME_PATH.to_owned(),
            Self::PostIndex => "/post".to_owned(),
            Self::Post(slug) => format!("/post/{slug}"),
            Self::Redirect(target) => (*target).to_owned(),
        }
    }

    /// Every page a static export must render.
    pub fn static_paths() -> Vec<String> {
        let mut paths = vec![Self::Home.path(), Self::PostIndex.path()];
        paths.extend(POSTS.iter().map(|post| Self::Post(post.slug).path()));
        paths
    }
}
