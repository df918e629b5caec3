//! Static site content: blog posts and navigation links.
//!
//! DESIGN
//! ======
//! Posts are compiled into the binary as `&'static` records. Nothing creates
//! or mutates them at runtime, so views borrow them directly instead of
//! threading them through reactive state.

mod chatbot;


/// A single blog post. `content` is markdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    pub content: &'static str,
}

impl BlogPost {
    /// Site-relative URL of the full post.
    pub fn href(&self) -> String {
        format!("/post/{}", self.slug)
    }
}

/// A navigation bar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub path: &'static str,
}

/// Display name shown in the navigation bar and chat copy.
pub const OWNER_NAME: &str = "Muja Kayadan";

/// Every published post, newest first.
pub static POSTS: &[BlogPost] = &[chatbot::POST];

/// Navigation bar entries, left to right.
pub static NAV_LINKS: &[NavLink] = &[
    NavLink { title: "Posts", path: "/post" },
    NavLink { title: "Blog", path: "https://blog.mujakayadan.com" },
];

/// Look up a post by its URL slug.
pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}
