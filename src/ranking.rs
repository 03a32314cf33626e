//! Ranker / Filter
//!
//! Pure views over a post collection. Recompute whenever the collection or
//! the selected category changes; nothing here is cached or fetched.

use crate::models::Post;

/// Posts in `category`, most liked first. Equal likes keep collection order.
pub fn by_category(posts: &[Post], category: &str) -> Vec<Post> {
    let mut filtered: Vec<Post> = posts
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect();
    sort_by_likes(&mut filtered);
    filtered
}

/// The "Más Populares" sidebar: the first `window` posts of the collection,
/// then sorted by likes. Posts beyond the window never appear, however
/// popular they are.
pub fn most_popular(posts: &[Post], window: usize) -> Vec<Post> {
    let mut head: Vec<Post> = posts.iter().take(window).cloned().collect();
    sort_by_likes(&mut head);
    head
}

fn sort_by_likes(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.likes.cmp(&a.likes));
}
