//! Aggregator
//!
//! Statistics derived from a post collection: per-category counts, the
//! trending ranking, and the site-wide totals shown on the landing page.

use std::collections::HashSet;

use futures::future::join_all;

use crate::api::{CommentApi, PostApi, UserApi};
use crate::error::ApiResult;
use crate::models::Post;

/// Number of posts in one category. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStat {
    pub category: String,
    pub count: usize,
}

/// Count posts per category, in first-seen order.
///
/// Categories outside the tab set are counted like any other.
pub fn category_counts(posts: &[Post]) -> Vec<CategoryStat> {
    let mut stats: Vec<CategoryStat> = Vec::new();
    for post in posts {
        match stats.iter_mut().find(|s| s.category == post.category) {
            Some(stat) => stat.count += 1,
            None => stats.push(CategoryStat {
                category: post.category.clone(),
                count: 1,
            }),
        }
    }
    stats
}

/// Top `limit` categories by post count. Equal counts keep first-seen order.
pub fn trending(posts: &[Post], limit: usize) -> Vec<CategoryStat> {
    let mut stats = category_counts(posts);
    // sort_by is stable
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats.truncate(limit);
    stats
}

/// Distinct author names, used when the user listing is unavailable
pub fn distinct_authors(posts: &[Post]) -> usize {
    posts
        .iter()
        .map(|p| p.author_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Total comments across `posts`, one request per post, all in flight at once.
///
/// A failed request counts as zero comments for that post.
pub async fn count_comments<A>(api: &A, posts: &[Post]) -> usize
where
    A: CommentApi + ?Sized,
{
    let fetches = posts.iter().map(|post| async move {
        match api.list_comments_for(post.id).await {
            Ok(comments) => comments.len(),
            Err(e) => {
                log::debug!("Comments for post {} unavailable: {}", post.id, e);
                0
            }
        }
    });
    join_all(fetches).await.into_iter().sum()
}

/// Landing page counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteStats {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
}

/// Fetch posts once, then count users and comments concurrently.
///
/// Only the post listing is required; the other two degrade.
pub async fn load_site_stats<A>(api: &A) -> ApiResult<SiteStats>
where
    A: PostApi + CommentApi + UserApi + ?Sized,
{
    let posts = api.list_posts().await?;

    let users = async {
        match api.count_users().await {
            Ok(n) => n,
            Err(e) => {
                log::debug!("User listing unavailable ({}), counting authors", e);
                distinct_authors(&posts)
            }
        }
    };
    let (users, comments) = futures::join!(users, count_comments(api, &posts));

    Ok(SiteStats {
        users,
        posts: posts.len(),
        comments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{post, post_by, FakeApi};

    #[test]
    fn test_counts_sum_to_collection_length() {
        let posts = vec![
            post(1, "Shooter", 0),
            post(2, "RPG", 0),
            post(3, "Shooter", 0),
            post(4, "Ajedrez", 0),
            post(5, "Retro", 0),
        ];
        let stats = category_counts(&posts);
        let total: usize = stats.iter().map(|s| s.count).sum();
        assert_eq!(total, posts.len());
        assert_eq!(stats[0], CategoryStat { category: "Shooter".into(), count: 2 });
        // Unknown categories are counted, not rejected
        assert!(stats.iter().any(|s| s.category == "Ajedrez"));
    }

    #[test]
    fn test_counts_empty() {
        assert!(category_counts(&[]).is_empty());
        assert!(trending(&[], 3).is_empty());
    }

    #[test]
    fn test_trending_top_three_descending() {
        let posts = vec![
            post(1, "Indie", 0),
            post(2, "RPG", 0),
            post(3, "RPG", 0),
            post(4, "Retro", 0),
            post(5, "Retro", 0),
            post(6, "Retro", 0),
            post(7, "Shooter", 0),
            post(8, "Shooter", 0),
        ];
        let top = trending(&posts, 3);
        let names: Vec<_> = top.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Retro", "RPG", "Shooter"]);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_trending_fewer_than_limit() {
        let posts = vec![post(1, "Indie", 0), post(2, "RPG", 0)];
        assert_eq!(trending(&posts, 3).len(), 2);
    }

    #[test]
    fn test_trending_ties_keep_first_seen_order() {
        let posts = vec![
            post(1, "Noticias", 0),
            post(2, "Indie", 0),
            post(3, "Retro", 0),
            post(4, "Tecnología", 0),
        ];
        let first = trending(&posts, 3);
        let second = trending(&posts, 3);
        let names: Vec<_> = first.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Noticias", "Indie", "Retro"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_authors() {
        let posts = vec![
            post_by(1, "ana"),
            post_by(2, "luis"),
            post_by(3, "ana"),
        ];
        assert_eq!(distinct_authors(&posts), 2);
    }

    #[tokio::test]
    async fn test_count_comments_absorbs_failures() {
        let posts = vec![post(1, "RPG", 0), post(2, "RPG", 0), post(3, "RPG", 0)];
        let api = FakeApi::new()
            .with_comments(1, 2)
            .with_comments(2, 5)
            .with_comments(3, 4)
            .failing_comments_for(2);

        assert_eq!(count_comments(&api, &posts).await, 6);
    }

    #[tokio::test]
    async fn test_count_comments_all_failing_is_zero() {
        let posts = vec![post(1, "RPG", 0), post(2, "RPG", 0)];
        let api = FakeApi::new().failing_comments_for(1).failing_comments_for(2);
        assert_eq!(count_comments(&api, &posts).await, 0);
    }

    #[tokio::test]
    async fn test_site_stats_falls_back_to_authors() {
        let api = FakeApi::new()
            .with_posts(vec![post_by(1, "user1"), post_by(2, "user2")])
            .with_comments(1, 2)
            .with_comments(2, 2);

        let stats = load_site_stats(&api).await.unwrap();
        assert_eq!(stats, SiteStats { users: 2, posts: 2, comments: 4 });
    }

    #[tokio::test]
    async fn test_site_stats_uses_user_listing() {
        let api = FakeApi::new()
            .with_posts(vec![post_by(1, "user1")])
            .with_user_count(40);

        let stats = load_site_stats(&api).await.unwrap();
        assert_eq!(stats.users, 40);
        assert_eq!(stats.comments, 0);
    }

    #[tokio::test]
    async fn test_site_stats_requires_posts() {
        let api = FakeApi::new().failing_posts();
        assert!(load_site_stats(&api).await.is_err());
    }
}
