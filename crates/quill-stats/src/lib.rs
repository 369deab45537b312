//! Summary statistics over a list of blog posts.
//!
//! Every function here is a pure, single-pass fold over the input slice:
//! no I/O, no mutation, and a defined result for the empty list. Outputs
//! are either derived values or references into the input, never diverging
//! copies.

use std::collections::HashMap;

use serde::Serialize;

use quill_types::models::Blog;

/// Post count for the most prolific author. Serializes with the same keys
/// the REST surface exposes: `{"author": ..., "blogs": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorBlogs {
    /// `None` groups posts that carry no author.
    pub author: Option<String>,
    pub blogs: u64,
}

/// Summed likes for the best-liked author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub likes: u64,
}

/// Sum of `likes` across all posts. 0 for the empty list; order of the
/// input does not affect the result.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|b| b.likes).sum()
}

/// The post with the strictly highest `likes`, or `None` for the empty
/// list. Ties keep the first post in input order; the running best starts
/// at the first element, so a list where every post has 0 likes still
/// returns its first post.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs
        .iter()
        .reduce(|best, blog| if blog.likes > best.likes { blog } else { best })
}

/// The author with the most posts, or `None` for the empty list. Ties
/// resolve to the author that appears first in the input.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    top_author(blogs, |_| 1).map(|(author, blogs)| AuthorBlogs {
        author: author.map(str::to_owned),
        blogs,
    })
}

/// The author whose posts sum to the highest like total, or `None` for
/// the empty list. Grouping and tie-break match [`most_blogs`].
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    top_author(blogs, |b| b.likes).map(|(author, likes)| AuthorLikes {
        author: author.map(str::to_owned),
        likes,
    })
}

/// Group posts by author, accumulating `weight` per post, and return the
/// author with the highest total. The grouping table keeps first-appearance
/// order so that a strict `>` scan resolves ties to the earliest author.
fn top_author<'a>(
    blogs: &'a [Blog],
    weight: impl Fn(&Blog) -> u64,
) -> Option<(Option<&'a str>, u64)> {
    let mut totals: Vec<(Option<&'a str>, u64)> = Vec::new();
    let mut index: HashMap<Option<&'a str>, usize> = HashMap::new();

    for blog in blogs {
        let author = blog.author.as_deref();
        match index.get(&author) {
            Some(&i) => totals[i].1 += weight(blog),
            None => {
                index.insert(author, totals.len());
                totals.push((author, weight(blog)));
            }
        }
    }

    totals
        .into_iter()
        .reduce(|best, entry| if entry.1 > best.1 { entry } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn blog(title: &str, author: Option<&str>, likes: u64) -> Blog {
        Blog {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.map(str::to_owned),
            url: format!("https://example.com/{}", title.replace(' ', "-")),
            likes,
            owner: None,
            created_at: Utc::now(),
        }
    }

    fn listing() -> Vec<Blog> {
        vec![
            blog("React patterns", Some("Michael Chan"), 7),
            blog(
                "Go To Statement Considered Harmful",
                Some("Edsger W. Dijkstra"),
                5,
            ),
            blog("Canonical string reduction", Some("Edsger W. Dijkstra"), 12),
            blog("First class tests", Some("Robert C. Martin"), 10),
            blog("TDD harms architecture", Some("Robert C. Martin"), 0),
            blog("Type wars", Some("Robert C. Martin"), 2),
        ]
    }

    #[test]
    fn total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn total_likes_of_single_blog_equals_its_likes() {
        let blogs = vec![blog("Go statement", Some("Edsger W. Dijkstra"), 5)];
        assert_eq!(total_likes(&blogs), 5);
    }

    #[test]
    fn total_likes_sums_every_blog() {
        assert_eq!(total_likes(&listing()), 36);
    }

    #[test]
    fn total_likes_ignores_input_order() {
        let mut blogs = listing();
        blogs.reverse();
        assert_eq!(total_likes(&blogs), 36);
        blogs.swap(0, 3);
        assert_eq!(total_likes(&blogs), 36);
    }

    #[test]
    fn favorite_blog_of_empty_list_is_none() {
        assert!(favorite_blog(&[]).is_none());
    }

    #[test]
    fn favorite_blog_of_single_blog_is_that_blog() {
        let blogs = vec![blog("Type wars", Some("Robert C. Martin"), 2)];
        assert_eq!(favorite_blog(&blogs), Some(&blogs[0]));
    }

    #[test]
    fn favorite_blog_picks_the_most_liked() {
        let blogs = listing();
        let favorite = favorite_blog(&blogs).unwrap();
        assert_eq!(favorite.title, "Canonical string reduction");
        assert_eq!(favorite.likes, 12);
    }

    #[test]
    fn favorite_blog_tie_keeps_the_first_in_input_order() {
        let blogs = vec![
            blog("first", Some("a"), 9),
            blog("second", Some("b"), 9),
            blog("third", Some("c"), 3),
        ];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "first");
    }

    #[test]
    fn favorite_blog_with_all_zero_likes_is_the_first_blog() {
        let blogs = vec![
            blog("quiet one", Some("a"), 0),
            blog("quiet two", Some("b"), 0),
        ];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "quiet one");
    }

    #[test]
    fn favorite_blog_does_not_mutate_input() {
        let blogs = listing();
        let before = blogs.clone();
        let _ = favorite_blog(&blogs);
        let _ = favorite_blog(&blogs);
        assert_eq!(blogs, before);
    }

    #[test]
    fn most_blogs_of_empty_list_is_none() {
        assert!(most_blogs(&[]).is_none());
    }

    #[test]
    fn most_blogs_finds_the_most_prolific_author() {
        assert_eq!(
            most_blogs(&listing()),
            Some(AuthorBlogs {
                author: Some("Robert C. Martin".to_string()),
                blogs: 3,
            })
        );
    }

    #[test]
    fn most_blogs_tie_keeps_the_first_seen_author() {
        let blogs = vec![
            blog("one", Some("a"), 1),
            blog("two", Some("b"), 1),
            blog("three", Some("a"), 1),
            blog("four", Some("b"), 1),
        ];
        assert_eq!(
            most_blogs(&blogs),
            Some(AuthorBlogs {
                author: Some("a".to_string()),
                blogs: 2,
            })
        );
    }

    #[test]
    fn most_blogs_groups_missing_authors_together() {
        let blogs = vec![
            blog("anon one", None, 4),
            blog("anon two", None, 1),
            blog("signed", Some("a"), 8),
        ];
        assert_eq!(
            most_blogs(&blogs),
            Some(AuthorBlogs {
                author: None,
                blogs: 2,
            })
        );
    }

    #[test]
    fn most_likes_of_empty_list_is_none() {
        assert!(most_likes(&[]).is_none());
    }

    #[test]
    fn most_likes_sums_likes_per_author() {
        assert_eq!(
            most_likes(&listing()),
            Some(AuthorLikes {
                author: Some("Edsger W. Dijkstra".to_string()),
                likes: 17,
            })
        );
    }

    #[test]
    fn most_likes_tie_keeps_the_first_seen_author() {
        let blogs = vec![
            blog("one", Some("a"), 3),
            blog("two", Some("b"), 2),
            blog("three", Some("b"), 1),
        ];
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: Some("a".to_string()),
                likes: 3,
            })
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let blogs = listing();
        assert_eq!(total_likes(&blogs), total_likes(&blogs));
        assert_eq!(favorite_blog(&blogs), favorite_blog(&blogs));
        assert_eq!(most_blogs(&blogs), most_blogs(&blogs));
        assert_eq!(most_likes(&blogs), most_likes(&blogs));
    }
}
