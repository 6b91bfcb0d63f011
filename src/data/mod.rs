//! In-memory data module
//!
//! Holds the three sample collections. The [`Dataset`] is built once before the
//! listener starts and is only ever read afterwards, so it is shared between
//! connections inside the `Arc`'d application state without any locking.

mod models;
mod seed;

pub use models::{Post, Product, Record, User};

/// The immutable tables served by the API
#[derive(Debug, Clone)]
pub struct Dataset {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub posts: Vec<Post>,
}

impl Dataset {
    /// Build the dataset from the built-in sample tables
    pub fn seeded() -> Self {
        Self {
            users: seed::users(),
            products: seed::products(),
            posts: seed::posts(),
        }
    }
}

/// Linear scan for the first record with the given id
///
/// `None` for the id means the path segment did not parse, which is treated
/// the same as an id with no matching record.
pub fn find_by_id<T: Record>(records: &[T], id: Option<i64>) -> Option<&T> {
    let id = id?;
    records.iter().find(|r| r.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_sizes() {
        let data = Dataset::seeded();
        assert_eq!(data.users.len(), 4);
        assert_eq!(data.products.len(), 5);
        assert_eq!(data.posts.len(), 3);
    }

    #[test]
    fn test_ids_unique() {
        let data = Dataset::seeded();
        let users: HashSet<_> = data.users.iter().map(Record::id).collect();
        let products: HashSet<_> = data.products.iter().map(Record::id).collect();
        let posts: HashSet<_> = data.posts.iter().map(Record::id).collect();
        assert_eq!(users.len(), data.users.len());
        assert_eq!(products.len(), data.products.len());
        assert_eq!(posts.len(), data.posts.len());
    }

    #[test]
    fn test_find_by_id() {
        let data = Dataset::seeded();
        let jane = find_by_id(&data.users, Some(2)).unwrap();
        assert_eq!(jane.name, "Jane Smith");
        assert_eq!(jane.email, "jane@example.com");

        let post = find_by_id(&data.posts, Some(3)).unwrap();
        assert_eq!(post.title, "API Development");
        assert_eq!(post.likes, 65);
    }

    #[test]
    fn test_find_missing() {
        let data = Dataset::seeded();
        assert!(find_by_id(&data.users, Some(99)).is_none());
        assert!(find_by_id(&data.products, Some(0)).is_none());
        assert!(find_by_id(&data.posts, None).is_none());
    }

    #[test]
    fn test_post_author_is_free_text() {
        let data = Dataset::seeded();
        let post = find_by_id(&data.posts, Some(1)).unwrap();
        assert_eq!(post.author, "John Doe");
    }
}
