//! Record types served by the API
//!
//! Field names are serialized as-is; every field is a single lowercase word,
//! so the JSON keys match what frontend clients of the stub expect.

use serde::Serialize;

/// Sample user account
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Free-form role label (Admin, User, Manager, ...)
    pub role: String,
}

/// Sample catalogue item
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in whole currency units
    pub price: u32,
    pub category: String,
    /// Quantity on hand
    pub stock: u32,
}

/// Sample blog post
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Display name of the author, not a reference into the user table
    pub author: String,
    pub likes: u32,
}

/// A record addressable by its integer id
pub trait Record: Serialize {
    /// Human-readable kind used in not-found messages ("User", "Product", ...)
    const KIND: &'static str;

    fn id(&self) -> i64;
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Product {
    const KIND: &'static str = "Product";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Post {
    const KIND: &'static str = "Post";

    fn id(&self) -> i64 {
        self.id
    }
}
