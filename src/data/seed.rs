// Built-in sample tables
// Order here is the order clients see in list responses

use super::models::{Post, Product, User};

fn user(id: i64, name: &str, email: &str, role: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
    }
}

fn product(id: i64, name: &str, price: u32, category: &str, stock: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
        stock,
    }
}

fn post(id: i64, title: &str, content: &str, author: &str, likes: u32) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        likes,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(1, "John Doe", "john@example.com", "Admin"),
        user(2, "Jane Smith", "jane@example.com", "User"),
        user(3, "Bob Johnson", "bob@example.com", "User"),
        user(4, "Alice Williams", "alice@example.com", "Manager"),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Laptop", 999, "Electronics", 25),
        product(2, "Mouse", 29, "Electronics", 150),
        product(3, "Keyboard", 79, "Electronics", 80),
        product(4, "Monitor", 299, "Electronics", 45),
        product(5, "Desk Chair", 199, "Furniture", 30),
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        post(1, "First Post", "This is my first blog post", "John Doe", 42),
        post(2, "Learning Express", "Express.js is awesome!", "Jane Smith", 87),
        post(3, "API Development", "Building RESTful APIs", "Bob Johnson", 65),
    ]
}
