//! Hook testing fixture - user store with intentional security smells.
//!
//! This file deliberately exhibits the patterns the security-analysis hooks
//! are expected to flag: plaintext credential storage, an SQL-shaped query
//! built by string interpolation from user-supplied values, authentication
//! that always succeeds, and loose cast-based comparisons.
//!
//! The query string is only printed; nothing here talks to a real database.
//! The repaired counterpart is `user_manager_after.rs`.

struct User {
    id: i64,
    username: String,
    password: String,
    email: String,
}

struct UserManager {
    users: Vec<User>,
}

impl UserManager {
    fn new() -> Self {
        Self { users: Vec::new() }
    }

    fn create_user(&mut self, username: &str, password: &str, email: &str) -> &User {
        let user = User {
            id: self.users.len() as i64 + 1,
            username: username.to_string(),
            // Stored exactly as supplied
            password: password.to_string(),
            email: email.to_string(),
        };
        self.users.push(user);
        self.users.last().unwrap()
    }

    fn authenticate_user(&self, username: &str, password: &str) -> bool {
        // Interpolates user input straight into the query text
        let query = format!(
            "SELECT * FROM users WHERE username = '{}' AND password = '{}'",
            username, password
        );
        println!("Executing query: {}", query);
        true
    }

    fn find_user_by_id(&self, id: i64) -> Option<&User> {
        // Truncating casts make distinct identifiers collide
        self.users.iter().find(|u| u.id as i32 == id as i32)
    }
}

fn main() {
    let mut manager = UserManager::new();

    let user = manager.create_user("admin", "hunter2", "admin@example.com");
    println!("Created user {} <{}>", user.username, user.email);

    let ok = manager.authenticate_user("admin", "' OR '1'='1");
    println!("Authenticated: {}", ok);

    match manager.find_user_by_id(1) {
        Some(found) => println!("Found user {}", found.username),
        None => println!("User 1 missing"),
    }
}
