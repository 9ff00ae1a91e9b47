//! Basic EDN rendering of Serde types and hand-built values.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_edn_pretty::{edn, render, render_colored, to_string, Value};
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    roles: Vec<Role>,
}

#[derive(Debug, Serialize)]
enum Role {
    Admin,
    Ops,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            roles: vec![Role::Admin, Role::Ops],
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            roles: vec![],
        },
    ];

    // Structs print as records.
    println!("Records:\n{}\n", to_string(&users)?);

    // Hash maps print in key order, whatever order they iterate in.
    let scores: HashMap<&str, u32> = [("carol", 7), ("amy", 5), ("bob", 3)].into_iter().collect();
    println!("Map:\n{}\n", to_string(&scores)?);

    // Values can also be built directly.
    let form = edn!((assoc {:a 1} :b #{3 2}));
    println!("Form:\n{}\n", render(&form)?);

    let value = Value::map([
        (Value::keyword("status"), Value::keyword("ok")),
        (Value::keyword("count"), Value::from(2)),
    ]);
    println!("Colored:\n{}", render_colored(&value)?);

    Ok(())
}
