//! Hook testing fixture.
//!
//! This file is intentionally written with assorted code quality issues to
//! exercise editor and CI hook pipelines (linting, formatting, and
//! validation hooks).
//!
//! Issues included:
//! - Shadowed rebindings standing in for duplicate declarations
//! - Unused variables, an unused closure, and an uncalled function
//! - Sloppy formatting on a few lines
//! - Shell-out execution of a command string and a leftover `dbg!` macro
//! - The classic shared-counter pitfall with delayed tasks
//!
//! The repaired counterpart is `style_pitfalls_after.rs`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let x = 5;
    let x = 10; // rebinds the name declared one line up
    let y = 20;
    let z=30;

    let arrow = |a: i64, b: i64| a + b;
    let duplicate = 1;
    let duplicate = 2;
    let test = "hook test";
    let another_var = "testing linting";

    // Dynamic execution of a command string
    let output = std::process::Command::new("sh")
        .arg("-c")
        .arg("echo dangerous")
        .output()
        .unwrap();
    println!("{}", String::from_utf8_lossy(&output.stdout).trim());

    dbg!(x);

    // One counter shared by every scheduled task: by the time the delayed
    // tasks read it, the loop has already driven it to its final value.
    let i = Arc::new(AtomicUsize::new(0));
    while i.load(Ordering::SeqCst) < 10 {
        let shared = Arc::clone(&i);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            println!("{}", shared.load(Ordering::SeqCst));
        });
        i.fetch_add(1, Ordering::SeqCst);
    }

    // Waits "long enough" instead of joining the tasks
    tokio::time::sleep(Duration::from_millis(200)).await;
}

fn test_function(x: i64) -> bool {
    println!("{}", x);
    if x as f64 == 5.0 {
        let unused = "never used";
        return true;
    } else {
        return false;
    }
}
