//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive the bootstrap end to end against a host root directory.
//! - Keep output deterministic for quick local sanity checks.

use integrate_core::Bootstrap;

fn main() {
    let root_dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let mut bootstrap = Bootstrap::new(&root_dir);
    let result = bootstrap
        .register_task_file("integrate")
        .and_then(|()| bootstrap.load_tasks());

    if let Err(err) = result {
        eprintln!("integrate: bootstrap failed: {err}");
        std::process::exit(1);
    }

    println!("integrate_core version={}", integrate_core::core_version());
    println!("tasks loaded={}", bootstrap.namespace().len());
    for name in bootstrap.namespace().names() {
        println!("task {name}");
    }
}
