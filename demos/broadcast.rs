//! # Example: broadcast
//!
//! Demonstrates capability-set fan-out over listeners that implement
//! different subsets of the capability trait.
//!
//! Shows how to:
//! - Declare a capability trait whose methods all default to no-ops.
//! - Register listeners implementing only the methods they care about.
//! - Broadcast an invocation to every live listener.
//!
//! ## Run
//! ```bash
//! RUST_LOG=delegator=debug cargo run --example broadcast
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use delegator::DelegateRegistry;

/// Player lifecycle capability set: each method is independently optional.
trait PlayerEvents: Send + Sync {
    fn track_started(&self, _title: &str) {}
    fn track_finished(&self, _title: &str) {}
    fn volume_changed(&self, _level: f32) {}
}

/// Cares about track boundaries only.
struct Display;

impl PlayerEvents for Display {
    fn track_started(&self, title: &str) {
        println!("[display] now playing: {title}");
    }

    fn track_finished(&self, title: &str) {
        println!("[display] finished: {title}");
    }
}

/// Counts finished tracks; ignores everything else.
#[derive(Default)]
struct History {
    finished: AtomicUsize,
}

impl PlayerEvents for History {
    fn track_finished(&self, _title: &str) {
        self.finished.fetch_add(1, Ordering::Relaxed);
    }
}

/// Cares about volume only.
struct Meter;

impl PlayerEvents for Meter {
    fn volume_changed(&self, level: f32) {
        println!("[meter] volume: {level:.2}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("delegator=debug".parse()?),
        )
        .init();

    let events: DelegateRegistry<dyn PlayerEvents> = DelegateRegistry::new();

    let history = Arc::new(History::default());
    let display: Arc<dyn PlayerEvents> = Arc::new(Display);
    let tracker: Arc<dyn PlayerEvents> = history.clone();
    let meter: Arc<dyn PlayerEvents> = Arc::new(Meter);

    events.add(&display);
    events.add(&tracker);
    events.add(&meter);

    // Every listener is visited; unimplemented methods are silent no-ops.
    events.broadcast(|p| p.track_started("Blue in Green"));
    events.broadcast(|p| p.volume_changed(0.8));
    events.broadcast(|p| p.track_finished("Blue in Green"));

    events.broadcast(|p| p.track_started("So What"));
    events.broadcast(|p| p.track_finished("So What"));

    println!(
        "[history] tracks finished: {}",
        history.finished.load(Ordering::Relaxed)
    );
    Ok(())
}
