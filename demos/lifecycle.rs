//! # Example: lifecycle
//!
//! Demonstrates the weak-ownership model: the registry never keeps a
//! listener alive, and dead listeners vanish without an explicit remove.
//!
//! Shows how to:
//! - Observe automatic pruning after the last strong owner is dropped.
//! - Unregister explicitly with [`DelegateRegistry::remove`].
//! - Share one membership set across cloned registry handles.
//!
//! ## Run
//! ```bash
//! RUST_LOG=delegator=trace cargo run --example lifecycle
//! ```

use std::sync::Arc;

use delegator::DelegateRegistry;

/// Connection lifecycle capability set.
trait ConnEvents: Send + Sync {
    fn opened(&self, _peer: &str) {}
    fn closed(&self, _peer: &str) {}
}

struct Printer {
    name: &'static str,
}

impl ConnEvents for Printer {
    fn opened(&self, peer: &str) {
        println!("[{}] opened: {peer}", self.name);
    }

    fn closed(&self, peer: &str) {
        println!("[{}] closed: {peer}", self.name);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("delegator=trace".parse()?),
        )
        .init();

    let registry: DelegateRegistry<dyn ConnEvents> = DelegateRegistry::new();

    let durable: Arc<dyn ConnEvents> = Arc::new(Printer { name: "durable" });
    registry.add(&durable);

    {
        // Owned only by this scope; the registry holds a weak reference.
        let transient: Arc<dyn ConnEvents> = Arc::new(Printer { name: "transient" });
        registry.add(&transient);

        println!("-- both listeners alive ({} registered)", registry.len());
        registry.broadcast(|c| c.opened("10.0.0.7"));
    }

    // The transient listener died with its scope; pruned at the next pass.
    println!("-- transient dropped ({} registered)", registry.len());
    registry.broadcast(|c| c.closed("10.0.0.7"));

    // Clones share the membership set.
    let handle = registry.clone();
    handle.remove(&durable);
    println!("-- removed through a clone ({} registered)", registry.len());
    registry.broadcast(|c| c.closed("never delivered"));

    Ok(())
}
