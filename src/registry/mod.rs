//! # Weak multicast fan-out over a capability set.
//!
//! [`DelegateRegistry`] keeps an ordered, identity-deduplicated set of weak
//! references to listeners and invokes a caller-supplied closure once per
//! live listener on broadcast.
//!
//! ## What it guarantees
//! - The registry never keeps a listener alive; ownership stays with the
//!   application.
//! - A listener that died or was removed before a broadcast is never visited.
//! - Survivors are visited exactly once per pass, in insertion order.
//! - Mutating the registry from inside a broadcast callback is safe: the
//!   pass iterates a snapshot, not the live backing set.
//!
//! ## What it does **not** guarantee
//! - No ordering between listeners beyond insertion order, best effort.
//! - No eager death notification: a dead entry is only discovered at the
//!   next observation point (`len`, `delegates`, `broadcast`).
//! - A listener added mid-pass is not visited until the next pass.
//!
//! ## Diagram
//! ```text
//!    broadcast(f)
//!        │  lock ─► prune dead ─► upgrade survivors ─► unlock
//!        │                 (snapshot: Vec<Arc<C>>)
//!        ├──► f(&listener 1)
//!        ├──► f(&listener 2)       panic? contained, pass continues,
//!        └──► f(&listener N)       payload re-raised after the loop
//! ```

mod entry;
mod set;

pub use set::DelegateRegistry;
