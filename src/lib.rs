//! # delegator
//!
//! **Delegator** is a lightweight multicast delegate registry for Rust.
//!
//! It holds a set of listeners ("delegates") without owning them and
//! broadcasts an invocation to every listener that is still alive. Listeners
//! are forgotten automatically once nothing else keeps them alive. Use it
//! when one publisher needs to notify many subscribers and must never be the
//! reason a subscriber outlives its owner.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌────────────┐    ┌────────────┐    ┌────────────┐
//!   │ Listener A │    │ Listener B │    │ Listener C │   owned elsewhere
//!   │  (Arc<C>)  │    │  (Arc<C>)  │    │  (Arc<C>)  │   (app code)
//!   └─────▲──────┘    └─────▲──────┘    └─────▲──────┘
//!         │ Weak<C>         │ Weak<C>         │ Weak<C>
//! ┌───────┴─────────────────┴─────────────────┴──────────┐
//! │  DelegateRegistry<C>                                  │
//! │  - ordered membership set (insertion order preserved) │
//! │  - identity dedup (same listener added twice = once)  │
//! │  - lazy pruning (dead entries dropped when observed)  │
//! └───────────────────────────┬───────────────────────────┘
//!                             │ broadcast(|c| ...)
//!                             ▼
//!            snapshot of live listeners, invoked in order
//! ```
//!
//! ### Lifecycle
//! ```text
//! add(&arc)    ──► prune dead ──► already present? no-op : append Weak
//! remove(&arc) ──► prune dead ──► drop matching entry (absent = no-op)
//! delegates()  ──► prune dead ──► upgrade survivors ──► Vec<Arc<C>>
//! broadcast(f) ──► delegates() snapshot (lock released)
//!                     └─► f(&listener) once per survivor, in order
//! drop(last Arc) ──► entry goes dead silently; removed at next pass
//! ```
//!
//! ## The capability-set contract
//! `C` is usually a trait object type whose trait gives **every** method a
//! default empty body. A listener implements only the subset it cares about;
//! broadcasting a method a listener left unimplemented runs the default no-op
//! and is indistinguishable from not being called. The registry itself places
//! no bound on `C` beyond reference identity.
//!
//! ## Guarantees
//! | Property        | Behavior                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | **Ownership**   | Registry never extends a listener's lifetime (weak refs only). |
//! | **Dedup**       | Adding the same live listener twice does not grow the set.     |
//! | **Pruning**     | Dead entries are never exposed; dropped lazily at observation. |
//! | **Order**       | Insertion order preserved for survivors, best effort.          |
//! | **Re-entrancy** | `add`/`remove` from inside a broadcast callback are safe.      |
//! | **Isolation**   | A panicking listener does not stop the pass; the panic is re-raised after every survivor was visited. |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use delegator::DelegateRegistry;
//!
//! // Capability set: every method has a default no-op body.
//! trait SessionEvents: Send + Sync {
//!     fn connected(&self, _peer: &str) {}
//!     fn disconnected(&self, _peer: &str) {}
//! }
//!
//! struct Logger;
//! impl SessionEvents for Logger {
//!     fn connected(&self, peer: &str) {
//!         println!("connected: {peer}");
//!     }
//! }
//!
//! struct Quiet;
//! impl SessionEvents for Quiet {} // implements nothing, still a listener
//!
//! let registry: DelegateRegistry<dyn SessionEvents> = DelegateRegistry::new();
//!
//! let logger: Arc<dyn SessionEvents> = Arc::new(Logger);
//! let quiet: Arc<dyn SessionEvents> = Arc::new(Quiet);
//! registry.add(&logger);
//! registry.add(&quiet);
//!
//! registry.broadcast(|s| s.connected("10.0.0.7"));
//! assert_eq!(registry.len(), 2);
//!
//! // Dropping the last strong reference unregisters the listener lazily.
//! drop(quiet);
//! assert_eq!(registry.len(), 1);
//! ```

mod registry;

// ---- Public re-exports ----

pub use registry::DelegateRegistry;
