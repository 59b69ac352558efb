//! Actor+Relay primitives the editor's state is built on.
//!
//! - **[`Relay`]** - typed event channel from UI controls to an Actor
//! - **[`Actor`]** - single value owned by a sequential processing loop
//! - **[`ActorVec`]** - collection owned by a processing loop, exposed as `SignalVec`
//! - **[`Atom`]** - local UI state (expanded panels and the like)
//!
//! Relays are named after the event source: `{source}_{event}_relay`.
//! State is read through signals; only the owning loop mutates it.

pub mod actor;
pub mod actor_vec;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use actor_vec::{ActorVec, ActorVecHandle};
pub use atom::Atom;
pub use relay::{Relay, relay};
