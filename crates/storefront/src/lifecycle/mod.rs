//! # Storefront Lifecycle
//!
//! [`Storefront`] is the root composition: it starts the product store actor, owns the
//! catalog source and the notifier, and exposes one method per user command.
//!
//! Every command follows the same order:
//!
//! 1. network reads (catalog fetch) run under the caller's [`Scope`](store_framework::Scope),
//! 2. the resulting action is dispatched to the store,
//! 3. the notification describing it is spawned as an [`EffectHandle`].
//!
//! Step 3 never undoes step 2.

pub mod effects;
pub mod error;
pub mod feedback;
pub mod storefront;

pub use effects::{Applied, EffectHandle, NotifyOutcome};
pub use error::StorefrontError;
pub use feedback::{Dialog, OrderFeedback};
pub use storefront::*;
