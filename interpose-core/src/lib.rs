/*! This library interposes on native command lists.
 *  It forwards every recorded call to the native list while tracking the
 *  state bound to it, so that foreign rendering can be injected in the middle
 *  of a frame and the application's bound state restored afterwards.
 */

#![allow(
    // We don't use syntax sugar where it's not necessary.
    clippy::match_like_matches_macro,
    // Explicit lifetimes are often easier to reason about.
    clippy::needless_lifetimes,
    // No need for defaults in the internal types.
    clippy::new_without_default,
    // The native entry points take this many arguments.
    clippy::too_many_arguments,
    // Clashes with clippy::pattern_type_mismatch
    clippy::needless_borrowed_reference,
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_qualifications,
    // We don't match on a reference, unless required.
    clippy::pattern_type_mismatch,
)]

pub mod command;
mod error;
pub mod hook;
pub mod inject;
pub mod registry;
pub mod snapshot;
pub mod track;

pub use command::CommandListProxy;
pub use error::{HookError, InjectError};
pub use hook::{EvaluateFeature, EvaluateFeatureHook, FeatureParameters, FeatureResult, Install};
pub use inject::{EffectRuntime, InjectionDescriptor};
pub use registry::RuntimeRegistry;
pub use snapshot::StateSnapshot;
pub use track::BindingState;

pub use hal::Api as HalApi;
