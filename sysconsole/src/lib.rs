//! sysconsole: headless settings panels for an admin console.
//!
//! This facade crate re-exports the sysconsole sub-crates through a single
//! dependency with feature flags. Import everything you need with:
//!
//! ```ignore
//! use sysconsole::prelude::*;
//! ```
//!
//! # Feature flags
//!
//! | Feature | Default | Crate             |
//! |---------|---------|-------------------|
//! | `oidc`  | **yes** | `sysconsole-oidc` |

pub extern crate sysconsole_core;

// Re-export everything from sysconsole-core at the top level for convenience.
pub use sysconsole_core::*;

#[cfg(feature = "oidc")]
pub use sysconsole_oidc;

/// Unified prelude. Import everything with `use sysconsole::prelude::*`.
///
/// Includes the core prelude plus the panels of all enabled feature crates.
pub mod prelude {
    pub use sysconsole_core::prelude::*;

    #[cfg(feature = "oidc")]
    pub use sysconsole_oidc::prelude::*;
}
