//! Pure client-side state modules.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM or storage, so every rule is unit-testable on
//! the host target.

pub mod projection;
pub mod provider;
pub mod selection;
