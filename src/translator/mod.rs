//! Translation stage seam.
//!
//! The front end hands each parsed declaration, together with a mutable
//! symbol/type scope, to this stage. Code generation itself is
//! unspecified; the current behavior is limited to registering declared
//! names so the scope reflects everything the source introduces.

pub mod translator;
