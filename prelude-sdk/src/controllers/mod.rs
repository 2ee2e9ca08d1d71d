//! Typed controllers over API namespaces.

pub mod detect;

pub use detect::DetectController;
