//! Invitation card domain library.
//!
//! Holds the design descriptor, the bundled preset catalog, the asset
//! resolver, and the render composer shared by the editor and the guest
//! viewer, plus the collaborator ports both sessions talk through.

pub mod catalog;
pub mod composer;
pub mod descriptor;
pub mod design;
pub mod editor;
pub mod error;
pub mod facts;
pub mod migrate;
pub mod ports;
pub mod resolver;
pub mod store;
pub mod types;
pub mod viewer;
