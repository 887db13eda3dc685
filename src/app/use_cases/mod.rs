//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod options;
pub mod scenario;
pub mod selection;
pub mod viewport;
