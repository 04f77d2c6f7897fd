//! Trait seams to external collaborators.

pub mod cube_client;

pub use cube_client::ICubeClient;
