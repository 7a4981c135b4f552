pub mod catalog;
pub mod cli;
pub mod error;
pub mod matcher;
pub mod textures;
