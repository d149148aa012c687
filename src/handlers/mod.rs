pub mod chat;
pub mod companion;
pub mod emotion;
pub mod health;
pub mod journal;
pub mod mood;
pub mod profile;
pub mod resources;
pub mod stats;
pub mod theme;
