pub mod chat;
pub mod emotion;
pub mod journal;
pub mod mood;
pub mod profile;
pub mod stats;
