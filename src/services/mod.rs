pub mod access;
pub mod broadcast;
pub mod expiry;
pub mod game;
pub mod health;
