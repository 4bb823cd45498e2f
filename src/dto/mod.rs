//! Wire-facing request and response types, one module per route tree.

pub mod admin;
pub mod game;
pub mod health;
pub mod score;
pub mod validation;
