// Service module exports

pub mod api;
pub mod board;
pub mod conflict;
pub mod drawer;
pub mod edit;
pub mod fetch;
pub mod reference;
