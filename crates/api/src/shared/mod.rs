pub mod auth;
pub mod guard;
pub mod redirect;
pub mod usecase;
