//! Asynchronous client for remote blog administration.
//!
//! [`application::BlogServiceRemote`] is the contract; [`infra::rest`] provides
//! the REST implementation and [`application::CallbackBlogService`] adapts any
//! implementation to success/failure callbacks.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
