pub mod api;
mod session;
