//! Message authentication code implementations

pub mod hmac;

pub use hmac::Hmac;
