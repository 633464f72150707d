pub mod client;

pub use client::CurateClient;
