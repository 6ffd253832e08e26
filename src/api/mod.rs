//! Cloudflare v4 DNS records API.

pub mod client;
pub mod cloudflare;
pub mod models;

pub use client::DnsApiClient;
pub use cloudflare::CloudflareClient;
