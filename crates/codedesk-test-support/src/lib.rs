#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, unused)]

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (addresses and sample inputs), backend.rs (mock backend replies).

pub mod backend;
pub mod fixtures;
