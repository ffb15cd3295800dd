// Host-agnostic login core
pub mod login;

// Browser component (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod web;

// Terminal driver (only compiled with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
