//! Configuration loading and resolution.
//!
//! `load` merges default config files, explicit `--config` files, `AFIND__*`
//! environment variables and CLI flags (in increasing precedence) and returns
//! a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
