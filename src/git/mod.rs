//! Remote ref access through the `git` command line.

pub mod remote;

pub use remote::{GitRemote, parse_ls_remote};
