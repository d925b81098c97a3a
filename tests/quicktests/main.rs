//! Property tests run against the public API only.

mod tree;
