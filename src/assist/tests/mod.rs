//! Unit tests for the assist module.
