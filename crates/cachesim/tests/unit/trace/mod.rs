//! # Trace Unit Tests
