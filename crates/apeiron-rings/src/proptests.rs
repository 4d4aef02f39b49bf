//! Property-based tests for the element domains and square roots.
