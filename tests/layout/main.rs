//! Integration tests for Layer 1: Layout
//!
//! Tests for the layout store, clamping, table state and the seed plan.

mod items;
mod tables;
