//! Integration tests for Layer 2: Interaction
//!
//! Tests for mode transitions, dragging, hit-testing and the table workflow.

mod drag;
mod modes;
