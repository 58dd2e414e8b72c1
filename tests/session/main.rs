//! Integration tests for Layer 3: Session
//!
//! Drives a whole floor session the way a host would and checks signals,
//! the resulting plan and the audit trail.

mod audit;
mod scenarios;
