//! Unit tests for the mission module.
//!
//! Tests are organised by concept: the crew aggregate predicates, crew
//! member construction, and mission construction with its ordered rules.
