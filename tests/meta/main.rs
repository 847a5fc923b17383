//! Repository layout checks run alongside the unit and integration tests
