use shadow_rs::shadow;

shadow!(build);

// Contract and engine
// -------------------
pub mod configuration;
pub mod solver;

// Problems
// --------
pub mod problems;
