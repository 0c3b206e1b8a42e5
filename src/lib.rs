// Reusable library API, shared by the CLI binary and the integration tests
pub mod dictionary;
pub mod errors;
pub mod log;
pub mod solver;

mod token_char;
