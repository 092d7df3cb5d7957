mod mapping_invariants_tests;
mod session_tests;
