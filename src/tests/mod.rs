mod access_tests;
mod cli_context_tests;
mod error_tests;
