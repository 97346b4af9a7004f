mod run_app_tests;
mod session_tests;
