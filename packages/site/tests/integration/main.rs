mod page_load_tests;
mod submission_tests;
