mod input_tests;
mod support;
