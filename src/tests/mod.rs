mod utils;

mod store_tests;
