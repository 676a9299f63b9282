pub mod common;

mod resolver_test;
