//! Channel catalog tests.

mod decode_tests;
