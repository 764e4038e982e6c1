//! Integration tests for the dotcfg configuration system

mod store_lifecycle;
mod test_utils;
