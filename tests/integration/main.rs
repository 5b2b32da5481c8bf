//! Integration test harness

mod estimator_test;
mod pipeline_test;
