pub mod support;
mod model_tests;
mod workflow_tests;
