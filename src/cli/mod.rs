//! Command-line workflow support

pub mod orchestration;

pub use orchestration::{run_scan_workflow, ScanWorkflowArgs, WorkflowResult};
