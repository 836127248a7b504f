/*!
 * Main test entry point for vibelink-docgen test suite
 */

#![allow(non_snake_case)]

// Import common test utilities
pub mod common;

// Import unit tests
mod unit {
    // Document model tests
    pub mod document_model_tests;

    // App configuration tests
    pub mod app_config_tests;

    // File and folder related tests
    pub mod file_utils_tests;

    // Section content and structure tests
    pub mod sections_tests;

    // .docx rendering tests
    pub mod docx_writer_tests;
}

// Import integration tests
mod integration {
    // End-to-end document generation tests
    pub mod generate_workflow_tests;

    // Full app lifecycle tests
    pub mod app_lifecycle_tests;
}
