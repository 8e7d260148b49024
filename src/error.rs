//! Error handling for the dashboard generator
//!
//! Defines custom error types and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use thiserror::Error;

/// Core error types for dashboard generation
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("data load error: {0}")]
    DataLoad(String),

    #[error("write error: {0}")]
    Write(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dashboard operations
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting_is_readable() {
        let err = DashboardError::DataLoad("sheet 'FRL_Portfolio' not found".to_string());
        assert_eq!(
            err.to_string(),
            "data load error: sheet 'FRL_Portfolio' not found"
        );
    }

    #[test]
    fn test_anyhow_context_chains_errors() {
        use anyhow::Context;
        let result: Result<()> =
            Err(anyhow::anyhow!("original error")).context("failed to load portfolio data");
        match result {
            Err(e) => {
                let msg = e.to_string();
                assert!(msg.contains("failed to load portfolio data"));
                let debug_msg = format!("{:?}", e);
                assert!(debug_msg.contains("original error") || msg.contains("original error"));
            }
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn test_dashboard_error_variants() {
        let load_err = DashboardError::DataLoad("test".to_string());
        assert!(load_err.to_string().starts_with("data load error"));

        let write_err = DashboardError::Write("test".to_string());
        assert!(write_err.to_string().starts_with("write error"));
    }
}
