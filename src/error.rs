use thiserror::Error;

/// Failures while selecting or opening a capture source.
///
/// All of these are fatal for the tester; the caller decides how to exit.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("onboard camera source not found (no nvcamerasrc or nvarguscamerasrc)")]
    PluginNotFound,

    #[error("failed to probe multimedia plugins: {0:#}")]
    ProbeFailed(anyhow::Error),

    #[error("failed to open camera: {0}")]
    DeviceUnavailable(String),

    #[error("capture backend error")]
    Backend(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn backend_message_leaves_cause_to_the_chain() {
        let err = OpenError::from(anyhow::anyhow!("videoio refused the pipeline"));
        assert_eq!(err.to_string(), "capture backend error");
        let source = err.source().expect("backend cause");
        assert_eq!(source.to_string(), "videoio refused the pipeline");
        assert_eq!(
            format!("{:#}", anyhow::Error::new(err)),
            "capture backend error: videoio refused the pipeline"
        );
    }
}
