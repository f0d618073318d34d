//! Engine-level error type.
//!
//! The `Display` text of every variant is exactly the `message` carried
//! by the `error` notification on the wire.

use plummet_core::{ComputationFault, ValidationIssue};
use thiserror::Error;

use crate::driver::DriverError;
use crate::protocol::ProtocolError;

/// A request that ended without a result.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Parameters failed validation; no simulation ran.
    #[error("입력값 오류: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),
    /// The request kind is not understood.
    #[error("알 수 없는 명령: {0}")]
    UnknownRequest(String),
    /// The request could not be decoded.
    #[error("잘못된 요청: {0}")]
    Malformed(#[from] ProtocolError),
    /// The run hit a numerical fault or panicked.
    #[error("계산 오류: {0}")]
    Computation(#[from] ComputationFault),
    /// The run was cancelled through its [`CancelToken`](crate::CancelToken).
    #[error("시뮬레이션 취소: run cancelled at t = {at_time:.2} s")]
    Cancelled {
        /// Simulated time at which cancellation was observed.
        at_time: f64,
    },
}

impl From<DriverError> for EngineError {
    fn from(e: DriverError) -> Self {
        match e {
            DriverError::Fault(fault) => Self::Computation(fault),
            DriverError::Cancelled { at_time } => Self::Cancelled { at_time },
        }
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
