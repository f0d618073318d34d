//! JSON message protocol between the engine and its consumers.
//!
//! Every message is an object whose `kind` field names its variant.
//!
//! | Direction | `kind`     | Other fields                    |
//! |-----------|------------|---------------------------------|
//! | in        | `simulate` | `params: { mass, height }`      |
//! | out       | `ready`    |                                 |
//! | out       | `status`   | `message`                       |
//! | out       | `progress` | `progress` (0–100), `currentTime` |
//! | out       | `complete` | `results`                       |
//! | out       | `error`    | `message`                       |
//!
//! Per request the engine emits zero or more `progress` messages followed
//! by exactly one terminal `complete` or `error`.

use plummet_core::{SimulationParameters, SimulationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// `kind` of the only request the engine acts on.
pub const SIMULATE_KIND: &str = "simulate";

// ── ProtocolError ──────────────────────────────────────────────────

/// Failure to decode or encode a protocol message.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The text is not valid JSON for the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The object has no string `kind` field.
    #[error("message has no string `kind` field")]
    MissingKind,
    /// A `simulate` request without `params`.
    #[error("`simulate` request has no `params` object")]
    MissingParams,
}

// ── Request ────────────────────────────────────────────────────────

/// An inbound command.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    /// Run both models with these parameters.
    Simulate {
        /// Unvalidated parameters as received.
        params: SimulationParameters,
    },
    /// Any other `kind`; answered with an error.
    Unknown(String),
}

impl Request {
    /// Shorthand for a `simulate` request.
    pub fn simulate(mass: f64, height: f64) -> Self {
        Self::Simulate {
            params: SimulationParameters::new(mass, height),
        }
    }

    /// The wire `kind` of this request.
    pub fn kind(&self) -> &str {
        match self {
            Self::Simulate { .. } => SIMULATE_KIND,
            Self::Unknown(kind) => kind,
        }
    }

    /// Decode a request.
    ///
    /// Unrecognized kinds decode successfully as [`Request::Unknown`] so
    /// the engine can answer them; only structurally broken text fails.
    ///
    /// ```
    /// use plummet_engine::Request;
    ///
    /// let req = Request::from_json(r#"{"kind":"simulate","params":{"mass":70,"height":10}}"#).unwrap();
    /// assert_eq!(req, Request::simulate(70.0, 10.0));
    /// assert_eq!(Request::from_json(r#"{"kind":"pause"}"#).unwrap().kind(), "pause");
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(text)?;
        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingKind)?;
        if kind != SIMULATE_KIND {
            return Ok(Self::Unknown(kind.to_owned()));
        }
        let params = value.get("params").ok_or(ProtocolError::MissingParams)?;
        Ok(Self::Simulate {
            params: SimulationParameters::deserialize(params)?,
        })
    }

    /// Encode a request.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        let value = match self {
            Self::Simulate { params } => serde_json::json!({
                "kind": SIMULATE_KIND,
                "params": params,
            }),
            Self::Unknown(kind) => serde_json::json!({ "kind": kind }),
        };
        Ok(serde_json::to_string(&value)?)
    }
}

// ── Notification ───────────────────────────────────────────────────

/// An outbound message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notification {
    /// The worker is up and accepting requests. Sent once per worker.
    Ready,
    /// Free-form status text.
    Status {
        /// Status text.
        message: String,
    },
    /// Run progress.
    Progress {
        /// Completion percent in `[0, 100]`.
        progress: f64,
        /// Simulated time (s) of the reported tick.
        #[serde(rename = "currentTime")]
        current_time: f64,
    },
    /// Terminal success.
    Complete {
        /// The finished run.
        results: SimulationResult,
    },
    /// Terminal failure.
    Error {
        /// Human-readable description, prefixed by failure class.
        message: String,
    },
}

impl Notification {
    /// Whether this message ends a request.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. } | Self::Error { .. })
    }

    /// Encode a notification.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a notification.
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }
}
