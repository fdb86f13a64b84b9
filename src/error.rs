use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorError {
    /// Any network-level fault: timeout, connect, DNS, TLS, body read, redirect limit
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MirrorError>;

/// Render an error and every error in its source chain as one line.
pub fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let msg = cause.to_string();
        // Skip a cause the previous message already ends with
        if !parts.last().is_some_and(|prev| prev.ends_with(&msg)) {
            parts.push(msg);
        }
        source = cause.source();
    }
    parts.retain(|p| !p.is_empty());
    parts.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;

    #[derive(Debug)]
    struct Layer {
        msg: &'static str,
        cause: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.msg)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.cause.as_deref().map(|c| c as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn describe_skips_cause_already_in_parent() {
        let inner = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let err = MirrorError::Io(inner);
        assert_eq!(describe(&err), "IO operation failed: connection refused");
    }

    #[test]
    fn describe_walks_source_chain() {
        let err = Layer {
            msg: "error sending request",
            cause: Some(Box::new(Layer {
                msg: "tcp connect error: Connection refused (os error 111)",
                cause: Some(Box::new(Layer {
                    msg: "Connection refused (os error 111)",
                    cause: None,
                })),
            })),
        };
        assert_eq!(
            describe(&err),
            "error sending request: tcp connect error: Connection refused (os error 111)"
        );
    }

    #[test]
    fn describe_without_cause_is_message() {
        let err = Layer {
            msg: "dns error",
            cause: None,
        };
        assert_eq!(describe(&err), "dns error");
    }
}
