use minichat_types::GENERIC_CONNECT_ERROR;
use std::error::Error as StdError;
use thiserror::Error;

/// Outcome of a failed exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The server answered with a non-success status.
    #[error("{detail}")]
    Http { status: u16, detail: String },

    /// The server answered successfully but without a usable reply.
    #[error("Received invalid or empty response from bot.")]
    InvalidResponse,

    /// The request never completed (connect, timeout, unreadable body).
    #[error("{detail}")]
    Transport { detail: String },
}

impl ChatError {
    /// Build a transport error from the full source chain of `err`.
    pub fn transport(err: &(dyn StdError + 'static)) -> Self {
        let mut parts = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            // hyper and reqwest often repeat the inner message verbatim
            if !parts.iter().any(|p| p.contains(&text)) {
                parts.push(text);
            }
            source = cause.source();
        }
        parts.retain(|p| !p.trim().is_empty());
        Self::transport_detail(parts.join(": "))
    }

    pub fn transport_detail(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if detail.trim().is_empty() {
            ChatError::Transport {
                detail: GENERIC_CONNECT_ERROR.to_string(),
            }
        } else {
            ChatError::Transport { detail }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        msg: &'static str,
        inner: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.msg)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.inner.as_deref().map(|l| l as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn test_transport_joins_source_chain() {
        let err = Layer {
            msg: "error sending request",
            inner: Some(Box::new(Layer {
                msg: "Connection refused",
                inner: None,
            })),
        };
        assert_eq!(
            ChatError::transport(&err),
            ChatError::Transport {
                detail: "error sending request: Connection refused".to_string()
            }
        );
    }

    #[test]
    fn test_transport_without_diagnostic_uses_generic_message() {
        let err = Layer { msg: "", inner: None };
        assert_eq!(ChatError::transport(&err).to_string(), GENERIC_CONNECT_ERROR);
    }

    #[test]
    fn test_display_strings() {
        let http = ChatError::Http {
            status: 500,
            detail: "model unavailable".to_string(),
        };
        assert_eq!(http.to_string(), "model unavailable");
        assert_eq!(
            ChatError::InvalidResponse.to_string(),
            "Received invalid or empty response from bot."
        );
    }
}
