use std::fmt;

#[derive(Debug)]
pub enum PcmError {
    Config(serde_json::Error),
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    InvalidCode {
        code: String,
    },
}

impl fmt::Display for PcmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PcmError::Config(e) => write!(f, "Config error: {e}"),
            PcmError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid parameter '{name}' = {value}: {reason}")
            }
            PcmError::InvalidCode { code } => write!(f, "Invalid binary code '{code}'"),
        }
    }
}

impl std::error::Error for PcmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PcmError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PcmError {
    fn from(e: serde_json::Error) -> Self {
        PcmError::Config(e)
    }
}
