//! Error conversion from MemoError to gRPC Status

use crate::error::{ErrorKind, MemoError};
use tonic::{Code, Status};

impl From<MemoError> for Status {
    fn from(err: MemoError) -> Self {
        let code = match err.kind() {
            ErrorKind::InvalidInput => Code::InvalidArgument,
            ErrorKind::NotFound => Code::NotFound,
            ErrorKind::Internal => Code::Internal,
        };

        Status::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MemoId;

    #[test]
    fn test_error_conversion() {
        let err = MemoError::NotFound(MemoId::from("test-id"));
        let status: Status = err.into();
        assert_eq!(status.code(), Code::NotFound);
        assert!(status.message().contains("test-id"));
    }

    #[test]
    fn test_invalid_input_errors() {
        for err in [
            MemoError::InvalidTitle,
            MemoError::InvalidContent,
            MemoError::EmptyId,
        ] {
            let message = err.to_string();
            let status: Status = err.into();
            assert_eq!(status.code(), Code::InvalidArgument);
            assert_eq!(status.message(), message);
        }
    }

    #[test]
    fn test_internal_error() {
        let err = MemoError::Internal("lock poisoned".to_string());
        let status: Status = err.into();
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "lock poisoned");
    }
}
