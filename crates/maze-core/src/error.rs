use thiserror::Error;

/// Errors produced by the maze engine
#[derive(Error, Debug)]
pub enum MazeError {
    /// Requested maze size is below the supported minimum
    #[error("maze size {size} is too small, the minimum is {min}")]
    SizeTooSmall { size: usize, min: usize },

    /// Text could not be turned into a maze grid
    #[error("malformed maze input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// Reading or writing a maze file failed
    #[error("maze file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MazeError::SizeTooSmall { size: 3, min: 5 };
        assert_eq!(err.to_string(), "maze size 3 is too small, the minimum is 5");

        let err = MazeError::MalformedInput {
            line: 2,
            reason: "expected 5 symbols, found 4".to_string(),
        };
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MazeError = io.into();
        assert!(matches!(err, MazeError::Io(_)));
    }
}
