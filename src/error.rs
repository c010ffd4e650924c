pub type GlintResult<T> = Result<T, GlintError>;

#[derive(thiserror::Error, Debug)]
pub enum GlintError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlintError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            GlintError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            GlintError::invalid_parameter("x")
                .to_string()
                .contains("invalid parameter:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = GlintError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
