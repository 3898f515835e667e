use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataError {
    #[error("This dataset is too limited, provide at least 4 observations.")]
    TooFewObservations,
    #[error("Number of x and y in observations is unequal.")]
    UnequalObservations,
}

pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::DataError;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DataError::TooFewObservations.to_string(),
            "This dataset is too limited, provide at least 4 observations."
        );
        assert_eq!(
            DataError::UnequalObservations.to_string(),
            "Number of x and y in observations is unequal."
        );
    }
}
