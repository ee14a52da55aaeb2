use http::StatusCode;

/// Outcome of a call that reached the API.
///
/// Non-200 answers are values, not errors; callers decide what to print.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure { status: StatusCode, body: String },
}

impl<T> ApiResponse<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(x) => ApiResponse::Success(f(x)),
            ApiResponse::Failure { status, body } => ApiResponse::Failure { status, body },
        }
    }
}
