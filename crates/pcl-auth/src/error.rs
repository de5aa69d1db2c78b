use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in — run `pcl auth login`")]
    NotAuthenticated,

    #[error("session expired — run `pcl auth login` again")]
    SessionExpired,

    #[error("session store error: {0}")]
    SessionStore(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),
}
