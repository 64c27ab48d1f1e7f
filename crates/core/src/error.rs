use thiserror::Error;

use crate::model::CourseError;
use crate::model::LoginError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Login(#[from] LoginError),
}
