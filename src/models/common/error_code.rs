use crate::errors::SGSError;

/// 响应体中的业务错误码
///
/// 按领域分段：1xxx 通用，2xxx 认证，3xxx 学生，4xxx 教师，5xxx 课程，6xxx 成绩，7xxx 分析。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    AuthFailed = 2000,

    StudentNotFound = 3000,
    StudentAlreadyExists = 3001,
    StudentInvalid = 3002,

    TeacherNotFound = 4000,
    TeacherAlreadyExists = 4001,
    TeacherInvalid = 4002,
    TeacherPasswordInvalid = 4003,

    CourseNotFound = 5000,
    CourseAlreadyExists = 5001,
    CourseAlreadyAssigned = 5002,
    CourseAlreadyEnrolled = 5003,
    CourseNotEnrolled = 5004,
    CourseInUse = 5005,

    GradeInvalid = 6000,
    GradePermissionDenied = 6001,
    GradesUnavailable = 6002,

    PredictionDataInsufficient = 7000,
}

impl From<&SGSError> for ErrorCode {
    fn from(err: &SGSError) -> Self {
        match err {
            SGSError::Validation(_) => ErrorCode::BadRequest,
            SGSError::StudentNotFound(_) => ErrorCode::StudentNotFound,
            SGSError::StudentAlreadyExists(_) => ErrorCode::StudentAlreadyExists,
            SGSError::TeacherNotFound(_) => ErrorCode::TeacherNotFound,
            SGSError::TeacherAlreadyExists(_) => ErrorCode::TeacherAlreadyExists,
            SGSError::CourseNotFound(_) => ErrorCode::CourseNotFound,
            SGSError::CourseAlreadyExists(_) => ErrorCode::CourseAlreadyExists,
            SGSError::CourseAlreadyAssigned(_) => ErrorCode::CourseAlreadyAssigned,
            SGSError::CourseAlreadyEnrolled(_) => ErrorCode::CourseAlreadyEnrolled,
            SGSError::CourseNotEnrolled(_) => ErrorCode::CourseNotEnrolled,
            SGSError::CourseInUse(_) => ErrorCode::CourseInUse,
            SGSError::GradesUnavailable(_) => ErrorCode::GradesUnavailable,
            SGSError::InsufficientData(_) => ErrorCode::PredictionDataInsufficient,
            SGSError::Authentication(_) => ErrorCode::AuthFailed,
            SGSError::Authorization(_) => ErrorCode::Forbidden,
            SGSError::Configuration(_) | SGSError::Serialization(_) | SGSError::PasswordHash(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}
