//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_sgs_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum SGSError {
            $($variant(String),)*
        }

        impl SGSError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SGSError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SGSError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SGSError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SGSError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SGSError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_sgs_errors! {
    Configuration("E001", "Configuration Error"),
    Validation("E002", "Validation Error"),
    StudentNotFound("E003", "Student Not Found"),
    StudentAlreadyExists("E004", "Student Already Exists"),
    TeacherNotFound("E005", "Teacher Not Found"),
    TeacherAlreadyExists("E006", "Teacher Already Exists"),
    CourseNotFound("E007", "Course Not Found"),
    CourseAlreadyExists("E008", "Course Already Exists"),
    CourseAlreadyAssigned("E009", "Course Already Assigned"),
    CourseAlreadyEnrolled("E010", "Course Already Enrolled"),
    CourseNotEnrolled("E011", "Course Not Enrolled"),
    CourseInUse("E012", "Course In Use"),
    GradesUnavailable("E013", "Grades Unavailable"),
    InsufficientData("E014", "Insufficient Data"),
    Authentication("E015", "Authentication Error"),
    Authorization("E016", "Authorization Error"),
    Serialization("E017", "Serialization Error"),
    PasswordHash("E018", "Password Hash Error"),
}

impl SGSError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否属于"资源不存在"一类错误
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SGSError::StudentNotFound(_) | SGSError::TeacherNotFound(_) | SGSError::CourseNotFound(_)
        )
    }
}

impl fmt::Display for SGSError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SGSError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for SGSError {
    fn from(err: serde_json::Error) -> Self {
        SGSError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for SGSError {
    fn from(err: config::ConfigError) -> Self {
        SGSError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SGSError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SGSError::configuration("test").code(), "E001");
        assert_eq!(SGSError::validation("test").code(), "E002");
        assert_eq!(SGSError::student_not_found("test").code(), "E003");
        assert_eq!(SGSError::authentication("test").code(), "E015");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SGSError::course_already_assigned("test").error_type(),
            "Course Already Assigned"
        );
        assert_eq!(
            SGSError::grades_unavailable("test").error_type(),
            "Grades Unavailable"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SGSError::validation("Grade must be between 0 and 100");
        assert_eq!(err.message(), "Grade must be between 0 and 100");
    }

    #[test]
    fn test_format_simple() {
        let err = SGSError::teacher_not_found("Teacher not found!");
        let formatted = err.format_simple();
        assert!(formatted.contains("Teacher Not Found"));
        assert!(formatted.contains("Teacher not found!"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(SGSError::student_not_found("x").is_not_found());
        assert!(SGSError::course_not_found("x").is_not_found());
        assert!(!SGSError::validation("x").is_not_found());
    }
}
