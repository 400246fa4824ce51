use serde::{Deserialize, Serialize};

use crate::models::teachers::entities::Teacher;

// 用户角色（对应登录表单中的用户类型）
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Teacher, // 教师
    Admin,   // 管理员
}

impl UserRole {
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn teacher_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher]
    }
    pub fn staff_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Admin]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid user type: '{s}'. Supported types: admin, teacher"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 已认证的用户（JWT 中间件写入请求扩展）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    /// 教师负责的课程，管理员为空
    pub courses: Vec<String>,
}

impl User {
    pub fn admin(username: &str) -> Self {
        Self {
            id: username.to_string(),
            name: "Administrator".to_string(),
            role: UserRole::Admin,
            courses: Vec::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            &self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("Failed to generate token pair: {e}"))
    }
}

impl From<&Teacher> for User {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id.clone(),
            name: teacher.name.clone(),
            role: UserRole::Teacher,
            courses: teacher.courses.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_str() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("teacher".parse::<UserRole>(), Ok(UserRole::Teacher));
        assert!("student".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Teacher.to_string(), "teacher");
    }

    #[test]
    fn test_role_deserialize_rejects_unknown() {
        let err = serde_json::from_str::<UserRole>("\"guest\"").unwrap_err();
        assert!(err.to_string().contains("Invalid user type"));
    }
}
