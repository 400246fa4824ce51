use serde::{Deserialize, Serialize};

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub courses: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Teacher {
    pub fn teaches(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }
}
