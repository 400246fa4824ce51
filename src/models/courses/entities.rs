use serde::{Deserialize, Serialize};

// 课程，以名称唯一标识
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub name: String,
    pub teacher_id: Option<String>,
    pub enrolled_students: usize,
}
