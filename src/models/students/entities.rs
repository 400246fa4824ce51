use serde::{Deserialize, Serialize};

// 学生选修的一门课程，未评分时 grade 为空
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseGrade {
    pub course: String,
    pub grade: Option<f64>,
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: u32,
    /// 按选课顺序排列
    pub courses: Vec<CourseGrade>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            courses: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn is_enrolled(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c.course == course)
    }

    pub fn grade_for(&self, course: &str) -> Option<f64> {
        self.courses
            .iter()
            .find(|c| c.course == course)
            .and_then(|c| c.grade)
    }

    /// 已评分的课程，保持选课顺序
    pub fn graded_courses(&self) -> impl Iterator<Item = (&str, f64)> {
        self.courses
            .iter()
            .filter_map(|c| c.grade.map(|g| (c.course.as_str(), g)))
    }

    /// 平均分，只统计已评分课程
    pub fn average_grade(&self) -> Option<f64> {
        let grades: Vec<f64> = self.graded_courses().map(|(_, g)| g).collect();
        if grades.is_empty() {
            return None;
        }
        Some(grades.iter().sum::<f64>() / grades.len() as f64)
    }
}
