//! 课程存储操作

use super::Gradebook;
use crate::errors::{Result, SGSError};
use crate::models::courses::entities::Course;

impl Gradebook {
    /// 新增课程
    pub(crate) fn create_course_impl(&mut self, name: &str) -> Result<Course> {
        if self.courses.contains_key(name) {
            return Err(SGSError::course_already_exists(format!(
                "Course '{name}' already exists"
            )));
        }
        self.courses.insert(name.to_string(), None);
        Ok(Course {
            name: name.to_string(),
            teacher_id: None,
            enrolled_students: 0,
        })
    }

    pub(crate) fn list_courses_impl(&self) -> Vec<Course> {
        self.courses
            .iter()
            .map(|(name, owner)| Course {
                name: name.clone(),
                teacher_id: owner.clone(),
                enrolled_students: self.enrollment_count(name),
            })
            .collect()
    }

    /// 删除课程
    ///
    /// 仍有学生选修时拒绝删除；负责教师的课程列表同步移除。
    pub(crate) fn delete_course_impl(&mut self, name: &str) -> Result<bool> {
        let Some(owner) = self.courses.get(name).cloned() else {
            return Ok(false);
        };

        let enrolled = self.enrollment_count(name);
        if enrolled > 0 {
            return Err(SGSError::course_in_use(format!(
                "Course '{name}' still has {enrolled} enrolled student(s)"
            )));
        }

        if let Some(teacher) = owner.and_then(|id| self.teachers.get_mut(&id)) {
            teacher.courses.retain(|c| c != name);
        }
        self.courses.remove(name);
        Ok(true)
    }

    fn enrollment_count(&self, course: &str) -> usize {
        self.students
            .values()
            .filter(|s| s.is_enrolled(course))
            .count()
    }
}
