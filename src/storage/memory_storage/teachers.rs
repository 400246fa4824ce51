//! 教师存储操作

use super::Gradebook;
use crate::errors::{Result, SGSError};
use crate::models::teachers::entities::Teacher;

impl Gradebook {
    /// 创建教师
    ///
    /// 目录中不存在的课程会一并加入目录；已归属其他教师的课程拒绝分配。
    pub(crate) fn create_teacher_impl(
        &mut self,
        id: &str,
        name: &str,
        password_hash: String,
        course: &str,
    ) -> Result<Teacher> {
        if self.teachers.contains_key(id) {
            return Err(SGSError::teacher_already_exists("Teacher ID already exists"));
        }
        if let Some(Some(owner)) = self.courses.get(course) {
            return Err(SGSError::course_already_assigned(format!(
                "Course '{course}' is already assigned to {owner}"
            )));
        }

        let teacher = Teacher {
            id: id.to_string(),
            name: name.to_string(),
            password_hash,
            courses: vec![course.to_string()],
            created_at: chrono::Utc::now(),
        };
        self.courses.insert(course.to_string(), Some(id.to_string()));
        self.teachers.insert(id.to_string(), teacher.clone());
        Ok(teacher)
    }

    /// 删除教师，释放其负责的课程
    pub(crate) fn delete_teacher_impl(&mut self, id: &str) -> bool {
        let Some(teacher) = self.teachers.remove(id) else {
            return false;
        };
        for course in &teacher.courses {
            if let Some(owner) = self.courses.get_mut(course)
                && owner.as_deref() == Some(id)
            {
                *owner = None;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_teacher_registers_course() {
        let mut book = Gradebook::default();
        let teacher = book
            .create_teacher_impl("guru", "Guru", "hash".into(), "Python")
            .unwrap();
        assert_eq!(teacher.courses, vec!["Python".to_string()]);
        assert_eq!(book.courses.get("Python"), Some(&Some("guru".to_string())));
    }

    #[test]
    fn test_duplicate_teacher_rejected() {
        let mut book = Gradebook::default();
        book.create_teacher_impl("guru", "Guru", "hash".into(), "Python")
            .unwrap();
        let err = book
            .create_teacher_impl("guru", "Guru Two", "hash".into(), "NLP")
            .unwrap_err();
        assert_eq!(err, SGSError::teacher_already_exists("Teacher ID already exists"));
        assert!(!book.courses.contains_key("NLP"));
    }

    #[test]
    fn test_course_owned_by_single_teacher() {
        let mut book = Gradebook::default();
        book.create_teacher_impl("guru", "Guru", "hash".into(), "Python")
            .unwrap();
        let err = book
            .create_teacher_impl("guru1", "Guru One", "hash".into(), "Python")
            .unwrap_err();
        assert_eq!(err.message(), "Course 'Python' is already assigned to guru");
        assert!(!book.teachers.contains_key("guru1"));
    }

    #[test]
    fn test_remove_teacher_releases_course() {
        let mut book = Gradebook::default();
        book.create_teacher_impl("guru", "Guru", "hash".into(), "Python")
            .unwrap();
        assert!(book.delete_teacher_impl("guru"));
        assert_eq!(book.courses.get("Python"), Some(&None));

        // 课程释放后可再分配给新教师
        assert!(
            book.create_teacher_impl("guru1", "Guru One", "hash".into(), "Python")
                .is_ok()
        );
    }

    #[test]
    fn test_remove_missing_teacher() {
        let mut book = Gradebook::default();
        assert!(!book.delete_teacher_impl("nobody"));
    }
}
