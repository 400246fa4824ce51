//! 内存存储实现
//!
//! 整个成绩簿放在一把 `RwLock` 之下，每个操作内的多表检查与写入都是原子的。
//! 数据仅在进程生命周期内有效。

mod courses;
mod students;
mod teachers;

use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::info;

use crate::errors::Result;
use crate::models::{
    NumberInput, courses::entities::Course, students::entities::Student,
    teachers::entities::Teacher,
};

use super::Storage;

/// 管理员账号
#[derive(Debug, Clone)]
struct AdminAccount {
    username: String,
    password_hash: String,
}

/// 成绩簿：学生、教师、课程目录及课程归属
#[derive(Debug, Default)]
pub(crate) struct Gradebook {
    admin: Option<AdminAccount>,
    students: BTreeMap<String, Student>,
    teachers: BTreeMap<String, Teacher>,
    /// 课程名 -> 负责教师
    courses: BTreeMap<String, Option<String>>,
}

/// 内存存储实现
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: RwLock<Gradebook>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        info!("In-memory gradebook initialized");
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn set_admin(&self, username: &str, password_hash: String) -> Result<()> {
        let mut book = self.state.write().await;
        book.admin = Some(AdminAccount {
            username: username.to_string(),
            password_hash,
        });
        Ok(())
    }

    async fn get_admin_password_hash(&self, username: &str) -> Result<Option<String>> {
        let book = self.state.read().await;
        Ok(book
            .admin
            .as_ref()
            .filter(|admin| admin.username == username)
            .map(|admin| admin.password_hash.clone()))
    }

    async fn create_teacher(
        &self,
        id: &str,
        name: &str,
        password_hash: String,
        course: &str,
    ) -> Result<Teacher> {
        self.state
            .write()
            .await
            .create_teacher_impl(id, name, password_hash, course)
    }

    async fn get_teacher_by_id(&self, id: &str) -> Result<Option<Teacher>> {
        Ok(self.state.read().await.teachers.get(id).cloned())
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        Ok(self.state.read().await.teachers.values().cloned().collect())
    }

    async fn delete_teacher(&self, id: &str) -> Result<bool> {
        Ok(self.state.write().await.delete_teacher_impl(id))
    }

    async fn count_teachers(&self) -> Result<usize> {
        Ok(self.state.read().await.teachers.len())
    }

    async fn create_student(&self, id: &str, name: &str, age: &NumberInput) -> Result<Student> {
        self.state.write().await.create_student_impl(id, name, age)
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        Ok(self.state.read().await.students.get(id).cloned())
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.state.read().await.students.values().cloned().collect())
    }

    async fn delete_student(&self, id: &str) -> Result<bool> {
        Ok(self.state.write().await.students.remove(id).is_some())
    }

    async fn assign_course_to_student(&self, student_id: &str, course: &str) -> Result<Student> {
        self.state
            .write()
            .await
            .assign_course_to_student_impl(student_id, course)
    }

    async fn assign_grade(
        &self,
        teacher_id: &str,
        student_id: &str,
        course: &str,
        grade: &NumberInput,
    ) -> Result<Student> {
        self.state
            .write()
            .await
            .assign_grade_impl(teacher_id, student_id, course, grade)
    }

    async fn create_course(&self, name: &str) -> Result<Course> {
        self.state.write().await.create_course_impl(name)
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(self.state.read().await.list_courses_impl())
    }

    async fn delete_course(&self, name: &str) -> Result<bool> {
        self.state.write().await.delete_course_impl(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SGSError;

    #[actix_web::test]
    async fn test_admin_hash_only_for_matching_username() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_admin_password_hash("admin").await, Ok(None));

        storage.set_admin("admin", "hash".into()).await.unwrap();
        assert_eq!(
            storage.get_admin_password_hash("admin").await,
            Ok(Some("hash".to_string()))
        );
        assert_eq!(storage.get_admin_password_hash("root").await, Ok(None));
    }

    #[actix_web::test]
    async fn test_teacher_lifecycle_through_trait() {
        let storage = MemoryStorage::new();
        storage
            .create_teacher("guru", "Guru", "hash".into(), "Python")
            .await
            .unwrap();
        assert_eq!(storage.count_teachers().await, Ok(1));

        let err = storage
            .create_teacher("guru9", "Other", "hash".into(), "Python")
            .await
            .unwrap_err();
        assert!(matches!(err, SGSError::CourseAlreadyAssigned(_)));

        assert_eq!(storage.delete_teacher("guru").await, Ok(true));
        assert_eq!(storage.delete_teacher("guru").await, Ok(false));
        assert_eq!(storage.get_teacher_by_id("guru").await, Ok(None));
    }
}
