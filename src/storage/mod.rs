use std::sync::Arc;

use crate::models::{
    NumberInput, courses::entities::Course, students::entities::Student,
    teachers::entities::Teacher,
};

use crate::errors::Result;

pub mod memory_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 管理员凭据
    // 设置（或替换）唯一的管理员账号
    async fn set_admin(&self, username: &str, password_hash: String) -> Result<()>;
    // 用户名匹配时返回管理员密码哈希
    async fn get_admin_password_hash(&self, username: &str) -> Result<Option<String>>;

    /// 教师管理方法
    // 创建教师并为其分配一门课程
    async fn create_teacher(
        &self,
        id: &str,
        name: &str,
        password_hash: String,
        course: &str,
    ) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: &str) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // 删除教师，同时释放其负责的课程
    async fn delete_teacher(&self, id: &str) -> Result<bool>;
    // 教师数量
    async fn count_teachers(&self) -> Result<usize>;

    /// 学生管理方法
    // 创建学生，先查重再解析年龄
    async fn create_student(&self, id: &str, name: &str, age: &NumberInput) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 删除学生
    async fn delete_student(&self, id: &str) -> Result<bool>;
    // 为学生分配课程
    async fn assign_course_to_student(&self, student_id: &str, course: &str) -> Result<Student>;
    // 教师登记成绩，成绩在学生、选课与任课检查通过后才解析
    async fn assign_grade(
        &self,
        teacher_id: &str,
        student_id: &str,
        course: &str,
        grade: &NumberInput,
    ) -> Result<Student>;

    /// 课程管理方法
    // 新增课程
    async fn create_course(&self, name: &str) -> Result<Course>;
    // 列出课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 删除课程
    async fn delete_course(&self, name: &str) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = memory_storage::MemoryStorage::new();
    Ok(Arc::new(storage))
}
