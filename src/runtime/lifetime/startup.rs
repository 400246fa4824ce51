use crate::config::{AdminConfig, AppConfig, SeedConfig};
use crate::errors::Result;
use crate::models::NumberInput;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_random_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 演示数据：教师 ID 与其负责的课程
const DEMO_TEACHERS: [(&str, &str, &str); 6] = [
    ("guru", "Guru", "Python"),
    ("guru1", "Guru One", "Data Science with Python"),
    ("guru2", "Guru Two", "Machine Learning"),
    ("guru3", "Guru Three", "Deep Learning with TensorFlow"),
    ("guru4", "Guru Four", "Advanced Python"),
    ("guru5", "Guru Five", "NLP"),
];

/// 演示数据：学生及其课程成绩
const DEMO_STUDENTS: [(&str, &str, u32, [(&str, f64); 2]); 3] = [
    (
        "101",
        "Harry",
        20,
        [("Python", 90.0), ("Data Science with Python", 89.0)],
    ),
    (
        "102",
        "Ron",
        21,
        [("Machine Learning", 78.0), ("Deep Learning with TensorFlow", 78.0)],
    ),
    ("103", "Hermoine", 22, [("Advanced Python", 98.0), ("NLP", 87.0)]),
];

/// 安装管理员账号
/// 未配置密码时生成随机密码并输出到日志
pub async fn seed_admin(storage: &dyn Storage, admin: &AdminConfig) -> Result<()> {
    let password = if admin.password.is_empty() {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated password for '{}': {}", admin.username, pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    } else {
        admin.password.clone()
    };

    storage
        .set_admin(&admin.username, hash_password(&password)?)
        .await?;
    info!("Admin account '{}' installed", admin.username);
    Ok(())
}

/// 加载演示名册（教师、课程、学生与成绩）
/// 已有教师时跳过
pub async fn seed_demo_roster(storage: &dyn Storage, seed: &SeedConfig) -> Result<()> {
    if !seed.demo_data {
        debug!("Demo roster disabled, starting with an empty gradebook");
        return Ok(());
    }
    let count = storage.count_teachers().await?;
    if count > 0 {
        debug!("Gradebook already has {} teacher(s), skipping demo roster", count);
        return Ok(());
    }

    // 所有演示教师共用同一个密码
    let password_hash = hash_password(&seed.teacher_password)?;
    for (id, name, course) in DEMO_TEACHERS {
        storage
            .create_teacher(id, name, password_hash.clone(), course)
            .await?;
    }

    for (id, name, age, grades) in DEMO_STUDENTS {
        storage
            .create_student(id, name, &NumberInput::from(f64::from(age)))
            .await?;
        for (course, grade) in grades {
            storage.assign_course_to_student(id, course).await?;
            let owner = DEMO_TEACHERS
                .iter()
                .find(|(_, _, c)| *c == course)
                .map(|(teacher_id, _, _)| *teacher_id)
                .unwrap_or_default();
            storage
                .assign_grade(owner, id, course, &NumberInput::from(grade))
                .await?;
        }
    }

    info!(
        "Demo roster loaded: {} teachers, {} students",
        DEMO_TEACHERS.len(),
        DEMO_STUDENTS.len()
    );
    Ok(())
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("In-memory gradebook initialized");

    seed_admin(storage.as_ref(), &config.admin).await?;
    seed_demo_roster(storage.as_ref(), &config.seed).await?;

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;

    #[actix_web::test]
    async fn test_demo_roster_matches_catalog() {
        let storage = MemoryStorage::new();
        seed_demo_roster(&storage, &SeedConfig::default())
            .await
            .unwrap();

        assert_eq!(storage.count_teachers().await.unwrap(), 6);
        let courses = storage.list_courses().await.unwrap();
        assert_eq!(courses.len(), 6);
        assert!(courses.iter().all(|c| c.teacher_id.is_some()));

        let harry = storage.get_student_by_id("101").await.unwrap().unwrap();
        assert_eq!(harry.average_grade(), Some(89.5));

        // 再次加载不会重复
        seed_demo_roster(&storage, &SeedConfig::default())
            .await
            .unwrap();
        assert_eq!(storage.list_students().await.unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_demo_roster_can_be_disabled() {
        let storage = MemoryStorage::new();
        let seed = SeedConfig {
            demo_data: false,
            ..SeedConfig::default()
        };
        seed_demo_roster(&storage, &seed).await.unwrap();
        assert_eq!(storage.count_teachers().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_seed_admin_installs_configured_password() {
        let storage = MemoryStorage::new();
        let admin = AdminConfig {
            username: "admin".into(),
            password: "s3cret".into(),
        };
        seed_admin(&storage, &admin).await.unwrap();
        let hash = storage.get_admin_password_hash("admin").await.unwrap().unwrap();
        assert!(crate::utils::password::verify_password("s3cret", &hash));
    }
}
