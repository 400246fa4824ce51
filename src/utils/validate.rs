use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SGSError;
use crate::models::NumberInput;

static RECORD_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,32}$").expect("Invalid record id regex"));

const MAX_NAME_LEN: usize = 64;
const MAX_PASSWORD_LEN: usize = 128;

/// 学生与教师 ID：1 到 32 个字母、数字、下划线或连字符
pub fn validate_record_id(id: &str) -> Result<(), &'static str> {
    if !RECORD_ID_RE.is_match(id) {
        return Err("ID must be 1-32 letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name cannot be empty");
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err("Name must be at most 64 characters");
    }
    Ok(())
}

pub fn validate_course_name(course: &str) -> Result<(), &'static str> {
    let course = course.trim();
    if course.is_empty() {
        return Err("Course name cannot be empty");
    }
    if course.chars().count() > MAX_NAME_LEN {
        return Err("Course name must be at most 64 characters");
    }
    Ok(())
}

/// 教师密码：非空白，长度不超过 128
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.trim().is_empty() {
        return Err("Password cannot be empty");
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err("Password must be at most 128 characters");
    }
    Ok(())
}

/// 解析年龄：必须是正整数
pub fn parse_age(input: &NumberInput) -> Result<u32, SGSError> {
    let age = input
        .as_integer()
        .ok_or_else(|| SGSError::validation("Invalid age, please try again"))?;
    if age <= 0 {
        return Err(SGSError::validation("Age is not valid"));
    }
    u32::try_from(age).map_err(|_| SGSError::validation("Age is not valid"))
}

/// 解析成绩：必须是 [0, 100] 之间的数字
pub fn parse_grade(input: &NumberInput) -> Result<f64, SGSError> {
    let grade = input
        .as_float()
        .ok_or_else(|| SGSError::validation("Invalid grade, try again"))?;
    if !(0.0..=100.0).contains(&grade) {
        return Err(SGSError::validation("Grade must be between 0 and 100"));
    }
    Ok(grade)
}
