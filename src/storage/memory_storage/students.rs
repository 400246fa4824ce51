//! 学生存储操作

use super::Gradebook;
use crate::errors::{Result, SGSError};
use crate::models::NumberInput;
use crate::models::students::entities::{CourseGrade, Student};
use crate::utils::validate::{parse_age, parse_grade};

impl Gradebook {
    /// 创建学生
    ///
    /// 重复 ID 优先于年龄错误报告。
    pub(crate) fn create_student_impl(
        &mut self,
        id: &str,
        name: &str,
        age: &NumberInput,
    ) -> Result<Student> {
        if self.students.contains_key(id) {
            return Err(SGSError::student_already_exists("Student ID already exists"));
        }
        let age = parse_age(age)?;

        let student = Student::new(id, name, age);
        self.students.insert(id.to_string(), student.clone());
        Ok(student)
    }

    /// 为学生分配课程，新课程尚无成绩
    pub(crate) fn assign_course_to_student_impl(
        &mut self,
        student_id: &str,
        course: &str,
    ) -> Result<Student> {
        let known_course = self.courses.contains_key(course);
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| SGSError::student_not_found("Student not found!"))?;

        if !known_course {
            return Err(SGSError::course_not_found("Invalid course name!"));
        }

        if student.is_enrolled(course) {
            return Err(SGSError::course_already_enrolled(
                "Course already assigned to the student",
            ));
        }

        student.courses.push(CourseGrade {
            course: course.to_string(),
            grade: None,
        });
        Ok(student.clone())
    }

    /// 登记成绩
    ///
    /// 检查顺序：学生存在、学生已选该课、教师负责该课、成绩可解析且在范围内。
    pub(crate) fn assign_grade_impl(
        &mut self,
        teacher_id: &str,
        student_id: &str,
        course: &str,
        grade: &NumberInput,
    ) -> Result<Student> {
        let teaches = self
            .teachers
            .get(teacher_id)
            .is_some_and(|teacher| teacher.teaches(course));

        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| SGSError::student_not_found("Student not found!"))?;

        let Some(entry) = student.courses.iter_mut().find(|c| c.course == course) else {
            return Err(SGSError::course_not_enrolled(
                "Course not assigned to student",
            ));
        };

        if !teaches {
            return Err(SGSError::authorization(
                "You cannot assign a grade for this course",
            ));
        }

        entry.grade = Some(parse_grade(grade)?);
        Ok(student.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradebook() -> Gradebook {
        let mut book = Gradebook::default();
        book.create_teacher_impl("guru", "Guru", "hash".into(), "Python")
            .unwrap();
        book.create_course_impl("NLP").unwrap();
        book.create_student_impl("101", "Harry", &20.0.into()).unwrap();
        book
    }

    #[test]
    fn test_duplicate_student_rejected() {
        let mut book = gradebook();
        let err = book.create_student_impl("101", "Harry Again", &"abc".into()).unwrap_err();
        assert_eq!(err, SGSError::student_already_exists("Student ID already exists"));
        assert_eq!(book.students["101"].name, "Harry");
    }

    #[test]
    fn test_zero_age_rejected() {
        let mut book = gradebook();
        let err = book.create_student_impl("102", "Ron", &"0".into()).unwrap_err();
        assert!(matches!(err, SGSError::Validation(_)));
        assert!(!book.students.contains_key("102"));
    }

    #[test]
    fn test_assign_course_checks() {
        let mut book = gradebook();
        assert!(matches!(
            book.assign_course_to_student_impl("999", "Python"),
            Err(SGSError::StudentNotFound(_))
        ));
        assert!(matches!(
            book.assign_course_to_student_impl("101", "Quidditch"),
            Err(SGSError::CourseNotFound(_))
        ));

        let student = book.assign_course_to_student_impl("101", "Python").unwrap();
        assert_eq!(
            student.courses,
            vec![CourseGrade {
                course: "Python".into(),
                grade: None
            }]
        );
        assert!(matches!(
            book.assign_course_to_student_impl("101", "Python"),
            Err(SGSError::CourseAlreadyEnrolled(_))
        ));
    }

    #[test]
    fn test_assign_grade_happy_path() {
        let mut book = gradebook();
        book.assign_course_to_student_impl("101", "Python").unwrap();
        let student = book.assign_grade_impl("guru", "101", "Python", &92.5.into()).unwrap();
        assert_eq!(student.courses[0].grade, Some(92.5));
    }

    #[test]
    fn test_assign_grade_out_of_range_rejected() {
        let mut book = gradebook();
        book.assign_course_to_student_impl("101", "Python").unwrap();
        for grade in [-0.5, 100.01, 250.0] {
            assert!(matches!(
                book.assign_grade_impl("guru", "101", "Python", &grade.into()),
                Err(SGSError::Validation(_))
            ));
        }
        assert_eq!(book.students["101"].courses[0].grade, None);
        assert!(book.assign_grade_impl("guru", "101", "Python", &0.0.into()).is_ok());
        assert!(book.assign_grade_impl("guru", "101", "Python", &"100".into()).is_ok());
    }

    #[test]
    fn test_assign_grade_requires_enrollment_and_ownership() {
        let mut book = gradebook();
        assert!(matches!(
            book.assign_grade_impl("guru", "404", "Python", &"abc".into()),
            Err(SGSError::StudentNotFound(_))
        ));
        assert!(matches!(
            book.assign_grade_impl("guru", "101", "Python", &150.0.into()),
            Err(SGSError::CourseNotEnrolled(_))
        ));

        book.assign_course_to_student_impl("101", "NLP").unwrap();
        assert!(matches!(
            book.assign_grade_impl("guru", "101", "NLP", &150.0.into()),
            Err(SGSError::Authorization(_))
        ));
    }
}
