//! 随机数据填充
//!
//! 生成与写入分离：`Seeder` 只负责用随机数生成一套引用自洽的数据，
//! 写入由 `Storage::replace_all` 在单个事务中完成。

mod names;

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SeedConfig;
use crate::errors::{Result, UniversityError};
use crate::storage::Storage;
use names::{ACADEMIC_SUBJECTS, FIRST_NAMES, LAST_NAMES};

#[derive(Debug, Clone, PartialEq)]
pub struct SeedTeacher {
    pub name: String,
    pub email: String,
}

/// `teacher` 为 teachers 中的下标
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSubject {
    pub name: String,
    pub teacher: usize,
}

/// `group` 为 groups 中的下标
#[derive(Debug, Clone, PartialEq)]
pub struct SeedStudent {
    pub name: String,
    pub email: String,
    pub group: usize,
}

/// `student`、`subject` 为对应列表中的下标
#[derive(Debug, Clone, PartialEq)]
pub struct SeedGrade {
    pub student: usize,
    pub subject: usize,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

/// 一整套待写入的数据，实体之间用下标引用
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedDataset {
    pub groups: Vec<String>,
    pub teachers: Vec<SeedTeacher>,
    pub subjects: Vec<SeedSubject>,
    pub students: Vec<SeedStudent>,
    pub grades: Vec<SeedGrade>,
}

impl SeedDataset {
    /// 检查所有下标引用都在范围内
    pub fn validate(&self) -> Result<()> {
        if let Some(subject) = self.subjects.iter().find(|s| s.teacher >= self.teachers.len()) {
            return Err(UniversityError::seeding(format!(
                "Subject '{}' references missing teacher #{}",
                subject.name, subject.teacher
            )));
        }
        if let Some(student) = self.students.iter().find(|s| s.group >= self.groups.len()) {
            return Err(UniversityError::seeding(format!(
                "Student '{}' references missing group #{}",
                student.name, student.group
            )));
        }
        if self
            .grades
            .iter()
            .any(|g| g.student >= self.students.len() || g.subject >= self.subjects.len())
        {
            return Err(UniversityError::seeding(
                "Grade references a missing student or subject",
            ));
        }
        Ok(())
    }
}

/// 写入结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub groups: usize,
    pub teachers: usize,
    pub subjects: usize,
    pub students: usize,
    pub grades: usize,
}

pub struct Seeder<R: Rng = StdRng> {
    config: SeedConfig,
    rng: R,
}

impl Seeder<StdRng> {
    pub fn new(config: SeedConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// 固定随机种子，结果可复现
    pub fn with_seed(config: SeedConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Seeder<R> {
    pub fn with_rng(config: SeedConfig, rng: R) -> Self {
        Self { config, rng }
    }

    fn check_config(&self) -> Result<()> {
        let c = &self.config;
        let ranges = [
            ("teachers", c.teachers_min, c.teachers_max),
            ("subjects", c.subjects_min, c.subjects_max),
            ("students", c.students_min, c.students_max),
            ("grades", c.grades_min, c.grades_max),
        ];
        for (label, min, max) in ranges {
            if min > max {
                return Err(UniversityError::seeding(format!(
                    "{label} range is empty: {min} > {max}"
                )));
            }
        }
        if c.groups == 0 || c.teachers_min == 0 || c.subjects_min == 0 {
            return Err(UniversityError::seeding(
                "At least one group, teacher and subject are required",
            ));
        }
        if c.subjects_max > ACADEMIC_SUBJECTS.len() {
            return Err(UniversityError::seeding(format!(
                "At most {} subjects are available",
                ACADEMIC_SUBJECTS.len()
            )));
        }
        if c.teachers_max + c.students_max > FIRST_NAMES.len() * LAST_NAMES.len() {
            return Err(UniversityError::seeding(
                "Not enough distinct names for the requested people count",
            ));
        }
        Ok(())
    }

    /// 生成不重名的姓名，保证按姓名查询时不会出现歧义
    fn unique_names(&mut self, count: usize, taken: &mut HashSet<String>) -> Vec<String> {
        let mut names = Vec::with_capacity(count);
        while names.len() < count {
            let first = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())];
            let name = format!("{first} {last}");
            if taken.insert(name.clone()) {
                names.push(name);
            }
        }
        names
    }

    fn email_for(name: &str, serial: usize, domain: &str) -> String {
        let local = name.to_lowercase().replace(' ', ".");
        format!("{local}.{serial}@{domain}")
    }

    /// 生成一套完整数据
    pub fn generate(&mut self) -> Result<SeedDataset> {
        self.check_config()?;
        let now = Utc::now();

        let groups: Vec<String> = (1..=self.config.groups)
            .map(|idx| format!("Group {idx}"))
            .collect();

        let teacher_count = self
            .rng
            .random_range(self.config.teachers_min..=self.config.teachers_max);
        let mut teacher_names = HashSet::new();
        let teachers: Vec<SeedTeacher> = self
            .unique_names(teacher_count, &mut teacher_names)
            .into_iter()
            .enumerate()
            .map(|(idx, name)| SeedTeacher {
                email: Self::email_for(&name, idx + 1, "faculty.example.edu"),
                name,
            })
            .collect();

        let subject_count = self
            .rng
            .random_range(self.config.subjects_min..=self.config.subjects_max);
        let mut pool = ACADEMIC_SUBJECTS.to_vec();
        pool.shuffle(&mut self.rng);
        let subjects: Vec<SeedSubject> = pool
            .into_iter()
            .take(subject_count)
            .map(|name| SeedSubject {
                name: name.to_string(),
                teacher: self.rng.random_range(0..teachers.len()),
            })
            .collect();

        let student_count = self
            .rng
            .random_range(self.config.students_min..=self.config.students_max);
        let mut student_names = HashSet::new();
        let students: Vec<SeedStudent> = self
            .unique_names(student_count, &mut student_names)
            .into_iter()
            .enumerate()
            .map(|(idx, name)| SeedStudent {
                email: Self::email_for(&name, idx + 1, "students.example.edu"),
                group: self.rng.random_range(0..groups.len()),
                name,
            })
            .collect();

        let mut grades = Vec::new();
        for student in 0..students.len() {
            let count = self
                .rng
                .random_range(self.config.grades_min..=self.config.grades_max);
            for _ in 0..count {
                let seconds_ago = self.rng.random_range(0..=365 * 24 * 3600_i64);
                grades.push(SeedGrade {
                    student,
                    subject: self.rng.random_range(0..subjects.len()),
                    score: f64::from(self.rng.random_range(1..=100_u8)),
                    created_at: now - Duration::seconds(seconds_ago),
                });
            }
        }

        debug!(
            "Generated dataset: {} groups, {} teachers, {} subjects, {} students, {} grades",
            groups.len(),
            teachers.len(),
            subjects.len(),
            students.len(),
            grades.len()
        );

        Ok(SeedDataset {
            groups,
            teachers,
            subjects,
            students,
            grades,
        })
    }

    /// 生成并写入，替换已有数据
    pub async fn populate(&mut self, storage: &dyn Storage) -> Result<SeedSummary> {
        let started = Utc::now();
        info!("Starting database seeding process...");

        let dataset = self.generate()?;
        let summary = storage.replace_all(dataset).await?;

        let elapsed = Utc::now().signed_duration_since(started);
        info!("Database seeding completed successfully");
        info!("Groups created:    {:>5}", summary.groups);
        info!("Teachers created:  {:>5}", summary.teachers);
        info!("Subjects created:  {:>5}", summary.subjects);
        info!("Students created:  {:>5}", summary.students);
        info!("Grades created:    {:>5}", summary.grades);
        info!("Time elapsed:      {} ms", elapsed.num_milliseconds());

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_respects_ranges() {
        let config = SeedConfig::default();
        let dataset = Seeder::with_seed(config.clone(), 42).generate().unwrap();

        assert_eq!(dataset.groups, vec!["Group 1", "Group 2", "Group 3"]);
        assert!((config.teachers_min..=config.teachers_max).contains(&dataset.teachers.len()));
        assert!((config.subjects_min..=config.subjects_max).contains(&dataset.subjects.len()));
        assert!((config.students_min..=config.students_max).contains(&dataset.students.len()));
        assert!(dataset.grades.len() >= dataset.students.len() * config.grades_min);
        assert!(dataset.grades.len() <= dataset.students.len() * config.grades_max);
        assert!(dataset.grades.iter().all(|g| (1.0..=100.0).contains(&g.score)));
        dataset.validate().unwrap();
    }

    #[test]
    fn test_generated_names_are_unique() {
        let dataset = Seeder::with_seed(SeedConfig::default(), 7).generate().unwrap();

        let students: HashSet<_> = dataset.students.iter().map(|s| &s.name).collect();
        assert_eq!(students.len(), dataset.students.len());
        let emails: HashSet<_> = dataset.students.iter().map(|s| &s.email).collect();
        assert_eq!(emails.len(), dataset.students.len());
        let subjects: HashSet<_> = dataset.subjects.iter().map(|s| &s.name).collect();
        assert_eq!(subjects.len(), dataset.subjects.len());
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let first = Seeder::with_seed(SeedConfig::default(), 99).generate().unwrap();
        let second = Seeder::with_seed(SeedConfig::default(), 99).generate().unwrap();
        assert_eq!(first.students, second.students);
        assert_eq!(first.subjects, second.subjects);
        assert_eq!(first.grades.len(), second.grades.len());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SeedConfig {
            subjects_min: 9,
            subjects_max: 11,
            ..Default::default()
        };
        let err = Seeder::with_seed(config, 1).generate().unwrap_err();
        assert!(matches!(err, UniversityError::Seeding(_)));

        let config = SeedConfig {
            students_min: 10,
            students_max: 5,
            ..Default::default()
        };
        assert!(Seeder::with_seed(config, 1).generate().is_err());
    }

    #[test]
    fn test_validate_catches_dangling_index() {
        let dataset = SeedDataset {
            groups: vec!["A".to_string()],
            students: vec![SeedStudent {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                group: 3,
            }],
            ..Default::default()
        };
        assert!(dataset.validate().is_err());
    }
}
