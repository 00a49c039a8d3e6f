use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UniversityError;

/// 十个固定报表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    TopStudents,
    BestStudentInSubject,
    GroupAveragesInSubject,
    OverallAverage,
    TeacherSubjects,
    GroupStudents,
    GroupSubjectGrades,
    TeacherAverage,
    StudentSubjects,
    StudentTeacherSubjects,
}

impl ReportKind {
    pub const ALL: [ReportKind; 10] = [
        ReportKind::TopStudents,
        ReportKind::BestStudentInSubject,
        ReportKind::GroupAveragesInSubject,
        ReportKind::OverallAverage,
        ReportKind::TeacherSubjects,
        ReportKind::GroupStudents,
        ReportKind::GroupSubjectGrades,
        ReportKind::TeacherAverage,
        ReportKind::StudentSubjects,
        ReportKind::StudentTeacherSubjects,
    ];

    /// 报表序号 (1-10)
    pub fn number(self) -> usize {
        match self {
            ReportKind::TopStudents => 1,
            ReportKind::BestStudentInSubject => 2,
            ReportKind::GroupAveragesInSubject => 3,
            ReportKind::OverallAverage => 4,
            ReportKind::TeacherSubjects => 5,
            ReportKind::GroupStudents => 6,
            ReportKind::GroupSubjectGrades => 7,
            ReportKind::TeacherAverage => 8,
            ReportKind::StudentSubjects => 9,
            ReportKind::StudentTeacherSubjects => 10,
        }
    }

    /// 命令行名称，例如 `select-3`
    pub fn name(self) -> String {
        format!("select-{}", self.number())
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::TopStudents => "Top 5 students by average grade",
            ReportKind::BestStudentInSubject => "Best student in a subject",
            ReportKind::GroupAveragesInSubject => "Average grade by group in a subject",
            ReportKind::OverallAverage => "Overall average grade",
            ReportKind::TeacherSubjects => "Subjects taught by a teacher",
            ReportKind::GroupStudents => "Students in a group",
            ReportKind::GroupSubjectGrades => "Grades of a group in a subject",
            ReportKind::TeacherAverage => "Average grade given by a teacher",
            ReportKind::StudentSubjects => "Subjects taken by a student",
            ReportKind::StudentTeacherSubjects => "Subjects a student takes from a teacher",
        }
    }

    /// 位置参数名称
    pub fn params(self) -> &'static [&'static str] {
        match self {
            ReportKind::TopStudents | ReportKind::OverallAverage => &[],
            ReportKind::BestStudentInSubject | ReportKind::GroupAveragesInSubject => &["subject"],
            ReportKind::TeacherSubjects | ReportKind::TeacherAverage => &["teacher"],
            ReportKind::GroupStudents => &["group"],
            ReportKind::GroupSubjectGrades => &["group", "subject"],
            ReportKind::StudentSubjects => &["student"],
            ReportKind::StudentTeacherSubjects => &["student", "teacher"],
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ReportKind {
    type Err = UniversityError;

    /// 接受 `select-3`、`select_3` 或 `3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let number = trimmed
            .strip_prefix("select-")
            .or_else(|| trimmed.strip_prefix("select_"))
            .unwrap_or(&trimmed);

        number
            .parse::<usize>()
            .ok()
            .and_then(|n| ReportKind::ALL.into_iter().find(|kind| kind.number() == n))
            .ok_or_else(|| UniversityError::validation(format!("Unknown report: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_names() {
        assert_eq!("select-1".parse::<ReportKind>().unwrap(), ReportKind::TopStudents);
        assert_eq!(
            "select_10".parse::<ReportKind>().unwrap(),
            ReportKind::StudentTeacherSubjects
        );
        assert_eq!("7".parse::<ReportKind>().unwrap(), ReportKind::GroupSubjectGrades);
        assert!("select-11".parse::<ReportKind>().is_err());
        assert!("top".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_numbers_are_unique() {
        for (idx, kind) in ReportKind::ALL.iter().enumerate() {
            assert_eq!(kind.number(), idx + 1);
            assert_eq!(kind.name().parse::<ReportKind>().unwrap(), *kind);
        }
    }
}
