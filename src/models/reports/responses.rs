use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

// 学生平均分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct StudentAverage {
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub avg_score: f64,
}

// 班组平均分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct GroupAverage {
    pub group_id: i64,
    pub group_name: String,
    pub avg_score: f64,
}

// 科目条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct SubjectItem {
    pub subject_id: i64,
    pub subject_name: String,
}

// 学生条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct StudentItem {
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
}

// 单条成绩记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub student_id: i64,
    pub student_name: String,
    pub score: f64,
    pub graded_at: chrono::DateTime<chrono::Utc>,
}

// 平均分标量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageScore {
    pub avg_score: f64,
}

/// 报表执行结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ReportOutput {
    Average(AverageScore),
    StudentAverage(StudentAverage),
    StudentAverages(Vec<StudentAverage>),
    GroupAverages(Vec<GroupAverage>),
    Subjects(Vec<SubjectItem>),
    Students(Vec<StudentItem>),
    GradeRecords(Vec<GradeRecord>),
}

impl ReportOutput {
    /// 结果行数，标量和单行均计为 1
    pub fn len(&self) -> usize {
        match self {
            ReportOutput::Average(_) | ReportOutput::StudentAverage(_) => 1,
            ReportOutput::StudentAverages(rows) => rows.len(),
            ReportOutput::GroupAverages(rows) => rows.len(),
            ReportOutput::Subjects(rows) => rows.len(),
            ReportOutput::Students(rows) => rows.len(),
            ReportOutput::GradeRecords(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 表头与按行格式化的单元格，平均分保留两位小数
    pub fn to_table(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        fn avg(v: f64) -> String {
            format!("{v:.2}")
        }

        match self {
            ReportOutput::Average(value) => (vec!["avg_score"], vec![vec![avg(value.avg_score)]]),
            ReportOutput::StudentAverage(row) => (
                vec!["student_id", "student_name", "student_email", "avg_score"],
                vec![vec![
                    row.student_id.to_string(),
                    row.student_name.clone(),
                    row.student_email.clone(),
                    avg(row.avg_score),
                ]],
            ),
            ReportOutput::StudentAverages(rows) => (
                vec!["student_id", "student_name", "student_email", "avg_score"],
                rows.iter()
                    .map(|row| {
                        vec![
                            row.student_id.to_string(),
                            row.student_name.clone(),
                            row.student_email.clone(),
                            avg(row.avg_score),
                        ]
                    })
                    .collect(),
            ),
            ReportOutput::GroupAverages(rows) => (
                vec!["group_id", "group_name", "avg_score"],
                rows.iter()
                    .map(|row| {
                        vec![
                            row.group_id.to_string(),
                            row.group_name.clone(),
                            avg(row.avg_score),
                        ]
                    })
                    .collect(),
            ),
            ReportOutput::Subjects(rows) => (
                vec!["subject_id", "subject_name"],
                rows.iter()
                    .map(|row| vec![row.subject_id.to_string(), row.subject_name.clone()])
                    .collect(),
            ),
            ReportOutput::Students(rows) => (
                vec!["student_id", "student_name", "student_email"],
                rows.iter()
                    .map(|row| {
                        vec![
                            row.student_id.to_string(),
                            row.student_name.clone(),
                            row.student_email.clone(),
                        ]
                    })
                    .collect(),
            ),
            ReportOutput::GradeRecords(rows) => (
                vec!["student_id", "student_name", "score", "graded_at"],
                rows.iter()
                    .map(|row| {
                        vec![
                            row.student_id.to_string(),
                            row.student_name.clone(),
                            row.score.to_string(),
                            row.graded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                        ]
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_output_len() {
        let scalar = ReportOutput::Average(AverageScore { avg_score: 0.0 });
        assert_eq!(scalar.len(), 1);
        assert!(!scalar.is_empty());

        let empty = ReportOutput::Students(Vec::new());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }
}
