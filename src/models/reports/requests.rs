use serde::Deserialize;

// 报表查询参数，按需出现
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectQuery {
    pub subject: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeacherQuery {
    pub teacher: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupQuery {
    pub group: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentQuery {
    pub student: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupSubjectQuery {
    pub group: String,
    pub subject: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentTeacherQuery {
    pub student: String,
    pub teacher: String,
}
