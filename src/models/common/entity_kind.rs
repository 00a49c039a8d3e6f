use std::fmt;

use serde::{Deserialize, Serialize};

/// 可按名称解析的实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Group,
    Teacher,
    Subject,
    Student,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Group => "Group",
            EntityKind::Teacher => "Teacher",
            EntityKind::Subject => "Subject",
            EntityKind::Student => "Student",
        };
        write!(f, "{name}")
    }
}
