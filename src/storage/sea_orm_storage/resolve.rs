//! 名称到ID的解析
//!
//! 报表在连接条件中只使用ID列，名称先在同一会话内解析。

use super::db_error;
use crate::entity::{groups, students, subjects, teachers};
use crate::errors::{Result, UniversityError};
use crate::models::EntityKind;
use crate::utils::validate::normalize_name;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

/// 按名称查找唯一记录，最多取两条以区分唯一匹配与重名
///
/// 无匹配返回 `None`，多条匹配返回 Ambiguous。
pub(crate) async fn find_unique_by_name<E, C>(
    conn: &C,
    kind: EntityKind,
    column: E::Column,
    name: &str,
) -> Result<Option<E::Model>>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let name = normalize_name(kind, name)?;

    let mut matches = E::find()
        .filter(column.eq(name))
        .limit(2)
        .all(conn)
        .await
        .map_err(db_error("按名称查询失败"))?;

    if matches.len() > 1 {
        return Err(UniversityError::ambiguous(format!(
            "{kind} name '{name}' matches more than one record"
        )));
    }

    Ok(matches.pop())
}

/// 解析名称为ID，未找到时返回 NotFound
pub(crate) async fn resolve_id_on<C: ConnectionTrait>(
    conn: &C,
    kind: EntityKind,
    name: &str,
) -> Result<i64> {
    let id = match kind {
        EntityKind::Group => {
            find_unique_by_name::<groups::Entity, _>(conn, kind, groups::Column::Name, name)
                .await?
                .map(|m| m.id)
        }
        EntityKind::Teacher => {
            find_unique_by_name::<teachers::Entity, _>(conn, kind, teachers::Column::Name, name)
                .await?
                .map(|m| m.id)
        }
        EntityKind::Subject => {
            find_unique_by_name::<subjects::Entity, _>(conn, kind, subjects::Column::Name, name)
                .await?
                .map(|m| m.id)
        }
        EntityKind::Student => {
            find_unique_by_name::<students::Entity, _>(conn, kind, students::Column::Name, name)
                .await?
                .map(|m| m.id)
        }
    };

    id.ok_or_else(|| UniversityError::not_found(format!("{kind} '{}' not found", name.trim())))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::errors::UniversityError;
    use crate::models::EntityKind;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::teachers::requests::CreateTeacherRequest;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_resolve_round_trip() {
        let storage = memory_storage().await;
        let group = storage.create_group("Group 1").await.unwrap();
        let teacher = storage
            .create_teacher(CreateTeacherRequest {
                name: "Ada Smith".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            storage.resolve_id(EntityKind::Group, "Group 1").await.unwrap(),
            group.id
        );
        assert_eq!(
            storage
                .resolve_id(EntityKind::Teacher, "  Ada Smith ")
                .await
                .unwrap(),
            teacher.id
        );
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let storage = memory_storage().await;
        let err = storage
            .resolve_id(EntityKind::Subject, "Alchemy")
            .await
            .unwrap_err();
        assert!(matches!(err, UniversityError::NotFound(_)));
        assert!(err.message().contains("Alchemy"));
    }

    #[tokio::test]
    async fn test_resolve_ambiguous() {
        let storage = memory_storage().await;
        let group = storage.create_group("A").await.unwrap();
        for email in ["j1@example.com", "j2@example.com"] {
            storage
                .create_student(CreateStudentRequest {
                    name: "John Doe".to_string(),
                    email: email.to_string(),
                    group_id: group.id,
                })
                .await
                .unwrap();
        }

        let err = storage
            .resolve_id(EntityKind::Student, "John Doe")
            .await
            .unwrap_err();
        assert!(matches!(err, UniversityError::Ambiguous(_)));

        let err = storage.get_student_by_name("John Doe").await.unwrap_err();
        assert!(matches!(err, UniversityError::Ambiguous(_)));
    }

    #[tokio::test]
    async fn test_resolve_rejects_blank_name() {
        let storage = memory_storage().await;
        let err = storage
            .resolve_id(EntityKind::Group, "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, UniversityError::Validation(_)));
    }

    #[tokio::test]
    async fn test_lookup_agrees_with_resolve() {
        let storage = memory_storage().await;
        let teacher = storage
            .create_teacher(CreateTeacherRequest {
                name: "Grace Hill".to_string(),
                email: "grace@example.com".to_string(),
            })
            .await
            .unwrap();

        let found = storage.get_teacher_by_name(" Grace Hill").await.unwrap();
        assert_eq!(found.map(|t| t.id), Some(teacher.id));

        // 查找返回 None，解析返回 NotFound
        assert!(storage.get_teacher_by_name("Nobody").await.unwrap().is_none());
        let err = storage
            .resolve_id(EntityKind::Teacher, "Nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, UniversityError::NotFound(_)));
    }
}
