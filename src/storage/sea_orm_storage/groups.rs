//! 班组存储操作

use super::resolve::find_unique_by_name;
use super::{SeaOrmStorage, db_error};
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::errors::Result;
use crate::models::{EntityKind, groups::entities::Group};
use crate::utils::validate::normalize_name;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班组
    pub async fn create_group_impl(&self, name: &str) -> Result<Group> {
        let name = normalize_name(EntityKind::Group, name)?;

        let model = ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建班组失败"))?;

        Ok(result.into_group())
    }

    /// 通过名称获取班组
    pub async fn get_group_by_name_impl(&self, name: &str) -> Result<Option<Group>> {
        let model =
            find_unique_by_name::<Groups, _>(&self.db, EntityKind::Group, Column::Name, name)
                .await?;

        Ok(model.map(|m| m.into_group()))
    }

    /// 列出全部班组
    pub async fn list_groups_impl(&self) -> Result<Vec<Group>> {
        let groups = Groups::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询班组列表失败"))?;

        Ok(groups.into_iter().map(|m| m.into_group()).collect())
    }
}
