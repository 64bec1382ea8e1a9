use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// 新規ユーザーのアイコン
pub const DEFAULT_USER_IMAGE: &str = "/assets/images/users/default.jpg";

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
    initial_balance: i64,
}

impl UserService {
    pub fn new(pool: DatabaseConnection, initial_balance: i64) -> Self {
        Self {
            pool,
            initial_balance,
        }
    }

    /// 現在のユーザーを返す。匿名なら新しく作る
    pub async fn get_or_create(&self, user_id: Option<Uuid>) -> AppResult<UserResponse> {
        let user = match user_id {
            Some(id) => self.find_user(id).await?,
            None => self.create_user().await?,
        };
        Ok(user.into())
    }

    pub async fn find_user(&self, user_id: Uuid) -> AppResult<users::Model> {
        users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn create_user(&self) -> AppResult<users::Model> {
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            balance: Set(self.initial_balance),
            payoff: Set(0),
            image: Set(DEFAULT_USER_IMAGE.to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created user {}", user.id);
        Ok(user)
    }

    /// ポイントをチャージする
    ///
    /// 読み出してから書き戻すと同時リクエストで加算が消えるので, 1文の UPDATE で加算する。
    /// 加算後に i64 を超える残高は更新条件で弾く。
    pub async fn charge(&self, user_id: Uuid, amount: i64) -> AppResult<()> {
        if amount <= 0 {
            return Err(AppError::ValidationError(
                "Amount must be a positive integer".to_string(),
            ));
        }

        let result = users::Entity::update_many()
            .col_expr(
                users::Column::Balance,
                Expr::col(users::Column::Balance).add(amount),
            )
            .filter(users::Column::Id.eq(user_id))
            .filter(users::Column::Balance.lte(i64::MAX - amount))
            .exec(&self.pool)
            .await?;

        if result.rows_affected == 0 {
            // ユーザーが存在するなら上限超過
            self.find_user(user_id).await?;
            return Err(AppError::ValidationError(
                "Amount exceeds the maximum balance".to_string(),
            ));
        }

        log::info!("User {user_id} charged {amount}pt");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use futures_util::future::join_all;

    #[actix_web::test]
    async fn test_create_and_find_user() {
        let service = UserService::new(test_pool().await, 500);

        let created = service.get_or_create(None).await.unwrap();
        assert_eq!(created.balance, 500);
        assert_eq!(created.payoff, 0);
        assert_eq!(created.image, "/assets/images/users/default.webp");

        let found = service.get_or_create(Some(created.id)).await.unwrap();
        assert_eq!(found.id, created.id);
    }

    #[actix_web::test]
    async fn test_unknown_user_is_not_found() {
        let service = UserService::new(test_pool().await, 0);
        let err = service.get_or_create(Some(Uuid::new_v4())).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_charge() {
        let service = UserService::new(test_pool().await, 0);
        let user = service.get_or_create(None).await.unwrap();

        service.charge(user.id, 150).await.unwrap();
        service.charge(user.id, 50).await.unwrap();
        assert_eq!(service.find_user(user.id).await.unwrap().balance, 200);
    }

    #[actix_web::test]
    async fn test_charge_rejects_non_positive_amount() {
        let service = UserService::new(test_pool().await, 300);
        let user = service.get_or_create(None).await.unwrap();

        for amount in [0, -1, -500] {
            let err = service.charge(user.id, amount).await.unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)));
        }
        assert_eq!(service.find_user(user.id).await.unwrap().balance, 300);
    }

    #[actix_web::test]
    async fn test_charge_rejects_balance_overflow() {
        let service = UserService::new(test_pool().await, 0);
        let user = service.get_or_create(None).await.unwrap();

        service.charge(user.id, i64::MAX).await.unwrap();
        for amount in [1, i64::MAX] {
            let err = service.charge(user.id, amount).await.unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)));
        }

        let found = service.get_or_create(Some(user.id)).await.unwrap();
        assert_eq!(found.balance, i64::MAX);
    }

    #[actix_web::test]
    async fn test_concurrent_charges_are_all_applied() {
        let service = UserService::new(test_pool().await, 0);
        let user = service.get_or_create(None).await.unwrap();

        let results = join_all((0..10).map(|_| service.charge(user.id, 10))).await;
        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(service.find_user(user.id).await.unwrap().balance, 100);
    }

    #[actix_web::test]
    async fn test_charge_unknown_user() {
        let service = UserService::new(test_pool().await, 0);
        let err = service.charge(Uuid::new_v4(), 100).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
