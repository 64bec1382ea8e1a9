use crate::entities::{
    SelectionKey, betting_ticket_entity as betting_tickets, race_entity as races,
    user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

/// 券種の最大長 (カラム長)
const MAX_BET_TYPE_LEN: usize = 32;

#[derive(Clone)]
pub struct BettingTicketService {
    pool: DatabaseConnection,
}

impl BettingTicketService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// ユーザーがそのレースで買った投票券
    pub async fn list_tickets(
        &self,
        user_id: Uuid,
        race_id: &str,
    ) -> AppResult<BettingTicketListResponse> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let Ok(race_id) = Uuid::parse_str(race_id) else {
            return Ok(BettingTicketListResponse {
                betting_tickets: Vec::new(),
            });
        };

        let list = betting_tickets::Entity::find()
            .filter(betting_tickets::Column::UserId.eq(user.id))
            .filter(betting_tickets::Column::RaceId.eq(race_id))
            .order_by_asc(betting_tickets::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        Ok(BettingTicketListResponse {
            betting_tickets: list.into_iter().map(Into::into).collect(),
        })
    }

    /// 投票券を買う
    ///
    /// 流れ:
    /// 1. レースとユーザーの存在を確認
    /// 2. 残高が足りるときだけ条件付き UPDATE で引き落とす
    /// 3. 同じトランザクションで投票券を作る
    pub async fn create_ticket(
        &self,
        user_id: Uuid,
        race_id: &str,
        request: CreateBettingTicketRequest,
    ) -> AppResult<BettingTicketResponse> {
        if request.bet_type.chars().count() > MAX_BET_TYPE_LEN {
            return Err(AppError::ValidationError(format!(
                "type must be at most {MAX_BET_TYPE_LEN} characters"
            )));
        }

        let race_id = Uuid::parse_str(race_id)
            .map_err(|_| AppError::NotFound("Race not found".to_string()))?;

        let txn = self.pool.begin().await?;

        let race = races::Entity::find_by_id(race_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Race not found".to_string()))?;

        let user = users::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        // 残高チェックと引き落としを1文で行う (同時購入で残高が負にならない)
        let debit = users::Entity::update_many()
            .col_expr(
                users::Column::Balance,
                Expr::col(users::Column::Balance).sub(BETTING_TICKET_PRICE),
            )
            .filter(users::Column::Id.eq(user.id))
            .filter(users::Column::Balance.gte(BETTING_TICKET_PRICE))
            .exec(&txn)
            .await?;

        if debit.rows_affected == 0 {
            return Err(AppError::InsufficientBalance {
                balance: user.balance,
                required: BETTING_TICKET_PRICE,
            });
        }

        let ticket = betting_tickets::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.id),
            race_id: Set(race.id),
            bet_type: Set(request.bet_type),
            key: Set(SelectionKey(request.key)),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        log::info!(
            "User {} bought ticket {} on race {}",
            user.id,
            ticket.id,
            race.id
        );
        Ok(ticket.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;
    use crate::database::test_pool;
    use crate::services::{SeedService, UserService};
    use chrono::FixedOffset;
    use futures_util::future::join_all;
    use sea_orm::PaginatorTrait;

    struct Fixture {
        tickets: BettingTicketService,
        users: UserService,
        race_id: String,
        pool: DatabaseConnection,
    }

    async fn fixture(initial_balance: i64) -> Fixture {
        let pool = test_pool().await;
        SeedService::new(
            pool.clone(),
            SeedConfig {
                players: 8,
                days: 1,
                races_per_day: 2,
            },
            FixedOffset::east_opt(9 * 3600).unwrap(),
        )
        .seed_catalog()
        .await
        .unwrap();
        let race = races::Entity::find().one(&pool).await.unwrap().unwrap();

        Fixture {
            tickets: BettingTicketService::new(pool.clone()),
            users: UserService::new(pool.clone(), initial_balance),
            race_id: race.id.to_string(),
            pool,
        }
    }

    fn trifecta(key: Vec<i32>) -> CreateBettingTicketRequest {
        CreateBettingTicketRequest {
            bet_type: "trifecta".to_string(),
            key,
        }
    }

    #[actix_web::test]
    async fn test_create_ticket_debits_balance() {
        let f = fixture(150).await;
        let user = f.users.get_or_create(None).await.unwrap();

        let ticket = f
            .tickets
            .create_ticket(user.id, &f.race_id, trifecta(vec![1, 2, 3]))
            .await
            .unwrap();
        assert_eq!(ticket.bet_type, "trifecta");
        assert_eq!(ticket.key, vec![1, 2, 3]);
        assert_eq!(ticket.user_id, user.id);

        assert_eq!(f.users.find_user(user.id).await.unwrap().balance, 50);
        assert_eq!(betting_tickets::Entity::find().count(&f.pool).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_insufficient_balance_leaves_state_unchanged() {
        let f = fixture(99).await;
        let user = f.users.get_or_create(None).await.unwrap();

        let err = f
            .tickets
            .create_ticket(user.id, &f.race_id, trifecta(vec![1, 2, 3]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientBalance {
                balance: 99,
                required: 100
            }
        ));

        assert_eq!(f.users.find_user(user.id).await.unwrap().balance, 99);
        assert_eq!(betting_tickets::Entity::find().count(&f.pool).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_balance_runs_out() {
        let f = fixture(250).await;
        let user = f.users.get_or_create(None).await.unwrap();

        for _ in 0..2 {
            f.tickets
                .create_ticket(user.id, &f.race_id, trifecta(vec![3, 1, 2]))
                .await
                .unwrap();
        }
        let err = f
            .tickets
            .create_ticket(user.id, &f.race_id, trifecta(vec![3, 1, 2]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InsufficientBalance { .. }));
        assert_eq!(f.users.find_user(user.id).await.unwrap().balance, 50);

        let list = f.tickets.list_tickets(user.id, &f.race_id).await.unwrap();
        assert_eq!(list.betting_tickets.len(), 2);
    }

    #[actix_web::test]
    async fn test_concurrent_bets_cannot_overdraw() {
        let f = fixture(250).await;
        let user = f.users.get_or_create(None).await.unwrap();

        let results = join_all((0..5).map(|_| {
            f.tickets
                .create_ticket(user.id, &f.race_id, trifecta(vec![1, 2, 3]))
        }))
        .await;

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 2);
        assert!(
            results
                .iter()
                .filter_map(|r| r.as_ref().err())
                .all(|e| matches!(e, AppError::InsufficientBalance { .. }))
        );
        assert_eq!(f.users.find_user(user.id).await.unwrap().balance, 50);
        assert_eq!(betting_tickets::Entity::find().count(&f.pool).await.unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_unknown_race() {
        let f = fixture(1000).await;
        let user = f.users.get_or_create(None).await.unwrap();

        for race_id in ["unknown-id".to_string(), Uuid::new_v4().to_string()] {
            let err = f
                .tickets
                .create_ticket(user.id, &race_id, trifecta(vec![1, 2, 3]))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }
        assert_eq!(f.users.find_user(user.id).await.unwrap().balance, 1000);
    }

    #[actix_web::test]
    async fn test_bet_type_too_long() {
        let f = fixture(1000).await;
        let user = f.users.get_or_create(None).await.unwrap();
        let request = CreateBettingTicketRequest {
            bet_type: "x".repeat(33),
            key: vec![1],
        };

        let err = f
            .tickets
            .create_ticket(user.id, &f.race_id, request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_list_is_scoped_to_user_and_race() {
        let f = fixture(1000).await;
        let alice = f.users.get_or_create(None).await.unwrap();
        let bob = f.users.get_or_create(None).await.unwrap();

        f.tickets
            .create_ticket(alice.id, &f.race_id, trifecta(vec![1, 2, 3]))
            .await
            .unwrap();

        let mine = f.tickets.list_tickets(alice.id, &f.race_id).await.unwrap();
        assert_eq!(mine.betting_tickets.len(), 1);
        let theirs = f.tickets.list_tickets(bob.id, &f.race_id).await.unwrap();
        assert!(theirs.betting_tickets.is_empty());
        let other_race = f
            .tickets
            .list_tickets(alice.id, &Uuid::new_v4().to_string())
            .await
            .unwrap();
        assert!(other_race.betting_tickets.is_empty());
    }
}
