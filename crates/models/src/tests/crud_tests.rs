use crate::db::connect;
use crate::{customer, product, user_details};
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Setup test database with migrations; `None` when no database is reachable.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn test_customer_crud() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let email = format!("test_{}@example.com", Uuid::new_v4());
    let created = customer::create(&db, &email, "secret").await?;
    assert_eq!(created.email, email);
    assert!(!created.is_deleted);
    assert!(!created.is_verified);

    let found = customer::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|c| c.id), Some(created.id));

    let by_email = customer::find_by_email(&db, &email).await?;
    assert_eq!(by_email.map(|c| c.id), Some(created.id));

    let not_deleted = customer::find_by_deleted_status(&db, false).await?;
    assert!(not_deleted.iter().any(|c| c.id == created.id));

    assert!(customer::exists(&db, created.id).await?);
    customer::hard_delete(&db, created.id).await?;
    assert!(!customer::exists(&db, created.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_customer_create_rejects_bad_input() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    assert!(customer::create(&db, "no-at-sign", "secret").await.is_err());
    assert!(customer::create(&db, "a@b.com", "").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_user_details_upsert_and_cascade() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let email = format!("details_{}@example.com", Uuid::new_v4());
    let owner = customer::create(&db, &email, "secret").await?;

    let created = user_details::upsert_for_customer(&db, owner.id, "Ada", "Lovelace", None, None).await?;
    assert_eq!(created.customer_id, owner.id);

    // Second upsert updates in place rather than inserting a sibling row.
    let updated = user_details::upsert_for_customer(
        &db,
        owner.id,
        "Ada",
        "King",
        Some("+44 20 0000".into()),
        None,
    )
    .await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.last_name, "King");

    let rows = user_details::Entity::find()
        .filter(user_details::Column::CustomerId.eq(owner.id))
        .all(&db)
        .await?;
    assert_eq!(rows.len(), 1);

    // Deleting the owner cascades to the details row.
    customer::hard_delete(&db, owner.id).await?;
    let after = user_details::find_by_customer(&db, owner.id).await?;
    assert!(after.is_none());
    Ok(())
}

#[tokio::test]
async fn test_product_save_is_insert_or_replace() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let id = format!("sku-{}", Uuid::new_v4());
    let ingredients = vec!["flour".to_string(), "water".to_string()];
    let created = product::save(&db, &id, "Bread", 3.5, &ingredients, &["bakery".to_string()]).await?;
    assert_eq!(created.id, id);
    assert_eq!(created.name, "Bread");

    let replaced = product::save(&db, &id, "Sourdough", 4.0, &ingredients, &["bakery".to_string()]).await?;
    assert_eq!(replaced.id, id);
    assert_eq!(replaced.name, "Sourdough");

    let all = product::find_all(&db).await?;
    assert_eq!(all.iter().filter(|p| p.id == id).count(), 1);

    assert!(product::exists(&db, &id).await?);
    product::hard_delete(&db, &id).await?;
    assert!(!product::exists(&db, &id).await?);
    Ok(())
}
