use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Customer: the status lookups filter on these flags
        manager
            .create_index(
                Index::create()
                    .name("idx_customer_is_deleted")
                    .table(Customer::Table)
                    .col(Customer::IsDeleted)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_customer_is_verified")
                    .table(Customer::Table)
                    .col(Customer::IsVerified)
                    .to_owned(),
            )
            .await?;

        // Product: name lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_product_name")
                    .table(Product::Table)
                    .col(Product::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_customer_is_deleted").table(Customer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_customer_is_verified").table(Customer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_name").table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, IsDeleted, IsVerified }

#[derive(DeriveIden)]
enum Product { Table, Name }
