//! Create `user_details` table, the owned one-to-one child of `customer`.
//! The unique FK enforces exclusive ownership; ON DELETE CASCADE removes the
//! details together with the customer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDetails::Table)
                    .if_not_exists()
                    .col(uuid(UserDetails::Id).primary_key())
                    .col(uuid(UserDetails::CustomerId).unique_key().not_null())
                    .col(string_len(UserDetails::FirstName, 128).not_null())
                    .col(string_len(UserDetails::LastName, 128).not_null())
                    .col(
                        ColumnDef::new(UserDetails::Phone)
                            .string_len(32)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserDetails::ShippingAddress)
                            .string_len(512)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(UserDetails::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(UserDetails::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_details_customer")
                            .from(UserDetails::Table, UserDetails::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserDetails {
    Table,
    Id,
    CustomerId,
    FirstName,
    LastName,
    Phone,
    ShippingAddress,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customer { Table, Id }
