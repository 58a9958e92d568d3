//! Create `product` table with FK to `company`.
//!
//! Deleting a company that still owns products is rejected (`RESTRICT`).
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Product::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Product::Name).string_len(28).null())
                    .col(ColumnDef::new(Product::Stock).integer().null())
                    .col(ColumnDef::new(Product::Prize).double().null())
                    .col(ColumnDef::new(Product::Company).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_company")
                            .from(Product::Table, Product::Company)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product { Table, Id, Name, Stock, Prize, Company }

#[derive(DeriveIden)]
enum Company { Table, Id }
