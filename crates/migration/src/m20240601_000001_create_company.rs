//! Create `company` table.
//!
//! Parent entity; `product.company` references it. `cif` and `login` are unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Company::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Company::Cif, 9).unique_key().not_null())
                    .col(string_len(Company::Name, 28).not_null())
                    .col(ColumnDef::new(Company::Telephone).string_len(9).null())
                    .col(ColumnDef::new(Company::Email).string_len(50).null())
                    .col(ColumnDef::new(Company::Direction).string_len(100).null())
                    .col(string_len(Company::Login, 20).unique_key().not_null())
                    .col(string_len(Company::Password, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
    Cif,
    Name,
    Telephone,
    Email,
    Direction,
    Login,
    Password,
}
