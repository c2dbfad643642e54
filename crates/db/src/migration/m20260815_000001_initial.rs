//! Initial schema: users, the four ledger tables, budgets, and the
//! period_summaries cache.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::SavingsGoal)
                            .decimal_len(14, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Incomes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Incomes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Incomes::UserId).uuid().not_null())
                    .col(ColumnDef::new(Incomes::Source).string_len(120).not_null())
                    .col(
                        ColumnDef::new(Incomes::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Incomes::Date).date().not_null())
                    .col(
                        ColumnDef::new(Incomes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_incomes_user")
                            .from(Incomes::Table, Incomes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Expenses::Category)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Expenses::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::Date).date().not_null())
                    .col(
                        ColumnDef::new(Expenses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expenses_user")
                            .from(Expenses::Table, Expenses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Assets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Assets::UserId).uuid().not_null())
                    .col(ColumnDef::new(Assets::Category).string_len(120).not_null())
                    .col(ColumnDef::new(Assets::Value).decimal_len(14, 2).not_null())
                    .col(ColumnDef::new(Assets::DateAdded).date().not_null())
                    .col(
                        ColumnDef::new(Assets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_user")
                            .from(Assets::Table, Assets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Debts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Debts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Debts::UserId).uuid().not_null())
                    .col(ColumnDef::new(Debts::Category).string_len(120).not_null())
                    .col(ColumnDef::new(Debts::Amount).decimal_len(14, 2).not_null())
                    .col(ColumnDef::new(Debts::DateIncurred).date().not_null())
                    .col(
                        ColumnDef::new(Debts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_debts_user")
                            .from(Debts::Table, Debts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Budgets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Budgets::UserId).uuid().not_null())
                    .col(ColumnDef::new(Budgets::Category).string_len(120).not_null())
                    .col(
                        ColumnDef::new(Budgets::BudgetAmount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Budgets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Budgets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budgets_user")
                            .from(Budgets::Table, Budgets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PeriodSummaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PeriodSummaries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PeriodSummaries::UserId).uuid().not_null())
                    .col(ColumnDef::new(PeriodSummaries::Year).integer().not_null())
                    .col(ColumnDef::new(PeriodSummaries::Month).integer().not_null())
                    .col(
                        ColumnDef::new(PeriodSummaries::TotalIncome)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PeriodSummaries::TotalExpenses)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PeriodSummaries::RefreshedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_period_summaries_user")
                            .from(PeriodSummaries::Table, PeriodSummaries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes on user_id for the per-user list and sum queries
        manager
            .create_index(
                Index::create()
                    .name("idx_incomes_user")
                    .table(Incomes::Table)
                    .col(Incomes::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_expenses_user")
                    .table(Expenses::Table)
                    .col(Expenses::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assets_user")
                    .table(Assets::Table)
                    .col(Assets::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_debts_user")
                    .table(Debts::Table)
                    .col(Debts::UserId)
                    .to_owned(),
            )
            .await?;

        // One budget row per (user, category)
        manager
            .create_index(
                Index::create()
                    .name("idx_budgets_user_category")
                    .table(Budgets::Table)
                    .col(Budgets::UserId)
                    .col(Budgets::Category)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // One cached summary row per (user, year, month)
        manager
            .create_index(
                Index::create()
                    .name("idx_period_summaries_user_period")
                    .table(PeriodSummaries::Table)
                    .col(PeriodSummaries::UserId)
                    .col(PeriodSummaries::Year)
                    .col(PeriodSummaries::Month)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PeriodSummaries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Debts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Incomes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    SavingsGoal,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Incomes {
    Table,
    Id,
    UserId,
    Source,
    Amount,
    Date,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Expenses {
    Table,
    Id,
    UserId,
    Category,
    Amount,
    Date,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
    UserId,
    Category,
    Value,
    DateAdded,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Debts {
    Table,
    Id,
    UserId,
    Category,
    Amount,
    DateIncurred,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Budgets {
    Table,
    Id,
    UserId,
    Category,
    BudgetAmount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PeriodSummaries {
    Table,
    Id,
    UserId,
    Year,
    Month,
    TotalIncome,
    TotalExpenses,
    RefreshedAt,
}
