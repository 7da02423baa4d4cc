use sea_orm_migration::prelude::*;

/// Display names are unique among active users only; a soft-deleted
/// profile releases its name.
const DISPLAY_NAME_ACTIVE_INDEX: &str = r#"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_user_bios_display_name_active
    ON user_bios (display_name)
    WHERE is_deleted = false;
"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserBios::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserBios::DisplayName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserBios::StoreName).string_len(100))
                    .col(ColumnDef::new(UserBios::BioDescription).text())
                    .col(ColumnDef::new(UserBios::ProfileImage).text())
                    .col(
                        ColumnDef::new(UserBios::ShowRealName)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserBios::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserBios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_bios_user_id")
                            .from(UserBios::Table, UserBios::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(DISPLAY_NAME_ACTIVE_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_user_bios_display_name_active")
            .await?;

        manager
            .drop_table(Table::drop().table(UserBios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserBios {
    Table,
    UserId,
    DisplayName,
    StoreName,
    BioDescription,
    ProfileImage,
    ShowRealName,
    IsDeleted,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
