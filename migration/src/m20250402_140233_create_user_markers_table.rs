use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMarkers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserMarkers::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(UserMarkers::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserMarkers::Name).string_len(150).not_null())
                    .col(ColumnDef::new(UserMarkers::Description).text())
                    .col(ColumnDef::new(UserMarkers::Latitude).double().not_null())
                    .col(ColumnDef::new(UserMarkers::Longitude).double().not_null())
                    .col(ColumnDef::new(UserMarkers::Region).string_len(100).not_null())
                    .col(
                        ColumnDef::new(UserMarkers::MarkerType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserMarkers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_markers_user_id")
                            .from(UserMarkers::Table, UserMarkers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_user_markers_user_id
                ON user_markers (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMarkers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserMarkers {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Latitude,
    Longitude,
    Region,
    MarkerType,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
