use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserPages::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserPages::UserId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserPages::BackgroundType)
                            .string()
                            .not_null()
                            .default("color"),
                    )
                    .col(ColumnDef::new(UserPages::BackgroundValue).string().null())
                    .col(ColumnDef::new(UserPages::PrimaryColor).string().null())
                    .col(ColumnDef::new(UserPages::SecondaryColor).string().null())
                    .col(ColumnDef::new(UserPages::TextColor).string().null())
                    .col(ColumnDef::new(UserPages::FontFamily).string().null())
                    .col(ColumnDef::new(UserPages::Status).string().null())
                    .col(
                        ColumnDef::new(UserPages::LayoutStacked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserPages::LayoutShowcase)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserPages::PremiumBgEffects)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserPages::PremiumNameEffect)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserPages::PremiumCursorTrail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserPages::PremiumStarryBg)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserPages::PremiumAudioVisualizer)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserPages::PremiumTiltingCard)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserPages::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserPages::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_pages_user_id")
                            .from(UserPages::Table, UserPages::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserLinks::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserLinks::UserId).string().not_null())
                    .col(ColumnDef::new(UserLinks::Title).string().not_null())
                    .col(ColumnDef::new(UserLinks::Url).string().not_null())
                    .col(ColumnDef::new(UserLinks::Icon).string().null())
                    .col(
                        ColumnDef::new(UserLinks::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserLinks::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_links_user_id")
                            .from(UserLinks::Table, UserLinks::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_links_user_id")
                    .table(UserLinks::Table)
                    .col(UserLinks::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tracks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tracks::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tracks::UserId).string().not_null())
                    .col(ColumnDef::new(Tracks::Title).string().not_null())
                    .col(ColumnDef::new(Tracks::Artist).string().null())
                    .col(ColumnDef::new(Tracks::AudioUrl).string().not_null())
                    .col(ColumnDef::new(Tracks::CoverUrl).string().null())
                    .col(ColumnDef::new(Tracks::Duration).integer().null())
                    .col(
                        ColumnDef::new(Tracks::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tracks::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracks_user_id")
                            .from(Tracks::Table, Tracks::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tracks_user_id")
                    .table(Tracks::Table)
                    .col(Tracks::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Badges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Badges::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Badges::UserId).string().not_null())
                    .col(ColumnDef::new(Badges::BadgeType).string().not_null())
                    .col(ColumnDef::new(Badges::BadgeData).text().null())
                    .col(
                        ColumnDef::new(Badges::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Badges::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_badges_user_id")
                            .from(Badges::Table, Badges::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Widgets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Widgets::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Widgets::UserId).string().not_null())
                    .col(ColumnDef::new(Widgets::WidgetType).string().not_null())
                    .col(ColumnDef::new(Widgets::WidgetData).text().null())
                    .col(
                        ColumnDef::new(Widgets::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Widgets::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_widgets_user_id")
                            .from(Widgets::Table, Widgets::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Widgets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Badges::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tracks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserLinks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserPages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum UserPages {
    Table,
    Id,
    UserId,
    BackgroundType,
    BackgroundValue,
    PrimaryColor,
    SecondaryColor,
    TextColor,
    FontFamily,
    Status,
    LayoutStacked,
    LayoutShowcase,
    PremiumBgEffects,
    PremiumNameEffect,
    PremiumCursorTrail,
    PremiumStarryBg,
    PremiumAudioVisualizer,
    PremiumTiltingCard,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserLinks {
    Table,
    Id,
    UserId,
    Title,
    Url,
    Icon,
    DisplayOrder,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tracks {
    Table,
    Id,
    UserId,
    Title,
    Artist,
    AudioUrl,
    CoverUrl,
    Duration,
    DisplayOrder,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Badges {
    Table,
    Id,
    UserId,
    BadgeType,
    BadgeData,
    DisplayOrder,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Widgets {
    Table,
    Id,
    UserId,
    WidgetType,
    WidgetData,
    DisplayOrder,
    CreatedAt,
}
