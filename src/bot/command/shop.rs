//! Role shop paid with DreamCoins.

use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbedFooter, GuildId, Permissions, RoleId,
};

use crate::bot::command::options::Options;
use crate::bot::command::respond::{reply_embed, reply_private};
use crate::bot::command::{guild_of, require_module};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::guild_config::GuildModule;
use crate::model::shop::CreateShopItemParam;
use crate::service::shop::ShopService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("shop").description("List the roles for sale"),
        CreateCommand::new("buy")
            .description("Buy a shop item with DreamCoins")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "item_id", "Item number")
                    .required(true),
            ),
        CreateCommand::new("shop_add")
            .description("Put a role on sale")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Item name")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "price", "Price in DC$")
                    .required(true)
                    .min_int_value(1),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Role, "role", "Role granted")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "description",
                    "What the item is about",
                )
                .required(true),
            ),
    ]
}

pub async fn shop(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    require_module(db, guild_id, GuildModule::Economy).await?;

    let items = ShopService::new(db).list(guild_id.get()).await?;

    if items.is_empty() {
        return reply_embed(ctx, command, embed::base("🏪 Shop", "The shop is empty for now.")).await;
    }

    let mut embed = embed::base("🏪 Dream Club shop", "Spend your DreamCoins (DC$) here.")
        .colour(Colour::DARK_GREEN)
        .footer(CreateEmbedFooter::new("Use /buy <id> to buy an item."));

    for item in &items {
        embed = embed.field(
            format!("📦 #{} - {}", item.id, item.name),
            format!(
                "💰 **Price:** DC$ {}\n📜 {}\n🎖️ **Role:** <@&{}>",
                item.price,
                item.description.as_deref().unwrap_or("No description"),
                item.role_id
            ),
            false,
        );
    }

    reply_embed(ctx, command, embed).await
}

pub async fn buy(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    require_module(db, guild_id, GuildModule::Economy).await?;

    let item_id = i32::try_from(Options::of(command).required_integer("item_id")?)
        .map_err(|_| AppError::NotFound("Item not found.".to_string()))?;

    let purchase = ShopService::new(db)
        .buy(guild_id.get(), command.user.id.get(), item_id)
        .await?;

    let item = &purchase.item;
    let role_id = RoleId::new(item.role_id);

    tracing::info!(
        "{} bought shop item {} in guild {}",
        command.user.id,
        item.id,
        guild_id
    );

    let already_owned = command
        .member
        .as_ref()
        .is_some_and(|member| member.roles.contains(&role_id));

    let embed = if already_owned {
        embed::warning(format!(
            "Purchase made, but you already had <@&{}>. Your DC$ were spent.",
            role_id
        ))
    } else if !role_exists(ctx, guild_id, role_id).await {
        embed::warning("Purchase made, but the role no longer exists.")
    } else {
        match ctx
            .http
            .add_member_role(guild_id, command.user.id, role_id, Some("Shop purchase"))
            .await
        {
            Ok(()) => embed::success(format!(
                "You bought **{}** for DC$ {}. Balance: DC$ {}.",
                item.name, item.price, purchase.buyer.coins
            )),
            Err(e) => {
                tracing::warn!("Failed to grant shop role {}: {:?}", role_id, e);
                embed::error("Purchase made, but I could not give you the role (missing permissions).")
            }
        }
    };

    reply_embed(ctx, command, embed).await
}

async fn role_exists(ctx: &Context, guild_id: GuildId, role_id: RoleId) -> bool {
    let cached = ctx
        .cache
        .guild(guild_id)
        .map(|guild| guild.roles.contains_key(&role_id));

    match cached {
        Some(exists) => exists,
        None => match guild_id.roles(&ctx.http).await {
            Ok(roles) => roles.contains_key(&role_id),
            Err(e) => {
                tracing::warn!("Failed to fetch roles of guild {}: {:?}", guild_id, e);
                true
            }
        },
    }
}

pub async fn shop_add(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);

    let item = ShopService::new(db)
        .add(CreateShopItemParam {
            guild_id: guild_id.get(),
            role_id: options.required_role("role")?.id.get(),
            name: options.required_string("name")?.to_string(),
            price: options.required_integer("price")?,
            description: options
                .string("description")
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
        })
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!(
            "Item **#{} {}** created for DC$ {}.",
            item.id, item.name, item.price
        )),
    )
    .await
}
