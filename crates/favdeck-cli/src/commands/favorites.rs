use crate::commands::{print_json, Context};
use crate::error::not_found;
use crate::util::{format_timestamp_datetime, parse_contact_id};
use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use favdeck_core::domain::ContactSnapshot;
use favdeck_core::dto::FavoriteListItemDto;

#[derive(Debug, Subcommand)]
pub enum FavoriteCommand {
    Add(FavoriteIdArgs),
    Rm(FavoriteIdArgs),
    Toggle(FavoriteIdArgs),
    Ls(FavoriteListArgs),
}

#[derive(Debug, Args)]
pub struct FavoriteIdArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct FavoriteListArgs {}

pub fn add_favorite(ctx: &Context<'_>, args: FavoriteIdArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    let contact = ctx
        .resolve_contact(&id)
        .ok_or_else(|| not_found("contact not found"))?;

    let favorites = ctx.store.favorites();
    favorites.add(id.clone(), ContactSnapshot::from(&contact));
    let record = favorites
        .get(&id)
        .ok_or_else(|| anyhow!("favorite for {} was not saved", id))?;

    if ctx.json {
        print_json(&FavoriteListItemDto::from(&record))?;
    } else {
        println!("favorited {} {}", id, contact.display_name());
    }
    Ok(())
}

pub fn remove_favorite(ctx: &Context<'_>, args: FavoriteIdArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    ctx.store.favorites().remove(&id);

    if ctx.json {
        print_json(&serde_json::json!({ "id": id, "favorite": false }))?;
    } else {
        println!("removed {} from favorites", id);
    }
    Ok(())
}

pub fn toggle_favorite(ctx: &Context<'_>, args: FavoriteIdArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    let contact = ctx
        .resolve_contact(&id)
        .ok_or_else(|| not_found("contact not found"))?;
    let favorite = ctx.store.favorites().toggle(&contact);

    if ctx.json {
        print_json(&serde_json::json!({ "id": id, "favorite": favorite }))?;
    } else if favorite {
        println!("favorited {} {}", id, contact.display_name());
    } else {
        println!("removed {} from favorites", id);
    }
    Ok(())
}

pub fn list_favorites(ctx: &Context<'_>, _args: FavoriteListArgs) -> Result<()> {
    let items: Vec<FavoriteListItemDto> = ctx
        .store
        .favorites()
        .list()
        .iter()
        .map(FavoriteListItemDto::from)
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("no favorites");
        return Ok(());
    }

    for item in items {
        println!(
            "{}  {}  {}  {}",
            item.user_id,
            item.display_name,
            item.email,
            format_timestamp_datetime(item.favorited_at)
        );
    }
    Ok(())
}
