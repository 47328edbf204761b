use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{favorite_marker, format_timestamp_datetime, parse_contact_id};
use anyhow::{Context as _, Result};
use clap::Args;
use favdeck_config::validate_results;
use favdeck_core::domain::ContactId;
use favdeck_core::dto::{ContactDetailDto, ContactListItemDto};
use favdeck_core::filter::{filter_contacts, ContactSearch};
use favdeck_sync::{ContactSource, FileSource, RandomUserSource};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct FetchArgs {
    #[arg(long)]
    pub results: Option<u32>,
    /// Read a saved API response instead of calling the remote source
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, short)]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Serialize)]
struct FetchOutput {
    source: String,
    count: usize,
    skipped: usize,
    warnings: Vec<String>,
    contacts: Vec<ContactListItemDto>,
}

pub fn fetch(ctx: &Context<'_>, args: FetchArgs) -> Result<()> {
    let source: Box<dyn ContactSource> = match args.from_file {
        Some(path) => Box::new(FileSource::new(path)),
        None => {
            let results = match args.results {
                Some(value) => {
                    validate_results(value).map_err(|err| invalid_input(err.to_string()))?
                }
                None => ctx.config.source.results,
            };
            Box::new(RandomUserSource::new(
                ctx.config.source.url.clone(),
                results,
                ctx.config.source.user_agent.clone(),
            ))
        }
    };

    debug!(source = source.source_name(), "fetching contacts");
    let report = source
        .fetch_contacts()
        .with_context(|| format!("fetch contacts from {}", source.source_name()))?;
    ctx.store
        .contact_cache()
        .save_batch(&report.contacts)
        .with_context(|| "cache fetched contacts")?;

    let favorite_ids = favorite_ids(ctx);
    let items: Vec<ContactListItemDto> = report
        .contacts
        .iter()
        .map(|contact| {
            ContactListItemDto::from_contact(contact, favorite_ids.contains(&contact.id))
        })
        .collect();

    if ctx.json {
        return print_json(&FetchOutput {
            source: source.source_name().to_string(),
            count: items.len(),
            skipped: report.skipped,
            warnings: report.warnings,
            contacts: items,
        });
    }

    println!(
        "Fetched {} contacts from {} (skipped {})",
        items.len(),
        source.source_name(),
        report.skipped
    );
    print_contact_lines(&items);
    if !report.warnings.is_empty() {
        println!("Warnings:");
        for warning in report.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let contacts = ctx.store.contact_cache().load_batch();
    let search = ContactSearch::new(args.search.as_deref().unwrap_or(""));
    let favorite_ids = favorite_ids(ctx);
    let items: Vec<ContactListItemDto> = filter_contacts(&contacts, &search)
        .into_iter()
        .map(|contact| {
            ContactListItemDto::from_contact(contact, favorite_ids.contains(&contact.id))
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    if contacts.is_empty() {
        println!("no contacts cached; run `favdeck fetch`");
        return Ok(());
    }
    if items.is_empty() {
        println!("no contacts match");
        return Ok(());
    }
    print_contact_lines(&items);
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    let contact = ctx
        .resolve_contact(&id)
        .ok_or_else(|| not_found("contact not found"))?;
    let favorite = ctx.store.favorites().get(&id);

    let detail = ContactDetailDto {
        display_name: contact.display_name(),
        favorite: favorite.is_some(),
        favorited_at: favorite.map(|record| record.timestamp),
        contact,
    };

    if ctx.json {
        return print_json(&detail);
    }

    let contact = &detail.contact;
    println!("{} {}", favorite_marker(detail.favorite), detail.display_name);
    println!("id: {}", contact.id);
    println!("email: {}", contact.email);
    println!("phone: {}", contact.phone);
    if let Some(dob) = &contact.dob {
        println!("age: {}", dob.age);
    }
    if let Some(location) = &contact.location {
        println!(
            "address: {} {}, {}, {} {}, {}",
            location.street.number,
            location.street.name,
            location.city,
            location.state,
            location.postcode,
            location.country
        );
        println!("timezone: {}", location.timezone.description);
    }
    println!("picture: {}", contact.picture.large);
    if let Some(at) = detail.favorited_at {
        println!("favorited: {}", format_timestamp_datetime(at));
    }
    Ok(())
}

fn favorite_ids(ctx: &Context<'_>) -> HashSet<ContactId> {
    ctx.store
        .favorites()
        .list()
        .into_iter()
        .map(|record| record.user_id)
        .collect()
}

fn print_contact_lines(items: &[ContactListItemDto]) {
    for item in items {
        println!(
            "{} {}  {}  {}  {}",
            favorite_marker(item.favorite),
            item.id,
            item.display_name,
            item.email,
            item.phone
        );
    }
}
