use crate::commands::{print_json, Context};
use crate::util::now_millis;
use anyhow::Result;
use clap::Args;
use favdeck_core::dto::StatsDto;
use favdeck_core::rules::{hourly_activity_local, summarize, HourBucket};

const BAR_WIDTH: u32 = 30;

#[derive(Debug, Args)]
pub struct StatsArgs {}

pub fn stats(ctx: &Context<'_>, _args: StatsArgs) -> Result<()> {
    let records = ctx.store.favorites().list();
    let buckets = hourly_activity_local(&records, now_millis());
    let summary = summarize(records.len(), &buckets);

    if ctx.json {
        return print_json(&StatsDto { buckets, summary });
    }

    println!("Total favorites: {}", summary.total_favorites);
    println!("Last 6 hours:    {}", summary.recent_activity);
    if summary.total_favorites > 0 {
        println!("Avg/week:        {}", summary.average_per_week);
        println!("Peak hour:       {}", summary.peak_hour_count);
    }
    println!();
    for line in render_chart(&buckets, summary.peak_hour_count) {
        println!("{}", line);
    }
    Ok(())
}

fn render_chart(buckets: &[HourBucket], peak: u32) -> Vec<String> {
    buckets
        .iter()
        .map(|bucket| {
            let width = if peak == 0 {
                0
            } else {
                (bucket.count * BAR_WIDTH).div_ceil(peak)
            };
            format!(
                "{} | {}{}",
                bucket.hour,
                "#".repeat(width as usize),
                if bucket.count > 0 {
                    format!(" {}", bucket.count)
                } else {
                    String::new()
                }
            )
        })
        .collect()
}
