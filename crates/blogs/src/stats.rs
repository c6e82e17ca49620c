use crate::prelude::{println, *};
use crate::store::Store;
use blogs_core::list_helper::{summarize, Summary};
use prettytable::row;

#[derive(Debug, clap::Args)]
pub struct StatsOptions {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(options: StatsOptions, global: crate::Global) -> Result<()> {
    let store = Store::open(&global.database)
        .map_err(|e| eyre!("Failed to open {}: {e}", global.database.display()))?;
    let blogs = store
        .list_blogs()
        .map_err(|e| eyre!("Failed to load blogs: {e}"))?;

    if global.verbose {
        println!("Loaded {} blogs from {}", blogs.len(), global.database.display());
        println!();
    }

    let summary = summarize(&blogs);

    if options.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{json}");
        return Ok(());
    }

    summary_table(&summary).printstd();

    Ok(())
}

/// Render a summary as a two-column table; empty results show as "-"
fn summary_table(summary: &Summary) -> prettytable::Table {
    let mut table = new_table();

    table.add_row(row!["Total likes", summary.total_likes]);

    let favorite = summary
        .favorite_blog
        .as_ref()
        .map(|b| {
            let title = b.title.as_deref().or(b.url.as_deref()).unwrap_or_default();
            format!("{title} by {} ({} likes)", b.author, b.likes)
        })
        .unwrap_or_else(|| "-".to_string());
    table.add_row(row!["Favorite blog", favorite]);

    let most_blogs = summary
        .most_blogs
        .as_ref()
        .map(|a| format!("{} ({} blogs)", a.author, a.blogs))
        .unwrap_or_else(|| "-".to_string());
    table.add_row(row!["Most blogs", most_blogs]);

    let most_likes = summary
        .most_likes
        .as_ref()
        .map(|a| format!("{} ({} likes)", a.author, a.likes))
        .unwrap_or_else(|| "-".to_string());
    table.add_row(row!["Most likes", most_likes]);

    table
}
