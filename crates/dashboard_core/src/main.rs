use anyhow::Context;
use contracts::shared::list_query::FilterCriteria;
use dashboard_core::list::ListQuery;
use dashboard_core::shared::config::load_config;
use dashboard_core::shared::data::{JsonFileSource, RecordSource};
use dashboard_core::shared::logger::init_tracing;

const USAGE: &str = "usage: dashboard_preview <screen-id> <records.json> [search text] [page]";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (Some(screen_id), Some(records_path)) = (args.first(), args.get(1)) else {
        anyhow::bail!(USAGE);
    };
    let search = args.get(2).cloned().unwrap_or_default();
    let page_number = match args.get(3) {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("page must be a number, got `{}`", raw))?,
        None => 1,
    };

    let config = load_config()?;
    let Some(schema) = config.screen(screen_id) else {
        let known: Vec<&str> = config.screen_ids().collect();
        anyhow::bail!("unknown screen `{}` (known: {})", screen_id, known.join(", "));
    };

    let records = JsonFileSource::new(records_path).load_records()?;

    let mut request = ListQuery::new(FilterCriteria::default().with_search(search));
    request.page_number = page_number;
    let page = request.run(&records, &schema)?;

    tracing::info!(
        "{}: page {}/{} ({} matching)",
        schema.id,
        page.page_number,
        page.total_pages,
        page.total_matching
    );
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
