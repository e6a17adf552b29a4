//! Event log listing.

use anyhow::{Context as _, Result};

use home_core::format::display_date;

use super::EventsArgs;
use crate::context::Context;

/// Run the events command.
pub async fn run(args: EventsArgs, ctx: &Context) -> Result<()> {
    let log = ctx.event_log();
    let mut events = log.events().context("Failed to read event log")?;

    if let Some(name) = &args.name {
        events.retain(|e| &e.name == name);
    }
    if let Some(limit) = args.limit {
        let skip = events.len().saturating_sub(limit);
        events.drain(..skip);
    }

    if ctx.output.is_json() {
        ctx.output.json(&events);
        return Ok(());
    }

    ctx.output.header(&format!("Events in {}", log.slot()));
    if events.is_empty() {
        ctx.output.info("No events recorded.");
        return Ok(());
    }

    let widths = [20, 20, 40];
    ctx.output.table_row(&["DATE", "EVENT", "DETAIL"], &widths);
    for event in &events {
        let date = event
            .timestamp()
            .and_then(display_date)
            .unwrap_or_else(|| "-".to_string());
        let detail = ["product", "category", "email"]
            .iter()
            .find_map(|key| event.data.get_str(key))
            .unwrap_or("");
        ctx.output.table_row(&[&date, &event.name, detail], &widths);
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} event(s)", events.len()));
    Ok(())
}
