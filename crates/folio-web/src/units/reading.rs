//! Reading-time badge

use std::rc::Rc;

use folio_fx::effects::{reading_minutes, reading_time_label, word_count};
use folio_fx::FxError;

use crate::context::UiContext;
use crate::util::{query, query_all};

pub fn install(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let badge = query(&ctx.document, "[data-reading-time]")?;
    let regions = query_all(&ctx.document, "[data-reading-content]");
    if regions.is_empty() {
        return Err(FxError::MissingElement("[data-reading-content]"));
    }

    let words: usize = regions
        .iter()
        .filter_map(|region| region.text_content())
        .map(|text| word_count(&text))
        .sum();
    let wpm = badge
        .get_attribute("data-wpm")
        .and_then(|attr| attr.trim().parse::<u32>().ok())
        .unwrap_or(ctx.config.reading.words_per_minute);

    let minutes = reading_minutes(words, wpm);
    badge.set_text_content(Some(&reading_time_label(minutes)));
    ctx.debug(&format!("[reading-time] {} words, {} min", words, minutes));
    Ok(())
}
