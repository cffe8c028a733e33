//! Static HTML assembly for the published calendar pages.
//!
//! The pages are small enough to build with plain string assembly: an index
//! listing every zone, and one page per zone with that zone's free slots
//! grouped by local day. Layout quirks (the `&nbsp;` pad on single-digit
//! hours, the `23:59:59` end on split slots) are kept so columns line up in
//! the rendered listing.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::catalog::ZoneDescriptor;
use crate::freeslot::DaySlots;
use crate::offset::UtcOffset;

/// Stylesheet shared by the index and every zone page.
pub const STYLESHEET: &str = "\
body { font-family: Georgia, serif; max-width: 40rem; margin: 2rem auto; color: #222; }
h1 { font-size: 1.5rem; }
h2 { font-size: 1.1rem; margin-bottom: 0.2rem; }
ul.zones, ul.slots { list-style: none; padding-left: 1rem; }
ul.slots li { font-variant-numeric: tabular-nums; }
p.written { color: #666; font-style: italic; }
p.empty { color: #666; }
";

/// Render the index page: the publisher's own zone and a link per catalog
/// entry.
pub fn render_index(
    home: &ZoneDescriptor,
    catalog: &BTreeMap<UtcOffset, ZoneDescriptor>,
) -> String {
    let mut page = String::new();
    page.push_str(&page_head("Free time by timezone"));
    page.push_str("<h1>Free time by timezone</h1>\n");
    page.push_str(&format!(
        "<p>Appointments are kept in {} ({}). Pick your timezone:</p>\n",
        home.abbrev,
        home.offset.utc_string()
    ));
    page.push_str("<ul class=\"zones\">\n");
    for zone in catalog.values() {
        page.push_str(&format!(
            "<li><a href=\"{}.html\">{}</a></li>\n",
            zone.file_id, zone.name
        ));
    }
    page.push_str("</ul>\n");
    page.push_str(PAGE_FOOT);
    page
}

/// Render one zone's page: the day-grouped free-slot listing plus the
/// last-updated line when the schedule carried one (already converted to
/// this zone's clock by the caller).
pub fn render_zone_page(
    zone: &ZoneDescriptor,
    days: &[DaySlots],
    written: Option<NaiveDateTime>,
) -> String {
    let mut page = String::new();
    page.push_str(&page_head(&zone.name));
    page.push_str(&format!("<h1>Free time in {}</h1>\n", zone.name));
    if let Some(written) = written {
        page.push_str(&format!(
            "<p class=\"written\">Last updated {}.</p>\n",
            written.format("%b %d, %Y at %I:%M %p")
        ));
    }
    if days.is_empty() {
        page.push_str("<p class=\"empty\">No free time is currently listed.</p>\n");
    }
    for day in days {
        page.push_str(&format!("<h2>{}</h2>\n", fmt_day(day.date)));
        page.push_str("<ul class=\"slots\">\n");
        for slot in &day.slots {
            page.push_str(&format!(
                "<li>{} - {}</li>\n",
                fmt_time(slot.start),
                fmt_time(slot.end)
            ));
        }
        page.push_str("</ul>\n");
    }
    page.push_str("<p><a href=\"index.html\">All timezones</a></p>\n");
    page.push_str(PAGE_FOOT);
    page
}

fn page_head(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<link rel=\"stylesheet\" href=\"styles.css\">\n\
         </head>\n<body>\n"
    )
}

const PAGE_FOOT: &str = "</body>\n</html>\n";

/// `Mon, Mar 5` — weekday, month, unpadded day.
fn fmt_day(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Twelve-hour clock time. A leading zero hour becomes a non-breaking pad
/// so times align down the column.
fn fmt_time(at: NaiveDateTime) -> String {
    let time = at.format("%I:%M %p").to_string();
    match time.strip_prefix('0') {
        Some(rest) => format!("&nbsp; {rest}"),
        None => time,
    }
}
