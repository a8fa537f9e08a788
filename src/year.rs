use chrono::Datelike;

pub const TITLE_SLOT: &str = "current-year-title";
pub const FOOTER_SLOT: &str = "current-year-footer";
pub const COPYRIGHT_SLOT: &str = "current-year-copyright";

const YEAR_SLOTS: [&str; 3] = [TITLE_SLOT, FOOTER_SLOT, COPYRIGHT_SLOT];

/// Somewhere year text can be written by element id.
pub trait YearSlots {
    /// Returns `false` when no element with `id` exists.
    fn write_slot(&self, id: &str, text: &str) -> bool;
}

impl YearSlots for web_sys::Document {
    fn write_slot(&self, id: &str, text: &str) -> bool {
        match self.get_element_by_id(id) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }
}

#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[must_use]
pub fn page_title(year: i32) -> String {
    format!("Hacktoberfest {year} - Contributors")
}

/// Write `year` into every year slot. Missing slots are logged and
/// returned; they never stop the remaining writes.
pub fn set_current_year(slots: &impl YearSlots, year: i32) -> Vec<&'static str> {
    let text = year.to_string();
    let mut missing = Vec::new();

    for id in YEAR_SLOTS {
        if !slots.write_slot(id, &text) {
            leptos::logging::warn!("Element with ID '{id}' not found in the DOM.");
            missing.push(id);
        }
    }

    missing
}
