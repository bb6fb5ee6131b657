//! Search filtering for select options.

use super::SelectOption;

/// Filter options by a search query.
///
/// A missing, empty, or whitespace-only query keeps every option. Otherwise
/// an option is kept when its label or its value contains the query as a
/// case-insensitive substring. Kept options stay in their original order.
///
/// # Example
///
/// ```
/// use formkit::widgets::select::{filter_options, SelectOption};
///
/// let options = vec![
///     SelectOption::new("us", "United States"),
///     SelectOption::new("ca", "Canada"),
/// ];
/// let visible = filter_options(&options, Some("CAN"));
/// assert_eq!(visible, vec![&options[1]]);
/// ```
pub fn filter_options<'a>(options: &'a [SelectOption], query: Option<&str>) -> Vec<&'a SelectOption> {
    let query = match query {
        Some(q) if !q.trim().is_empty() => q.to_lowercase(),
        _ => return options.iter().collect(),
    };

    options
        .iter()
        .filter(|option| {
            option.label.to_lowercase().contains(&query)
                || option.value.to_lowercase().contains(&query)
        })
        .collect()
}
