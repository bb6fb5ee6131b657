//! Rendering for the Select widget.

use formdom::Element;

use super::Select;

impl Select {
    /// Build the element tree for the current state.
    ///
    /// Closed: just the control. Open: the control followed by the panel,
    /// which holds the search row, the select-all row (multiple mode only),
    /// the filtered option rows, and an empty-result row when nothing
    /// matches.
    pub fn render(&self) -> Element {
        let open = self.is_open();
        let visible = self.visible_options();

        log::debug!(
            "Select::render id={} open={} visible={}/{}",
            self.id(),
            open,
            visible.len(),
            self.options().len()
        );

        let arrow = if open { "▲" } else { "▼" };
        let control = Element::row()
            .id(self.control_id())
            .focusable(true)
            .clickable(true)
            .data("expanded", open.to_string())
            .child(Element::text(self.display_label()).id(self.label_id()))
            .child(Element::text(arrow));

        let root = Element::col().id(self.id()).child(control);
        if !open {
            return root;
        }

        let config = self.config();
        let query = self.query();

        let mut search_row = Element::row().child(
            Element::text(query.clone())
                .id(self.search_id())
                .focusable(true)
                .clickable(true)
                .captures_input(true)
                .data("placeholder", config.search_placeholder.clone()),
        );
        if !query.is_empty() {
            search_row = search_row.child(
                Element::text("×")
                    .id(self.clear_search_id())
                    .clickable(true)
                    .data("label", "Clear search"),
            );
        }

        let mut panel = Element::col().id(self.dropdown_id()).child(search_row);

        if self.is_multiple() {
            let all_selected = self.value().all_selected(&visible);
            let label = if all_selected {
                &config.deselect_all_label
            } else {
                &config.select_all_label
            };
            panel = panel.child(
                Element::row()
                    .id(self.select_all_id())
                    .focusable(true)
                    .clickable(true)
                    .checked(all_selected && !visible.is_empty())
                    .child(Element::text(label.clone())),
            );
        }

        if visible.is_empty() {
            panel = panel.child(Element::text(config.empty_text.clone()).id(self.empty_id()));
        } else {
            let rows = visible.iter().filter_map(|option| {
                let id = self.option_id_for(&option.value)?;
                let selected = self.is_selected(option);
                let mut row = Element::row()
                    .id(id)
                    .focusable(true)
                    .clickable(true)
                    .selected(selected)
                    .data("value", option.value.clone())
                    .child(Element::text(option.label.clone()));
                if self.is_multiple() {
                    row = row.checked(selected);
                }
                Some(row)
            });
            panel = panel.children(rows);
        }

        root.child(panel)
    }
}
