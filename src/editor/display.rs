//! Text for totals and component rows.

use crate::config::EditorConfig;
use crate::domain::QuantityItem;

use super::ComponentEditor;

pub fn format_money(config: &EditorConfig, value: f64) -> String {
    format!("{}{:.*}", config.currency_symbol, config.decimals, value)
}

/// `"Widget (3f2a9c41...)"`
pub fn component_label(config: &EditorConfig, item: &QuantityItem) -> String {
    format!(
        "{} ({}...)",
        item.display_name,
        item.reference_id.preview(config.id_preview_len)
    )
}

pub fn total_label(config: &EditorConfig, editor: &ComponentEditor) -> String {
    format_money(config, editor.current_total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Quantity, ReferenceId};

    #[test]
    fn test_money_format() {
        let config = EditorConfig::default();
        assert_eq!(format_money(&config, 15.0), "$15.00");
        assert_eq!(format_money(&config, 2.499), "$2.50");
    }

    #[test]
    fn test_component_label_preview() {
        let item = QuantityItem {
            reference_id: ReferenceId::parse("3f2a9c41-77aa-4d10").unwrap(),
            display_name: "Widget".to_string(),
            available_stock: 10,
            unit_cost: 5.0,
            quantity: Quantity::ONE,
        };
        let config = EditorConfig::default();
        assert_eq!(component_label(&config, &item), "Widget (3f2a9c41...)");
    }

    #[test]
    fn test_total_label_for_empty_editor() {
        let editor = ComponentEditor::new();
        assert_eq!(total_label(&EditorConfig::default(), &editor), "$0.00");
    }
}
