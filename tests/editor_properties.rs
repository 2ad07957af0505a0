//! Property-based tests for the component and application editors.
//!
//! These check the collection invariants over arbitrary edit sequences:
//! the derived total always matches the list, rejected edits never mutate,
//! and transport payloads rebuild the same list.

use proptest::prelude::*;

use inventario_editor::editor::ApplicationDraft;
use inventario_editor::{
    ApplicationEditor, ApplicationItem, CatalogEntry, ComponentCandidate, ComponentEditor,
    ComponentLine, EditorError, ReferenceCatalog, ReferenceId, StoredEntry,
};

const CATALOG_SIZE: usize = 12;

fn catalog() -> ReferenceCatalog {
    let entries = (0..CATALOG_SIZE).map(|i| {
        CatalogEntry::new(
            ReferenceId::parse(&format!("P{}", i)).unwrap(),
            format!("Part {}", i),
            i as i64,
            // quarter units keep the sums exact in f64
            (i as f64) * 0.25 + 1.0,
        )
    });
    ReferenceCatalog::from_entries(entries).unwrap()
}

fn expected_total(editor: &ComponentEditor) -> f64 {
    editor
        .items()
        .iter()
        .map(|item| item.unit_cost * f64::from(item.quantity.get()))
        .sum()
}

/// Distinct catalog indices paired with quantities
fn component_picks() -> impl Strategy<Value = Vec<(usize, i64)>> {
    proptest::sample::subsequence((0..CATALOG_SIZE).collect::<Vec<_>>(), 0..CATALOG_SIZE)
        .prop_shuffle()
        .prop_flat_map(|indices| {
            let n = indices.len();
            (Just(indices), proptest::collection::vec(1i64..50, n))
        })
        .prop_map(|(indices, quantities)| indices.into_iter().zip(quantities).collect::<Vec<_>>())
}

fn filled(picks: &[(usize, i64)], catalog: &ReferenceCatalog) -> ComponentEditor {
    let mut editor = ComponentEditor::new();
    for (index, quantity) in picks {
        let id = format!("P{}", index);
        editor
            .add_quantity_item(ComponentCandidate::new(&id, *quantity), catalog)
            .unwrap();
    }
    editor
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distinct_adds_grow_list_and_total(picks in component_picks()) {
        let catalog = catalog();
        let editor = filled(&picks, &catalog);

        prop_assert_eq!(editor.len(), picks.len());
        let sum: f64 = picks
            .iter()
            .map(|(i, q)| ((*i as f64) * 0.25 + 1.0) * (*q as f64))
            .sum();
        prop_assert_eq!(editor.current_total(), sum);
    }

    #[test]
    fn duplicate_add_is_rejected_unchanged(picks in component_picks(), pick in any::<prop::sample::Index>(), qty in 1i64..50) {
        prop_assume!(!picks.is_empty());
        let catalog = catalog();
        let mut editor = filled(&picks, &catalog);
        let before = editor.items().to_vec();

        let (index, _) = picks[pick.index(picks.len())];
        let id = format!("P{}", index);
        let err = editor.add_quantity_item(ComponentCandidate::new(&id, qty), &catalog).unwrap_err();

        prop_assert!(matches!(err, EditorError::DuplicateItem(_)));
        prop_assert_eq!(editor.items(), &before[..]);
    }

    #[test]
    fn non_positive_update_keeps_quantity(picks in component_picks(), pick in any::<prop::sample::Index>(), bad in -100i64..=0) {
        prop_assume!(!picks.is_empty());
        let catalog = catalog();
        let mut editor = filled(&picks, &catalog);
        let position = pick.index(editor.len());
        let before = editor.items().to_vec();

        let err = editor.update_quantity(position, bad).unwrap_err();

        prop_assert!(matches!(err, EditorError::InvalidQuantity(_)));
        prop_assert_eq!(editor.items(), &before[..]);
    }

    #[test]
    fn remove_shrinks_by_one_and_total_follows(picks in component_picks(), position in 0usize..CATALOG_SIZE + 2) {
        let catalog = catalog();
        let mut editor = filled(&picks, &catalog);
        let len = editor.len();
        let before = editor.items().to_vec();

        match editor.remove_item(position) {
            Ok(removed) => {
                prop_assert!(position < len);
                prop_assert_eq!(editor.len(), len - 1);
                prop_assert_eq!(&removed, &before[position]);
                prop_assert_eq!(editor.current_total(), expected_total(&editor));
            }
            Err(err) => {
                prop_assert!(position >= len);
                prop_assert_eq!(err, EditorError::IndexOutOfRange { position, len });
                prop_assert_eq!(editor.items(), &before[..]);
            }
        }
    }

    #[test]
    fn component_payload_round_trips(picks in component_picks()) {
        let catalog = catalog();
        let editor = filled(&picks, &catalog);

        let payload = editor.to_transport_payload();
        let json = serde_json::to_string(&payload).unwrap();
        let decoded: Vec<StoredEntry<ComponentLine>> = serde_json::from_str(&json).unwrap();

        let mut rebuilt = ComponentEditor::new();
        let report = rebuilt.from_remote_snapshot(&decoded, &catalog);

        prop_assert!(report.is_complete());
        prop_assert_eq!(rebuilt.items(), editor.items());
    }

    #[test]
    fn application_payload_round_trips(
        apps in proptest::collection::vec(("[A-Za-z0-9]{1,12}", "[A-Za-z]{1,10}", proptest::option::of("[A-Z]-[0-9]{1,3}")), 0..8)
    ) {
        let mut editor = ApplicationEditor::new();
        for (vehicle, brand, code) in &apps {
            let mut draft = ApplicationDraft::new(vehicle, brand);
            draft.secondary_code = code.as_deref();
            editor.add_application_item(draft).unwrap();
        }

        let json = serde_json::to_string(&editor.to_transport_payload()).unwrap();
        let decoded: Vec<StoredEntry<ApplicationItem>> = serde_json::from_str(&json).unwrap();

        let mut rebuilt = ApplicationEditor::new();
        let report = rebuilt.from_remote_snapshot(&decoded);

        prop_assert!(report.is_complete());
        prop_assert_eq!(rebuilt.items(), editor.items());
    }
}

#[test]
fn blank_vehicle_is_rejected() {
    let mut editor = ApplicationEditor::new();
    let err = editor
        .add_application_item(ApplicationDraft::new("", "Toyota"))
        .unwrap_err();
    assert_eq!(err, EditorError::MissingRequiredField("vehicle"));
    assert!(editor.is_empty());
}
