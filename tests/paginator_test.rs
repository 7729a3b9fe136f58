// Grid placement: slot counts and fill order in both layout modes

use kanji_poster::{ConfigError, GridLayout, Slot};

fn rows_of(slots: &[Slot], columns: usize) -> Vec<Vec<Option<usize>>> {
    slots
        .chunks(columns)
        .map(|row| row.iter().map(|s| s.index).collect())
        .collect()
}

#[test]
fn test_slot_count_is_padded_to_full_rows() {
    for columns in 1..=7usize {
        let layout = GridLayout::new(columns, None).unwrap();
        for total in 0..=30usize {
            let expected = total.div_ceil(columns) * columns;
            assert_eq!(layout.slots(total).len(), expected, "total={total} columns={columns}");
            assert_eq!(layout.slot_count(total), expected);
        }
    }
}

#[test]
fn test_row_major_order() {
    let layout = GridLayout::new(4, None).unwrap();
    let slots = layout.slots(10);
    assert_eq!(
        rows_of(&slots, 4),
        vec![
            vec![Some(0), Some(1), Some(2), Some(3)],
            vec![Some(4), Some(5), Some(6), Some(7)],
            vec![Some(8), Some(9), None, None],
        ]
    );
    assert!(slots.iter().all(|s| s.page == 0));
    assert_eq!(slots[9].row, 2);
    assert_eq!(slots[9].column, 1);
}

#[test]
fn test_paged_column_major_order() {
    let layout = GridLayout::new(2, Some(2)).unwrap();
    let slots = layout.slots(6);
    assert_eq!(layout.page_count(6), 2);
    assert_eq!(slots.len(), 8);

    let page0: Vec<_> = slots.iter().filter(|s| s.page == 0).copied().collect();
    let page1: Vec<_> = slots.iter().filter(|s| s.page == 1).copied().collect();
    assert_eq!(rows_of(&page0, 2), vec![vec![Some(0), Some(2)], vec![Some(1), Some(3)]]);
    assert_eq!(rows_of(&page1, 2), vec![vec![Some(4), None], vec![Some(5), None]]);
}

#[test]
fn test_every_item_placed_exactly_once() {
    let layout = GridLayout::new(3, Some(4)).unwrap();
    let total = 29;
    let mut seen: Vec<usize> = layout.slots(total).iter().filter_map(|s| s.index).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..total).collect::<Vec<_>>());
}

#[test]
fn test_zero_items_yield_no_slots() {
    assert!(GridLayout::new(5, None).unwrap().slots(0).is_empty());
    assert!(GridLayout::new(5, Some(2)).unwrap().slots(0).is_empty());
}

#[test]
fn test_invalid_columns_is_config_error() {
    assert_eq!(GridLayout::new(0, None).unwrap_err(), ConfigError::InvalidColumns(0));
}
