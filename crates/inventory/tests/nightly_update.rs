use gildedrose_inventory::{GildedRose, Item, ItemCategory};

fn counters(items: &[Item]) -> Vec<(&str, i32, i32)> {
    items
        .iter()
        .map(|item| (item.name(), item.sell_in(), item.quality()))
        .collect()
}

#[test]
fn three_nights_over_a_mixed_shelf() {
    gildedrose_observability::init_for_tests();

    let mut gilded_rose = GildedRose::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 1, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured", 3, 6),
    ]);

    for _ in 0..3 {
        gilded_rose.advance_day();
    }

    assert_eq!(
        counters(gilded_rose.items()),
        vec![
            ("+5 Dexterity Vest", 7, 17),
            ("Aged Brie", -1, 3),
            ("Elixir of the Mongoose", -2, 2),
            ("Sulfuras, Hand of Ragnaros", 0, 80),
            ("Backstage passes to a TAFKAL80ETC concert", 12, 23),
            ("Backstage passes to a TAFKAL80ETC concert", 7, 50),
            ("Backstage passes to a TAFKAL80ETC concert", 2, 50),
            ("Conjured", 0, 0),
        ]
    );
}

#[test]
fn backstage_pass_lifecycle_up_to_the_concert() {
    gildedrose_observability::init_for_tests();

    let mut gilded_rose = GildedRose::new(vec![Item::validated(
        ItemCategory::BackstagePasses,
        11,
        0,
    )]);

    let mut history = Vec::new();
    for _ in 0..12 {
        gilded_rose.advance_day();
        let pass = &gilded_rose.items()[0];
        history.push((pass.sell_in(), pass.quality()));
    }

    assert_eq!(
        history,
        vec![
            (10, 1),
            (9, 3),
            (8, 5),
            (7, 7),
            (6, 9),
            (5, 11),
            (4, 11),
            (3, 14),
            (2, 17),
            (1, 20),
            (0, 23),
            (-1, 0),
        ]
    );
}

#[test]
fn items_loaded_from_json_update_by_name() {
    let raw = r#"[
        { "name": "Aged Brie", "sellIn": 1, "quality": 0 },
        { "name": "Conjured", "sellIn": 10, "quality": 5 },
        { "name": "Normal", "sellIn": 0, "quality": 4 }
    ]"#;
    let items: Vec<Item> = serde_json::from_str(raw).unwrap();

    let next = GildedRose::from(Some(items)).update_quality();
    let json = serde_json::to_value(&next).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "name": "Aged Brie", "sellIn": 0, "quality": 1 },
            { "name": "Conjured", "sellIn": 9, "quality": 3 },
            { "name": "Normal", "sellIn": -1, "quality": 2 }
        ])
    );
}
