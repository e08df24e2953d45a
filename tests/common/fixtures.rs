use quire::{Array, Document, ObjectRecord, Value, dict};

/// Catalog at 1 pointing to a page tree at 2
pub fn catalog() -> ObjectRecord {
    ObjectRecord::new(
        (1, 0),
        dict! {
            "Type" => Value::name("Catalog"),
            "Pages" => Value::link(2, 0),
        },
    )
}

/// Empty page tree at 2
pub fn empty_page_tree() -> ObjectRecord {
    ObjectRecord::new(
        (2, 0),
        dict! {
            "Type" => Value::name("Pages"),
            "Count" => 0,
        },
    )
}

/// Page tree at 2 with the given kids
pub fn page_tree(kids: &[u32]) -> ObjectRecord {
    let links: Array = kids.iter().map(|&n| Value::link(n, 0)).collect();
    ObjectRecord::new(
        (2, 0),
        dict! {
            "Type" => Value::name("Pages"),
            "Kids" => links,
            "Count" => kids.len(),
        },
    )
}

/// A letter-sized page object under the page tree at 2
pub fn page(num: u32) -> ObjectRecord {
    ObjectRecord::new(
        (num, 0),
        dict! {
            "Type" => Value::name("Page"),
            "Parent" => Value::link(2, 0),
            "MediaBox" => Array::new().with(0).with(0).with(612).with(792),
            "Resources" => dict! {},
        },
    )
}

/// The smallest complete document: catalog and empty page tree
pub fn minimal_document() -> Document {
    Document::new((1, 0)).with_object(catalog()).with_object(empty_page_tree())
}
