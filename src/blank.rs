//! Builds a document of empty pages.
//!
//! This stands in for the producer side of the writer: it allocates the
//! object numbers and assembles catalog, page tree and page objects.

use crate::document::Document;
use quire_types::{Array, Dict, ObjNum, ObjectId, ObjectRecord, Value, dict};

/// A4 in points, rounded to whole units.
pub const A4: (f64, f64) = (595.0, 842.0);

const CATALOG: ObjNum = 1;
const PAGE_TREE: ObjNum = 2;

/// Object number of the first page; each page takes two numbers (the page
/// and its content stream).
const FIRST_PAGE: ObjNum = 3;

/// Returns a document of `page_count` blank pages of the given size.
///
/// Objects are numbered catalog 1, page tree 2, then page/content pairs.
pub fn blank_document(page_count: usize, (width, height): (f64, f64)) -> Document {
    let page_ids: Vec<ObjectId> = (0..page_count)
        .map(|i| ObjectId::first(FIRST_PAGE + 2 * i as ObjNum))
        .collect();

    let mut doc = Document::new(ObjectId::first(CATALOG)).with_object(ObjectRecord::new(
        ObjectId::first(CATALOG),
        dict! {
            "Type" => Value::name("Catalog"),
            "Pages" => ObjectId::first(PAGE_TREE),
        },
    ));

    let kids: Array = page_ids.iter().map(|&id| Value::Link(id)).collect();
    doc.push(ObjectRecord::new(
        ObjectId::first(PAGE_TREE),
        dict! {
            "Type" => Value::name("Pages"),
            "Kids" => kids,
            "Count" => page_count,
        },
    ));

    let media_box = Array::new().with(0).with(0).with(width).with(height);
    for page_id in page_ids {
        let contents_id = ObjectId::first(page_id.num + 1);
        doc.push(ObjectRecord::new(
            page_id,
            dict! {
                "Type" => Value::name("Page"),
                "Parent" => ObjectId::first(PAGE_TREE),
                "MediaBox" => media_box.clone(),
                "Resources" => Dict::new(),
                "Contents" => contents_id,
            },
        ));
        doc.push(ObjectRecord::stream(contents_id, Dict::new(), Vec::new()));
    }

    doc
}

/// First object number not used by [`blank_document`] for `page_count` pages.
pub fn next_free_number(page_count: usize) -> ObjNum {
    FIRST_PAGE + 2 * page_count as ObjNum
}
