#![allow(dead_code)]

use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, Stream,
};

/// Page one of a bulletin, one text object per label or figure.
pub const PAGE_ONE: &[&str] = &[
    "Ministry of Health",
    "Vaccine doses dispensed as at",
    "Friday 14th January 2022",
    "Total Doses Administered above 18 years",
    "1,000,000",
    "Total Partially Vaccinated above 18 years",
    "900,000",
    "Total Fully Vaccinated above 18 yrs",
    "800,000",
    "15-18 yrs received first dose (Pfizer vaccine)",
    "12,345",
];

/// Table 5 with its header, one data row and the total row.
pub const PAGE_TWO: &[&str] = &[
    "Table 5: Fully vaccinated vs. partially vaccinated above 18 years by priority group",
    "Priority group",
    "Johnson & Johnson",
    "Dose 2 uptake",
    "Total fully vaccinated (J&J + Dose 2 uptake)",
    "Partially vaccinated (Dose 1 uptake)",
    "% Dose 2 uptake",
    "Health workers",
    "5,000",
    "80,000",
    "85,000",
    "20,000",
    "81.0%",
    "Total",
    "30,000",
    "770,000",
    "800,000",
    "900,000",
    "47.1%",
    "Table 5 shows percentage of clients who have received their second dose",
];

/// The text the extractor should hand the parsers for `chunks`.
pub fn normalized(chunks: &[&str]) -> String {
    chunks.join(" ").to_lowercase()
}

/// A two-page bulletin PDF built in memory.
pub fn bulletin_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for chunks in [PAGE_ONE, PAGE_TWO] {
        let mut operations = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new(
                "Td",
                vec![40.into(), (800 - 20 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*chunk)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content should encode"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i64,
        "Kids" => kids,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("PDF should serialize");
    bytes
}
