use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

use paralex::application::ports::{ExtractionError, TextExtractor};
use paralex::domain::Document;
use paralex::infrastructure::extraction::SpreadsheetAdapter;

const SHEET_ALPHA: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>
<row r="1"><c r="A1" t="inlineStr"><is><t>Clause, amended</t></is></c><c r="B1"><v>1</v></c></row>
<row r="2"><c r="A2"><v>2</v></c><c r="B2"><v>3</v></c></row>
</sheetData>
</worksheet>"#;

const SHEET_BETA: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>
<row r="1"><c r="A1"><v>42</v></c></row>
</sheetData>
</worksheet>"#;

fn xlsx_bytes() -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
<Override PartName="/xl/worksheets/sheet2.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
    )
    .unwrap();

    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets>
<sheet name="Alpha" sheetId="1" r:id="rId1"/>
<sheet name="Beta" sheetId="2" r:id="rId2"/>
</sheets>
</workbook>"#,
    )
    .unwrap();

    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/>
</Relationships>"#,
    )
    .unwrap();

    zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
    zip.write_all(SHEET_ALPHA.as_bytes()).unwrap();

    zip.start_file("xl/worksheets/sheet2.xml", options).unwrap();
    zip.write_all(SHEET_BETA.as_bytes()).unwrap();

    zip.finish().unwrap().into_inner()
}

fn xlsx_document(size: usize) -> Document {
    Document::new(
        "schedule.xlsx".to_string(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
        size as u64,
    )
}

#[tokio::test]
async fn given_workbook_when_extracting_then_each_sheet_gets_a_header() {
    let data = xlsx_bytes();
    let adapter = SpreadsheetAdapter;

    let text = adapter
        .extract_text(&data, &xlsx_document(data.len()))
        .await
        .unwrap();

    let alpha = text.find("--- Sheet: Alpha ---").expect("Alpha header");
    let beta = text.find("--- Sheet: Beta ---").expect("Beta header");
    assert!(alpha < beta, "sheets should appear in workbook order");
}

#[tokio::test]
async fn given_workbook_when_extracting_then_rows_render_as_csv() {
    let data = xlsx_bytes();
    let adapter = SpreadsheetAdapter;

    let text = adapter
        .extract_text(&data, &xlsx_document(data.len()))
        .await
        .unwrap();

    assert!(text.contains("2,3"));
    assert!(text.contains("42"));
}

#[tokio::test]
async fn given_cell_with_comma_when_rendering_then_it_is_quoted() {
    let data = xlsx_bytes();
    let adapter = SpreadsheetAdapter;

    let text = adapter
        .extract_text(&data, &xlsx_document(data.len()))
        .await
        .unwrap();

    assert!(text.contains("\"Clause, amended\",1"));
}

#[tokio::test]
async fn given_non_workbook_bytes_when_extracting_then_it_fails() {
    let data = b"definitely not a spreadsheet";
    let adapter = SpreadsheetAdapter;

    let result = adapter.extract_text(data, &xlsx_document(data.len())).await;

    assert!(matches!(result, Err(ExtractionError::ExtractionFailed(_))));
}
