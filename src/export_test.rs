use super::*;
use crate::ingest::parse_csv;
use crate::score::{Category, ProfileSet, score_batch};

fn records() -> Vec<RawNutrientRecord> {
    vec![
        RawNutrientRecord {
            name: Some("Diet cola".to_string()),
            energy: Some(1.0),
            sugar: Some(0.0),
            saturated_fat: Some(0.0),
            salt: Some(0.02),
            contains_sweeteners: Some(true),
            ..Default::default()
        },
        RawNutrientRecord {
            name: Some("Unlabelled".to_string()),
            energy: Some(40.0),
            ..Default::default()
        },
    ]
}

fn export(records: &[RawNutrientRecord]) -> String {
    let batch = score_batch(records, Category::Beverage, ProfileSet::canonical().unwrap()).unwrap();
    let mut buf = Vec::new();
    write_csv(&mut buf, records, &batch).unwrap();
    String::from_utf8(buf).unwrap()
}

fn rows(text: &str) -> Vec<csv::StringRecord> {
    csv::Reader::from_reader(text.as_bytes())
        .records()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn header_matches_template_columns() {
    let text = export(&records());
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let header = reader.headers().unwrap();
    assert_eq!(header.len(), 25);
    assert_eq!(&header[0], "Product Name");
    assert_eq!(&header[22], "Nutri-Score Points");
    assert_eq!(&header[23], "Nutri-Score Grade");
}

#[test]
fn scored_row_carries_components() {
    let text = export(&records());
    let row = &rows(&text)[0];
    assert_eq!(row.len(), 25);
    assert_eq!(&row[0], "Diet cola");
    assert_eq!(&row[8], "true");
    assert_eq!(&row[16], "4"); // sweetener penalty
    assert_eq!(&row[20], "4"); // N total
    assert_eq!(&row[22], "4");
    assert_eq!(&row[23], "C");
    assert_eq!(&row[24], "");
}

#[test]
fn unscoreable_row_has_error_and_blank_scores() {
    let text = export(&records());
    let row = &rows(&text)[1];
    assert_eq!(row.len(), 25);
    assert_eq!(&row[1], "40");
    assert_eq!(&row[2], "");
    assert!((12..24).all(|i| row[i].is_empty()));
    assert_eq!(&row[24], "missing required nutrient: sugar");
}

#[test]
fn export_can_be_read_back() {
    let original = records();
    let text = export(&original);
    let reread = parse_csv(text.as_bytes()).unwrap();
    assert_eq!(reread.len(), 2);
    assert_eq!(reread[0].name, original[0].name);
    assert_eq!(reread[0].salt, Some(0.02));
    assert_eq!(reread[1].sugar, None);
}

#[test]
fn write_csv_file_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let records = records();
    let batch =
        score_batch(&records, Category::Beverage, ProfileSet::canonical().unwrap()).unwrap();
    write_csv_file(&path, &records, &batch).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn write_csv_file_bad_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.csv");
    let batch = BatchResult {
        category: Category::General,
        outcomes: vec![],
    };
    assert!(matches!(
        write_csv_file(&path, &[], &batch).unwrap_err(),
        Error::Io { .. }
    ));
}
