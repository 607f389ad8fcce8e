use super::*;

#[test]
fn parses_canonical_names() {
    assert_eq!("general".parse::<Category>().unwrap(), Category::General);
    assert_eq!("fat".parse::<Category>().unwrap(), Category::Fat);
    assert_eq!("beverage".parse::<Category>().unwrap(), Category::Beverage);
}

#[test]
fn parses_aliases_case_insensitively() {
    assert_eq!("Drink".parse::<Category>().unwrap(), Category::Beverage);
    assert_eq!(" BEVERAGES ".parse::<Category>().unwrap(), Category::Beverage);
    assert_eq!("fats".parse::<Category>().unwrap(), Category::Fat);
}

#[test]
fn rejects_unknown_category() {
    let err = "snacks".parse::<Category>().unwrap_err();
    assert!(matches!(err, Error::InvalidCategory(ref s) if s == "snacks"));
    assert!(err.to_string().contains("snacks"));
}

#[test]
fn display_round_trips() {
    for c in Category::ALL {
        assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
    }
}
