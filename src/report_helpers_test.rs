use super::*;

#[test]
fn max_name_width_picks_widest() {
    let names = ["Cola", "Sparkling water"];
    assert_eq!(max_name_width(names.into_iter(), 4, 40), "Sparkling water".len());
}

#[test]
fn max_name_width_empty() {
    assert_eq!(max_name_width(std::iter::empty(), 7, 30), 7);
}

#[test]
fn max_name_width_clamped() {
    let long = "x".repeat(100);
    assert_eq!(max_name_width([long.as_str()].into_iter(), 4, 30), 30);
    assert_eq!(max_name_width(["a"].into_iter(), 10, 30), 10);
}

#[test]
fn fit_width_pads_short_names() {
    assert_eq!(fit_width("tea", 6), "tea   ");
}

#[test]
fn fit_width_truncates_long_names() {
    let s = fit_width("Chocolate hazelnut spread", 10);
    assert_eq!(s, "Chocola...");
    assert_eq!(UnicodeWidthStr::width(s.as_str()), 10);
}

#[test]
fn fit_width_counts_wide_chars() {
    // each CJK char takes two columns
    let s = fit_width("抹茶ラテ", 6);
    assert_eq!(UnicodeWidthStr::width(s.as_str()), 6);
    assert!(s.trim_end().ends_with("..."));

    let s = fit_width("抹茶", 6);
    assert_eq!(s, "抹茶  ");
}

#[test]
fn separator_width() {
    let s = separator(5);
    // Each ─ is 3 bytes in UTF-8
    assert_eq!(s.chars().count(), 5);
}

#[test]
fn print_json_stdout_works() {
    let data = vec![1, 2, 3];
    print_json_stdout(&data).unwrap();
}
