use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("nscore").chain(args.iter().copied())).unwrap()
}

#[test]
fn one_builds_record_from_flags() {
    let cli = parse(&[
        "one",
        "-c",
        "beverage",
        "--name",
        "Lemonade",
        "--energy",
        "180",
        "--sugar",
        "10.6",
        "--saturated-fat",
        "0",
        "--salt",
        "0.01",
        "--sweeteners",
    ]);
    let Commands::One {
        profile, product, ..
    } = cli.command
    else {
        panic!("expected the one subcommand");
    };
    assert_eq!(profile.category, "beverage");
    let record = product.into_record();
    assert_eq!(record.name.as_deref(), Some("Lemonade"));
    assert_eq!(record.energy, Some(180.0));
    assert_eq!(record.sugar, Some(10.6));
    assert_eq!(record.salt, Some(0.01));
    assert_eq!(record.fibre, None);
    assert_eq!(record.contains_sweeteners, Some(true));
    assert_eq!(record.is_water, Some(false));
}

#[test]
fn one_water_needs_no_values() {
    let cli = parse(&["one", "--category", "beverage", "--water", "--json"]);
    let Commands::One { product, json, .. } = cli.command else {
        panic!("expected the one subcommand");
    };
    assert!(json);
    let record = product.into_record();
    assert_eq!(record.is_water, Some(true));
    assert_eq!(record.energy, None);
}

#[test]
fn one_requires_category() {
    assert!(Cli::try_parse_from(["nscore", "one", "--energy", "1"]).is_err());
}

#[test]
fn verbose_is_global_and_counted() {
    let cli = parse(&["score", "in.xlsx", "-c", "general", "-vv"]);
    assert_eq!(cli.verbose, 2);
}
