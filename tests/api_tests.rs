use cellfmt::{
    AddressError, CachedValue, CellAddress, CellValue, DateSystem, FormatDialect, FormatError,
    FormatOptions, FormatSpec, Locale, ParseError, RenderRequest, ResolvedFormat,
};

#[test]
fn test_default_options() {
    let opts = FormatOptions::default();
    assert_eq!(opts.date_system, DateSystem::Date1900);
    assert_eq!(opts.locale, Locale::en_us());
    assert_eq!(DateSystem::Date1900.epoch_year(), 1900);
    assert_eq!(DateSystem::Date1904.epoch_year(), 1904);
}

#[test]
fn test_locale_tags() {
    assert_eq!(Locale::from_tag("ja").map(|l| l.dialect), Some(FormatDialect::Japanese));
    assert_eq!(Locale::from_tag("ja-Hira").map(|l| l.id), Some("ja-JP"));
    assert_eq!(Locale::from_tag("en-GB"), None);
    assert_eq!(Locale::from_tag(" JA-jp ").map(|l| l.id), Some("ja-JP"));
    assert_eq!(Locale::from_tag("zz"), None);
}

#[test]
fn test_cell_conversions() {
    assert_eq!(CellValue::from(1.5), CellValue::Numeric(1.5));
    assert_eq!(CellValue::from(7i64), CellValue::Numeric(7.0));
    assert_eq!(CellValue::from(-3i32), CellValue::Numeric(-3.0));
    assert_eq!(CellValue::from("abc"), CellValue::Text("abc"));
    assert_eq!(CellValue::from(true), CellValue::Boolean(true));
    assert_eq!(CellValue::from(()), CellValue::Blank);
}

#[test]
fn test_cell_accessors() {
    let formula = CellValue::Formula(CachedValue::Number(2.5));
    assert_eq!(formula.as_number(), Some(2.5));
    assert_eq!(formula.as_text(), None);
    assert_eq!(formula.type_name(), "formula");

    let text = CellValue::Formula(CachedValue::Text("x"));
    assert_eq!(text.as_text(), Some("x"));
    assert_eq!(CachedValue::Text("x").to_cell(), CellValue::Text("x"));

    assert!(CellValue::Blank.is_blank());
    assert_eq!(CellValue::Error("#N/A").type_name(), "error");
}

#[test]
fn test_cell_address() {
    let address: CellAddress = "B12".parse().unwrap();
    assert_eq!(address, CellAddress::new(11, 1));
    assert_eq!(address.to_string(), "B12");

    let absolute: CellAddress = "$AA$3".parse().unwrap();
    assert_eq!(absolute, CellAddress::new(2, 26));
    assert_eq!(absolute.to_string(), "AA3");

    assert_eq!(
        "B0".parse::<CellAddress>(),
        Err(AddressError("B0".to_string()))
    );
    assert!("12".parse::<CellAddress>().is_err());
    assert!("A".parse::<CellAddress>().is_err());
}

#[test]
fn test_error_messages() {
    let err = ParseError::UnexpectedChar {
        position: 5,
        found: 'x',
    };
    assert_eq!(err.to_string(), "unexpected character at position 5: found 'x'");
    assert_eq!(
        ParseError::TooManySections.to_string(),
        "too many sections (maximum 2 allowed)"
    );
    assert_eq!(
        AddressError("B0".to_string()).to_string(),
        "invalid cell address: \"B0\""
    );

    // Pattern errors display as the underlying parse error
    let wrapped = FormatError::from(ParseError::EmptyPattern);
    assert_eq!(wrapped.to_string(), "empty pattern");
    assert_eq!(wrapped, FormatError::Pattern(ParseError::EmptyPattern));
}

#[test]
fn test_render_request() {
    let opts = FormatOptions::with_locale(Locale::de_de());
    let spec = FormatSpec::new(4, "");
    let request = RenderRequest::from_spec(CellValue::Numeric(1234.567), &spec, &opts);
    assert_eq!(request.format, ResolvedFormat::from_spec(&spec, &opts.locale));
    assert_eq!(request.render(), "1.234,57");
    assert_eq!(
        request.render(),
        cellfmt::format_with_options(&CellValue::Numeric(1234.567), &spec, &opts)
    );
}
