use chrono::{DateTime, Duration, TimeZone, Utc};
use marstime::{
    config, orbit, solar, utc_to_tt_offset, Interval, J2000Offset, LmstFormat, MarsTimeConverter,
    MarsTimeError, MissionCatalog, MissionConfig, SolTime, Time, JD, SOL_SECONDS,
    TOLERANCE_SECONDS,
};
use qtty::{Day, Second, Seconds};
use std::io::Write;

fn seconds_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (a - b).num_microseconds().unwrap() as f64 / 1e6
}

#[test]
fn insight_origin_is_sol_zero_midnight() {
    let insight = MissionConfig::insight();
    let conv = MarsTimeConverter::new(&insight);
    let lmst = conv
        .utc_str_to_lmst("2018-330T05:10:50.3356Z", LmstFormat::Date)
        .unwrap();
    assert_eq!(lmst.to_string(), "0000T00:00:00.000000");
}

#[test]
fn mars24_worked_example_through_typed_instants() {
    // 2000-01-06T00:00:00 UTC
    let utc = Utc.with_ymd_and_hms(2000, 1, 6, 0, 0, 0).unwrap();
    let t = J2000Offset::from_utc(utc);
    assert!((t.value() - 4.500_743).abs() < 1e-6);

    let jd: Time<JD> = t.to::<JD>();
    let offset = (jd.quantity() - Time::<JD>::new(marstime::julian_day_utc(utc)).quantity())
        .to::<Day>()
        .to::<Second>();
    assert!((offset - Seconds::new(64.184)).abs() < Seconds::new(1e-3));

    assert!((orbit::areocentric_solar_longitude(t) - 277.18758).abs() < 1e-4);
    assert!((solar::mars_solar_date(t) - 44_795.999_76).abs() < 1e-5);
}

#[test]
fn roundtrip_across_several_mars_years() {
    let insight = MissionConfig::insight();
    let conv = MarsTimeConverter::new(&insight);
    let mut t = insight.origin_date() + Duration::milliseconds(1);
    let end = insight.origin_date() + Duration::days(2_200);
    while t < end {
        let lmst = conv.lmst(t).unwrap();
        let back = conv.lmst_to_utc(&lmst).unwrap();
        assert!(
            seconds_between(back, t).abs() <= TOLERANCE_SECONDS,
            "{t} -> {lmst} -> {back}"
        );
        t += Duration::seconds(86_400 * 11 + 3_607);
    }
}

#[test]
fn roundtrip_across_leap_seconds() {
    let curiosity = MissionConfig::from_strings(
        "Curiosity",
        137.42,
        -4.5895,
        "2012-08-06T05:17:57Z",
        "2012-08-05T13:49:59Z",
    )
    .unwrap();
    let conv = MarsTimeConverter::new(&curiosity);
    let mut t = curiosity.origin_date() + Duration::minutes(10);
    let end = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
    while t < end {
        let lmst = conv.lmst(t).unwrap();
        let back = conv.lmst_to_utc(&lmst).unwrap();
        assert!(
            seconds_between(back, t).abs() <= TOLERANCE_SECONDS,
            "{t} -> {lmst} -> {back}"
        );
        t += Duration::seconds(86_400 * 4 + 7_777);
    }
}

#[test]
fn tabular_roundtrip_via_string() {
    let insight = MissionConfig::insight();
    let conv = MarsTimeConverter::new(&insight);
    let t = Utc.with_ymd_and_hms(2021, 6, 1, 8, 30, 15).unwrap();
    let date = conv.utc_to_lmst(Some(t), LmstFormat::Date).unwrap();
    let back = conv.lmst_str_to_utc(&date.to_string()).unwrap();
    assert!(seconds_between(back, t).abs() <= TOLERANCE_SECONDS);
}

#[test]
fn advancing_utc_advances_sol_count_linearly() {
    let insight = MissionConfig::insight();
    let conv = MarsTimeConverter::new(&insight);
    let t1 = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
    let t2 = t1 + Duration::hours(1_000);
    let d = conv.sol_count(t2).unwrap() - conv.sol_count(t1).unwrap();
    assert!((d - 3_600_000.0 / SOL_SECONDS).abs() < 1e-9);
}

#[test]
fn error_scenarios() {
    let insight = MissionConfig::insight();
    let conv = MarsTimeConverter::new(&insight);

    assert!(matches!(
        conv.lmst_parts_to_utc(-1, 0, 0, 0, 0),
        Err(MarsTimeError::InvalidInput { .. })
    ));
    assert!(matches!(
        conv.utc_str_to_lmst("not-a-date", LmstFormat::Decimal),
        Err(MarsTimeError::InvalidInput { .. })
    ));
    assert!(matches!(
        "sexagesimal".parse::<LmstFormat>(),
        Err(MarsTimeError::InvalidInput { .. })
    ));

    let now = Utc::now();
    assert!(matches!(
        MissionConfig::new("Bad", 400.0, 0.0, now, now),
        Err(MarsTimeError::Configuration { .. })
    ));
}

#[test]
fn catalog_file_with_two_missions() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[mission]]
name = "InSight"
landing_site = "Elysium Planitia"
landing_date = "2018-330T19:44:52.444"
solorigin = "2018-330T05:10:50.3356"
longitude = 224.03
latitude = 4.502384

[[mission]]
name = "Bad"
landing_date = "2018-330T19:44:52.444"
solorigin = "2018-330T05:10:50.3356"
longitude = 400.0
"#
    )
    .unwrap();

    let err = config::load_missions(file.path()).unwrap_err();
    assert!(matches!(err, MarsTimeError::Configuration { ref mission, .. } if mission == "Bad"));
}

#[test]
fn independent_missions_coexist() {
    let catalog = MissionCatalog::from_toml_str(
        r#"
[[mission]]
name = "InSight"
landing_date = "2018-330T19:44:52.444"
solorigin = "2018-330T05:10:50.3356"
longitude = 224.03
latitude = 4.502384

[[mission]]
name = "Prime"
landing_date = "2018-330T19:44:52.444"
solorigin = "2018-330T05:10:50.3356"
sol_origin_ref = 1000
longitude = 0.0
"#,
    )
    .unwrap();

    let a = MarsTimeConverter::new(catalog.get("InSight").unwrap());
    let b = MarsTimeConverter::new(catalog.get("Prime").unwrap());
    let t = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(b.get_sol(t).unwrap(), a.get_sol(t).unwrap() + 1_000);
    assert!(a.sun_position(t) != b.sun_position(t));
}

#[test]
fn sampled_sol_tabulates_monotonic_lmst() {
    let insight = MissionConfig::insight();
    let conv = MarsTimeConverter::new(&insight);
    let span = conv.sol_span(500).unwrap();
    let samples = span.samples(Duration::minutes(30)).unwrap();
    let series = conv
        .utc_to_lmst_series(&samples, LmstFormat::Decimal)
        .unwrap();
    assert!(series.len() >= 49);
    let values: Vec<f64> = series.iter().map(|v| v.as_decimal().unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    // The span endpoints are only exact to the refinement tolerance.
    let slack = 1.0 / SOL_SECONDS;
    assert!(values.iter().all(|v| *v > 500.0 - slack && *v < 501.0));

    let clipped = Interval::new(span.start, span.start + Duration::hours(1));
    assert_eq!(span.intersection(&clipped), Some(clipped));
}

#[test]
fn tt_offset_is_a_clamped_step_function() {
    let table = marstime::tt_offset_table();
    assert_eq!(utc_to_tt_offset(-1.0e9).value(), table[0].1);
    assert_eq!(utc_to_tt_offset(1.0e9).value(), table[table.len() - 1].1);

    let mut prev = f64::NEG_INFINITY;
    let mut jd = 2_440_000.0;
    while jd < 2_460_000.0 {
        let v = utc_to_tt_offset(jd).value();
        assert!(v >= prev);
        prev = v;
        jd += 17.3;
    }
}

#[test]
fn lmst_value_serialises_with_named_fields() {
    let v = SolTime::new(12, 3, 4, 5, 6).unwrap();
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(
        json,
        r#"{"sol":12,"hour":3,"minute":4,"second":5,"microsecond":6}"#
    );
    let back: SolTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
