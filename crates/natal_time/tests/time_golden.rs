//! Julian Day and sidereal time against published worked examples.

use natal_time::{BirthMoment, gmst_deg, jd_to_calendar, julian_day, local_sidereal_time_deg};

#[test]
fn meeus_julian_days() {
    // Meeus ch. 7 examples
    let cases = [
        (julian_day(1957, 10, 4, 19.0, 26.4), 2_436_116.31),
        (julian_day(2000, 1, 1, 12.0, 0.0), 2_451_545.0),
        (julian_day(1987, 1, 27, 0.0, 0.0), 2_446_822.5),
        (julian_day(1988, 6, 19, 12.0, 0.0), 2_447_332.0),
        (julian_day(1600, 1, 1, 0.0, 0.0), 2_305_447.5),
    ];
    for (jd, expected) in cases {
        assert!((jd - expected).abs() < 1e-8, "{jd} vs {expected}");
    }
}

#[test]
fn utc_hour_rollover_absorbed() {
    // 23:00 local at UTC−5 is 04:00 UTC the next day
    let m = BirthMoment::parse("1999-12-31", "23:00", 40.0, -75.0, -5.0).unwrap();
    let next = julian_day(2000, 1, 1, 4.0, 0.0);
    assert!((m.julian_day() - next).abs() < 1e-9);
    let (y, mo, d) = jd_to_calendar(m.julian_day());
    assert_eq!((y, mo), (2000, 1));
    assert!((d - (1.0 + 4.0 / 24.0)).abs() < 1e-6);
}

#[test]
fn meeus_sidereal_time() {
    // Meeus ex. 12.b: 1987-04-10 19:21:00 UT → GMST 128.7378734°
    let jd = julian_day(1987, 4, 10, 19.0, 21.0);
    let gmst = gmst_deg(jd);
    assert!((gmst - 128.737_873_4).abs() < 1e-4, "GMST = {gmst}");

    let lst = local_sidereal_time_deg(gmst, -77.065_556);
    assert!((lst - 51.672_317).abs() < 1e-4, "LST = {lst}");
}
