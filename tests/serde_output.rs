#![cfg(feature = "serde")]

//! JSON shape of the output types, as consumed by the chart API.

use serde_json::{json, Value};
use solar_ephemeris::{
    approximate, precision, series, CivilInstant, DayFraction, Degrees, GeoPosition, Strategy,
    SunriseResult,
};

#[test]
fn unit_newtypes_serialize_as_bare_numbers() {
    assert_eq!(serde_json::to_value(Degrees::new(23.5)).unwrap(), json!(23.5));
    assert_eq!(
        serde_json::to_value(DayFraction::from_fraction(0.5)).unwrap(),
        json!(0.5)
    );
}

#[test]
fn sunrise_result_is_tagged() {
    let regular = SunriseResult::RegularDay {
        sunrise: DayFraction::from_fraction(0.25),
        transit: DayFraction::from_fraction(0.5),
        sunset: DayFraction::from_fraction(0.75),
    };
    assert_eq!(
        serde_json::to_value(&regular).unwrap(),
        json!({"kind": "regularDay", "sunrise": 0.25, "transit": 0.5, "sunset": 0.75})
    );

    let polar: SunriseResult = SunriseResult::AllNight {
        transit: DayFraction::from_fraction(0.5),
    };
    let value = serde_json::to_value(&polar).unwrap();
    assert_eq!(value, json!({"kind": "allNight", "transit": 0.5}));

    let back: SunriseResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, polar);
}

#[test]
fn ephemeris_sample_fields() {
    let london = GeoPosition::new(51.51, -0.06).unwrap();
    let instant = CivilInstant::new(2022, 1, 1, 12, 0, 0.0, 0.0).unwrap();
    let sample = precision::ephemeris_sample(london, &instant);

    let value = serde_json::to_value(&sample).unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "equationOfTimeMinutes",
        "solarDeclination",
        "solarNoon",
        "sunriseSunset",
        "maxElevation",
    ] {
        assert!(object.contains_key(key), "missing {key} in {value}");
    }
    assert_eq!(
        object["equationOfTimeMinutes"],
        json!(sample.equation_of_time_minutes())
    );
}

#[test]
fn position_sample_round_trip() {
    let position = GeoPosition::new(40.0, -105.0).unwrap();
    let sample = approximate::solar_position(position, 172, 780.0, Some(-7.0)).unwrap();

    let value = serde_json::to_value(sample).unwrap();
    assert!(value["elevation"].is_f64());
    assert!(value["zenith"].is_f64());
    assert!(value["azimuth"].is_f64());
    assert_eq!(serde_json::from_value::<solar_ephemeris::SolarPositionSample>(value).unwrap(), sample);
}

#[test]
fn year_series_uses_chart_api_field_names() {
    let svalbard = GeoPosition::new(78.22, 15.65).unwrap();
    let chart = series::year_series(svalbard, 2021, Some(1.0)).unwrap();
    let value = serde_json::to_value(&chart).unwrap();

    for key in [
        "solarNoonData",
        "equationOfTimeData",
        "solarDeclinationData",
        "sunriseTimeData",
        "sunsetTimeData",
        "maxElevationData",
    ] {
        let array = value[key].as_array().unwrap_or_else(|| panic!("{key} missing"));
        assert_eq!(array.len(), 365, "{key}");
    }

    // polar night on New Year's Day: no sunrise
    assert_eq!(value["sunriseTimeData"][0], Value::Null);
    assert!(value["solarNoonData"][0].is_f64());
}

#[test]
fn strategy_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(Strategy::Approximate).unwrap(),
        json!("approximate")
    );
    let parsed: Strategy = serde_json::from_value(json!("precision")).unwrap();
    assert_eq!(parsed, Strategy::Precision);
}
