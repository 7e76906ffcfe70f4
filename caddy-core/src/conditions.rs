//! Distance adjustments for weather and elevation.
//!
//! Impacts are in yards; positive values make the ball travel further. Wind
//! directions are compass bearings in degrees (0 = north) describing where the
//! wind blows towards relative to the shot bearing.

#![expect(
    clippy::float_arithmetic,
    reason = "weather terms are floating-point yardages"
)]

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::lookup::round_to;

const WIND_YARDS_PER_MPH: f64 = 0.8;
const BASELINE_TEMPERATURE_F: f64 = 70.0;
const BASELINE_HUMIDITY: f64 = 50.0;
const FEET_PER_YARD_OF_ELEVATION: f64 = 100.0;
const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Weather observed at the course.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weather {
    /// Air temperature in degrees Fahrenheit.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed in mph.
    pub wind_speed: f64,
    /// Wind bearing in degrees.
    pub wind_direction: f64,
    /// Free-text conditions such as `"Light rain"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions: String,
}

/// Breakdown of how the weather changes a shot's distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherImpact {
    /// Along-line wind component.
    pub wind_yards: f64,
    /// Air temperature term.
    pub temperature_yards: f64,
    /// Humidity term; never positive.
    pub humidity_yards: f64,
    /// Elevation change term.
    pub elevation_yards: f64,
    /// Sum of the unrounded terms.
    pub total_yards: f64,
    /// Advice lines for the player, in the order the terms are evaluated.
    pub advice: Vec<String>,
}

/// Distance gained from the along-line wind component.
///
/// # Examples
/// ```
/// use caddy_core::wind_effect;
///
/// assert!((wind_effect(10.0, 0.0, 0.0) - 8.0).abs() < 1e-9);
/// assert!((wind_effect(10.0, 180.0, 0.0) + 8.0).abs() < 1e-9);
/// assert!(wind_effect(10.0, 90.0, 0.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn wind_effect(wind_speed: f64, wind_direction: f64, shot_direction: f64) -> f64 {
    let mut relative = (wind_direction - shot_direction).rem_euclid(360.0);
    if relative > 180.0 {
        relative -= 360.0;
    }
    wind_speed * relative.to_radians().cos() * WIND_YARDS_PER_MPH
}

fn club_advice(total: f64) -> Option<String> {
    let magnitude = total.abs();
    let direction = if total > 0.0 { "less" } else { "more" };
    if magnitude >= 15.0 {
        let clubs = (magnitude / 10.0).round();
        let plural = if clubs > 1.0 { "s" } else { "" };
        Some(format!("Consider using {clubs} club{plural} {direction}"))
    } else if magnitude >= 8.0 {
        Some(format!("Consider using one club {direction}"))
    } else {
        None
    }
}

/// Work out every weather and elevation term for a shot.
///
/// `elevation_ft` is the rise from ball to target in feet.
///
/// # Examples
/// ```
/// use caddy_core::{Weather, weather_impact};
///
/// let weather = Weather {
///     temperature: 50.0,
///     humidity: 40.0,
///     wind_speed: 0.0,
///     wind_direction: 0.0,
///     conditions: "Clear".into(),
/// };
/// let impact = weather_impact(&weather, 0.0, 0.0);
/// assert_eq!(impact.temperature_yards, -2.0);
/// assert_eq!(impact.advice, ["Cold air: ball travels 2 yards less"]);
/// ```
#[must_use]
pub fn weather_impact(weather: &Weather, elevation_ft: f64, shot_direction: f64) -> WeatherImpact {
    let mut advice = Vec::new();

    let wind = wind_effect(weather.wind_speed, weather.wind_direction, shot_direction);
    if wind > 0.0 {
        advice.push(format!("Tailwind adds {} yards", wind.round()));
    } else if wind < 0.0 {
        advice.push(format!("Headwind reduces {} yards", wind.round().abs()));
    }

    let temperature = (weather.temperature - BASELINE_TEMPERATURE_F) / 10.0;
    if temperature.abs() >= 1.0 {
        if weather.temperature < 60.0 {
            advice.push(format!(
                "Cold air: ball travels {} yards less",
                temperature.round().abs()
            ));
        } else if weather.temperature > 80.0 {
            advice.push(format!(
                "Hot air: ball travels {} yards more",
                temperature.round()
            ));
        }
    }

    let humidity = if weather.humidity > BASELINE_HUMIDITY {
        -((weather.humidity - BASELINE_HUMIDITY) / 10.0)
    } else {
        0.0
    };
    if humidity.abs() >= 1.0 {
        advice.push(format!(
            "High humidity: ball travels {} yards less",
            humidity.round().abs()
        ));
    }

    let elevation = elevation_ft / FEET_PER_YARD_OF_ELEVATION;
    if elevation.abs() >= 1.0 {
        if elevation_ft > 0.0 {
            advice.push(format!("Uphill: add {} yards", elevation.round()));
        } else {
            advice.push(format!(
                "Downhill: subtract {} yards",
                elevation.round().abs()
            ));
        }
    }

    let total = wind + temperature + humidity + elevation;
    advice.extend(club_advice(total));

    WeatherImpact {
        wind_yards: round_to(wind, 1),
        temperature_yards: round_to(temperature, 1),
        humidity_yards: round_to(humidity, 1),
        elevation_yards: round_to(elevation, 1),
        total_yards: round_to(total, 1),
        advice,
    }
}

/// Carry after the weather and elevation terms, rounded to whole yards.
#[must_use]
pub fn adjusted_carry(
    carry: f64,
    weather: &Weather,
    elevation_ft: f64,
    shot_direction: f64,
) -> f64 {
    (carry + weather_impact(weather, elevation_ft, shot_direction).total_yards).round()
}

/// A club in the bag with its stock carry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BagClub {
    /// Club name.
    pub name: String,
    /// Stock carry in yards.
    pub carry_yards: f64,
}

/// Club chosen by [`club_for_distance`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClubFit {
    /// The chosen club.
    pub club: BagClub,
    /// Its carry under the current conditions.
    pub adjusted_distance: f64,
    /// The conditions breakdown behind the adjustment.
    pub impact: WeatherImpact,
}

/// Pick the club whose adjusted carry lands closest to `target`.
///
/// Clubs are compared longest first, so on a tie the longer club wins.
/// Returns `None` for an empty bag.
///
/// # Examples
/// ```
/// use caddy_core::{BagClub, Weather, club_for_distance};
///
/// let bag = [
///     BagClub { name: "9-Iron".into(), carry_yards: 130.0 },
///     BagClub { name: "7-Iron".into(), carry_yards: 150.0 },
/// ];
/// let still = Weather {
///     temperature: 70.0,
///     humidity: 50.0,
///     wind_speed: 0.0,
///     wind_direction: 0.0,
///     conditions: String::new(),
/// };
/// let fit = club_for_distance(148.0, &bag, &still, 0.0, 0.0);
/// assert_eq!(fit.map(|fit| fit.club.name).as_deref(), Some("7-Iron"));
/// ```
#[must_use]
pub fn club_for_distance(
    target: f64,
    clubs: &[BagClub],
    weather: &Weather,
    elevation_ft: f64,
    shot_direction: f64,
) -> Option<ClubFit> {
    let impact = weather_impact(weather, elevation_ft, shot_direction);
    let mut longest_first: Vec<&BagClub> = clubs.iter().collect();
    longest_first.sort_by(|a, b| b.carry_yards.total_cmp(&a.carry_yards));

    let mut best: Option<(&BagClub, f64, f64)> = None;
    for club in longest_first {
        let adjusted = (club.carry_yards + impact.total_yards).round();
        let difference = (target - adjusted).abs();
        if best.is_none_or(|(_, _, best_difference)| difference < best_difference) {
            best = Some((club, adjusted, difference));
        }
    }
    best.map(|(club, adjusted_distance, _)| ClubFit {
        club: club.clone(),
        adjusted_distance,
        impact,
    })
}

/// How demanding the conditions make a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ShotDifficulty {
    /// Fewer than 2 difficulty points.
    Easy,
    /// 2 or 3 points.
    Moderate,
    /// 4 to 6 points.
    Difficult,
    /// 7 points or more.
    VeryDifficult,
}

impl ShotDifficulty {
    const fn from_points(points: u8) -> Self {
        match points {
            0 | 1 => Self::Easy,
            2 | 3 => Self::Moderate,
            4..=6 => Self::Difficult,
            _ => Self::VeryDifficult,
        }
    }

    /// Lower-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
            Self::VeryDifficult => "very-difficult",
        }
    }
}

impl fmt::Display for ShotDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn wind_points(speed: f64) -> u8 {
    if speed > 25.0 {
        3
    } else if speed > 15.0 {
        2
    } else {
        u8::from(speed > 10.0)
    }
}

fn temperature_points(temperature: f64) -> u8 {
    if !(40.0..=95.0).contains(&temperature) {
        2
    } else {
        u8::from(!(50.0..=85.0).contains(&temperature))
    }
}

fn elevation_points(elevation_ft: f64) -> u8 {
    let factor = elevation_ft.abs() / 30.0;
    if factor > 2.0 {
        2
    } else {
        u8::from(factor > 1.0)
    }
}

fn distance_points(distance: f64) -> u8 {
    if distance > 200.0 {
        2
    } else {
        u8::from(distance > 150.0)
    }
}

fn sky_points(conditions: &str) -> u8 {
    let lower = conditions.to_lowercase();
    let rain = if lower.contains("rain") { 2 } else { 0 };
    let storm = if lower.contains("storm") { 3 } else { 0 };
    rain + storm
}

/// Rate a shot from the weather, elevation change and distance.
///
/// # Examples
/// ```
/// use caddy_core::{ShotDifficulty, Weather, shot_difficulty};
///
/// let storm = Weather {
///     temperature: 45.0,
///     humidity: 90.0,
///     wind_speed: 30.0,
///     wind_direction: 270.0,
///     conditions: "Thunderstorm".into(),
/// };
/// assert_eq!(shot_difficulty(&storm, 0.0, 120.0), ShotDifficulty::VeryDifficult);
/// ```
#[must_use]
pub fn shot_difficulty(weather: &Weather, elevation_ft: f64, distance: f64) -> ShotDifficulty {
    let points = wind_points(weather.wind_speed)
        + temperature_points(weather.temperature)
        + elevation_points(elevation_ft)
        + distance_points(distance)
        + sky_points(&weather.conditions);
    ShotDifficulty::from_points(points)
}

/// Name the 16-point compass direction nearest to `degrees`.
///
/// # Examples
/// ```
/// use caddy_core::compass_point;
///
/// assert_eq!(compass_point(0.0), "N");
/// assert_eq!(compass_point(225.0), "SW");
/// assert_eq!(compass_point(350.0), "N");
/// assert_eq!(compass_point(-90.0), "W");
/// ```
#[must_use]
pub fn compass_point(degrees: f64) -> &'static str {
    let sector = (degrees.rem_euclid(360.0) / 22.5).round();
    (0_u8..)
        .zip(COMPASS)
        .find(|(position, _)| (f64::from(*position) - sector).abs() < 0.5)
        .map_or("N", |(_, point)| point)
}
