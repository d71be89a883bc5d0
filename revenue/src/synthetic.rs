//! Synthetic daily sales for one calendar year.
//!
//! Revenue starts from a uniformly drawn base and is scaled up on weekends,
//! holidays and in December, and down in January.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::error::RevenueError;
use crate::record::{DayFeatures, SalesRecord};
use crate::Result;

pub const DAYS_PER_YEAR: usize = 365;

/// Fixed-date holidays as `(month, day)`.
pub const HOLIDAYS: [(u32, u32); 8] = [
    (1, 1),
    (4, 21),
    (5, 1),
    (9, 7),
    (10, 12),
    (11, 2),
    (11, 15),
    (12, 25),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SalesProfile {
    /// Lowest base revenue of a day.
    pub base: f64,
    /// Width of the uniform draw added on top of `base`. Zero makes generation deterministic.
    pub spread: f64,
    /// Applied on day-of-week 6 and 7.
    pub weekend_factor: f64,
    pub holiday_factor: f64,
    pub december_factor: f64,
    pub january_factor: f64,
}

impl Default for SalesProfile {
    fn default() -> Self {
        Self {
            base: 15_000.0,
            spread: 5_000.0,
            weekend_factor: 1.3,
            holiday_factor: 1.5,
            december_factor: 1.4,
            january_factor: 0.8,
        }
    }
}

impl SalesProfile {
    /// Default multipliers around a constant base at the middle of the default draw.
    pub fn noise_free() -> Self {
        let profile = Self::default();
        Self {
            base: profile.base + profile.spread / 2.0,
            spread: 0.0,
            ..profile
        }
    }

    pub fn revenue<R: Rng + ?Sized>(&self, day: &DayFeatures, rng: &mut R) -> f64 {
        let mut revenue = self.base;
        if self.spread > 0.0 {
            revenue += rng.gen::<f64>() * self.spread;
        }

        if day.day_of_week == 6 || day.day_of_week == 7 {
            revenue *= self.weekend_factor;
        }
        if day.is_holiday {
            revenue *= self.holiday_factor;
        }
        match day.month {
            12 => revenue *= self.december_factor,
            1 => revenue *= self.january_factor,
            _ => {}
        }

        // Whole cents
        (revenue * 100.0).round() / 100.0
    }
}

pub fn is_holiday(month: u32, day: u32) -> bool {
    HOLIDAYS.contains(&(month, day))
}

pub fn day_features(date: NaiveDate) -> DayFeatures {
    DayFeatures {
        day_of_year: date.ordinal() as u16,
        day_of_month: date.day() as u8,
        day_of_week: date.weekday().number_from_sunday() as u8,
        month: date.month() as u8,
        is_holiday: is_holiday(date.month(), date.day()),
    }
}

/// One record for each of the first 365 days of `year`.
pub fn generate_year<R: Rng + ?Sized>(
    year: i32,
    profile: &SalesProfile,
    rng: &mut R,
) -> Result<Vec<SalesRecord>> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(RevenueError::InvalidYear(year))?;

    let records = first
        .iter_days()
        .take(DAYS_PER_YEAR)
        .map(|date| {
            let day = day_features(date);
            SalesRecord::new(day, profile.revenue(&day, rng))
        })
        .collect::<Vec<_>>();

    if records.len() < DAYS_PER_YEAR {
        return Err(RevenueError::InvalidYear(year));
    }

    log::debug!("Generated {} days of sales for {}", records.len(), year);
    Ok(records)
}
