//! Dates, times and time zones.
//!
//! All offsets are computed from "now" at call time. Zones come from the
//! IANA database bundled with `chrono-tz`.

use chrono_tz::{TZ_VARIANTS, Tz};
use rand::Rng;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time};

use crate::algorithm::GenerationAlgorithm;
use crate::error::SynthesisError;
use crate::primitives::{random_int_below, random_int_with};

/// Default distance in days for [`random_date`].
pub const DEFAULT_DATE_WINDOW_DAYS: i32 = 10_000;

/// Oldest birthday, in days before today.
const BIRTHDAY_OLDEST_DAYS: i64 = 20_000;

/// Youngest birthday, in days before today.
const BIRTHDAY_YOUNGEST_DAYS: i64 = 3_000;

/// Distance in days for [`random_local_date`].
const LOCAL_DATE_WINDOW_DAYS: i64 = 1_000_000;

const SECONDS_PER_DAY: i64 = 86_400;

/// `date` moved forward by a day count in `[0, range_days)`.
pub fn random_date_after(
    rng: &mut impl Rng,
    date: OffsetDateTime,
    range_days: i32,
) -> Result<OffsetDateTime, SynthesisError> {
    let days = random_int_below(rng, range_days)?;
    checked_shift(date, Duration::days(i64::from(days)))
}

/// `date` moved back by a day count in `[0, range_days)`.
pub fn random_date_before(
    rng: &mut impl Rng,
    date: OffsetDateTime,
    range_days: i32,
) -> Result<OffsetDateTime, SynthesisError> {
    let days = random_int_below(rng, range_days)?;
    checked_shift(date, -Duration::days(i64::from(days)))
}

fn checked_shift(date: OffsetDateTime, by: Duration) -> Result<OffsetDateTime, SynthesisError> {
    date.checked_add(by)
        .ok_or_else(|| SynthesisError::invalid(format!("{date} shifted by {by} is out of range")))
}

/// Now, moved up to [`DEFAULT_DATE_WINDOW_DAYS`] days in either direction.
pub fn random_date(rng: &mut impl Rng) -> OffsetDateTime {
    let window = i64::from(DEFAULT_DATE_WINDOW_DAYS);
    OffsetDateTime::now_utc() + Duration::days(rng.gen_range(1 - window..window))
}

/// Now, moved up to `window_days` days in either direction.
pub fn random_date_within(
    rng: &mut impl Rng,
    window_days: i32,
) -> Result<OffsetDateTime, SynthesisError> {
    random_date_with(rng, window_days, GenerationAlgorithm::default())
}

/// Like [`random_date_within`], drawing the day count with `algorithm`.
pub fn random_date_with(
    rng: &mut impl Rng,
    window_days: i32,
    algorithm: GenerationAlgorithm,
) -> Result<OffsetDateTime, SynthesisError> {
    let forward: bool = rng.r#gen();
    let days = Duration::days(i64::from(random_int_with(rng, window_days, algorithm)?));
    checked_shift(OffsetDateTime::now_utc(), if forward { days } else { -days })
}

/// Linear interpolation between `start` and `end`, both inclusive.
pub fn random_date_between(
    rng: &mut impl Rng,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<OffsetDateTime, SynthesisError> {
    if end < start {
        return Err(SynthesisError::invalid(format!("{end} is before {start}")));
    }
    let unit: f64 = rng.r#gen();
    let span = (end - start).whole_nanoseconds();
    let offset = ((span as f64 * unit) as i128).clamp(0, span);
    let offset = Duration::new(
        (offset / 1_000_000_000) as i64,
        (offset % 1_000_000_000) as i32,
    );
    Ok((start + offset).clamp(start, end))
}

/// A birth date between roughly 55 and 8 years ago.
pub fn random_birthday(rng: &mut impl Rng) -> Result<OffsetDateTime, SynthesisError> {
    let now = OffsetDateTime::now_utc();
    random_date_between(
        rng,
        now - Duration::days(BIRTHDAY_OLDEST_DAYS),
        now - Duration::days(BIRTHDAY_YOUNGEST_DAYS),
    )
}

/// Today, moved up to a million days in either direction.
pub fn random_local_date(rng: &mut impl Rng) -> Result<Date, SynthesisError> {
    let today = OffsetDateTime::now_utc().date();
    let days = rng.gen_range(-LOCAL_DATE_WINDOW_DAYS..=LOCAL_DATE_WINDOW_DAYS);
    today.checked_add(Duration::days(days)).ok_or_else(|| {
        SynthesisError::invalid(format!("{today} shifted by {days} days is out of range"))
    })
}

/// The current time of day, moved by less than a day and wrapped at midnight.
pub fn random_local_time(rng: &mut impl Rng) -> Time {
    let seconds = rng.gen_range(1 - SECONDS_PER_DAY..SECONDS_PER_DAY);
    OffsetDateTime::now_utc().time() + Duration::seconds(seconds)
}

pub fn random_local_date_time(rng: &mut impl Rng) -> Result<PrimitiveDateTime, SynthesisError> {
    let date = random_local_date(rng)?;
    Ok(PrimitiveDateTime::new(date, random_local_time(rng)))
}

/// Any zone of the bundled IANA database.
pub fn random_zone_id(rng: &mut impl Rng) -> Tz {
    TZ_VARIANTS[rng.gen_range(0..TZ_VARIANTS.len())]
}
