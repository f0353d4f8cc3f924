use arrow::array::TimestampNanosecondArray;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use crate::error::{FixtureError, FixtureResult};

/// Date, time and `+HH:MM` offset, e.g. `1970-01-01 01:23:45.678+02:00`.
pub const OFFSET_LITERAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

pub fn parse_offset_literal(literal: &str) -> FixtureResult<DateTime<FixedOffset>> {
	DateTime::parse_from_str(literal, OFFSET_LITERAL_FORMAT)
		.map_err(|source| FixtureError::InvalidTimestamp {
			literal: literal.to_string(),
			source,
		})
}

pub fn normalize_to_utc(instants: &[DateTime<FixedOffset>]) -> Vec<DateTime<Utc>> {
	instants.iter()
		.map(|dt| dt.with_timezone(&Utc))
		.collect()
}

/// Drops the zone: values are the UTC wall-clock readings with no timezone attached.
pub fn naive_column(instants: &[DateTime<Utc>]) -> FixtureResult<TimestampNanosecondArray> {
	let values = instants.iter()
		.map(|dt| naive_nanos(&dt.naive_utc()))
		.collect::<FixtureResult<Vec<i64>>>()?;
	
	Ok(TimestampNanosecondArray::from(values))
}

/// Localizes every instant into `zone` (an IANA name such as `Europe/Berlin` or `UTC`)
/// and tags the column with that zone. The stored values stay epoch-relative, so the
/// absolute instants are unchanged.
pub fn zoned_column(instants: &[DateTime<Utc>], zone: &str) -> FixtureResult<TimestampNanosecondArray> {
	let tz = resolve_zone(zone)?;
	let values = instants.iter()
		.map(|dt| instant_nanos(&dt.with_timezone(&tz)))
		.collect::<FixtureResult<Vec<i64>>>()?;
	
	Ok(TimestampNanosecondArray::from(values).with_timezone(tz.name()))
}

pub fn resolve_zone(zone: &str) -> FixtureResult<Tz> {
	zone.parse::<Tz>()
		.map_err(|_| FixtureError::UnknownTimezone(zone.to_string()))
}

fn naive_nanos(naive: &NaiveDateTime) -> FixtureResult<i64> {
	naive.and_utc()
		.timestamp_nanos_opt()
		.ok_or_else(|| FixtureError::TimestampOutOfRange(naive.to_string()))
}

fn instant_nanos<Z: TimeZone>(dt: &DateTime<Z>) -> FixtureResult<i64> {
	dt.timestamp_nanos_opt()
		.ok_or_else(|| FixtureError::TimestampOutOfRange(dt.naive_utc().to_string()))
}
