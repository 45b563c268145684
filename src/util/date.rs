/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */

use anyhow::{bail, Error};
use chrono::{Datelike, Local, NaiveDate};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// A calendar date with no time component. Always valid once constructed.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Date {
	year: u32,
	month: u8,
	day: u8,
}

/// A calendar month of a given year. Months are 1-based.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Period {
	year: u32,
	month: u8,
}

impl Date {
	/// Constructor to parse a string in the strict "YYYY-MM-DD" format
	pub fn from_str(date_str: &str) -> Result<Date, Error> {
		let parts: Vec<&str> = date_str.split('-').collect();
		if parts.len() != 3
			|| parts[0].len() != 4
			|| parts[1].len() != 2
			|| parts[2].len() != 2
		{
			bail!("Date format must be YYYY-MM-DD");
		}

		if !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
			bail!("Date format must be YYYY-MM-DD");
		}

		let year = parts[0].parse::<u32>()?;
		let month = parts[1].parse::<u8>()?;
		let day = parts[2].parse::<u8>()?;

		Date::new(year, month, day)
	}

	pub fn new(year: u32, month: u8, day: u8) -> Result<Date, Error> {
		if !Date::is_valid_date(year, month, day) {
			bail!("Invalid date");
		}

		Ok(Date { year, month, day })
	}

	pub fn today() -> Date {
		Date::from(Local::now().date_naive())
	}

	pub fn day(&self) -> u8 {
		self.day
	}

	/// The calendar month this date falls in
	pub fn period(&self) -> Period {
		Period {
			year: self.year,
			month: self.month,
		}
	}

	fn is_leap_year(year: u32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	fn days_in_month(year: u32, month: u8) -> u8 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Date::is_leap_year(year) {
					29
				} else {
					28
				}
			},
			_ => 0, // Invalid month
		}
	}

	fn is_valid_date(year: u32, month: u8, day: u8) -> bool {
		if year == 0 || !(1..=12).contains(&month) {
			return false;
		}
		if day < 1 || day > Date::days_in_month(year, month) {
			return false;
		}
		true
	}
}

impl From<NaiveDate> for Date {
	fn from(d: NaiveDate) -> Self {
		Date {
			year: d.year().max(1) as u32,
			month: d.month() as u8,
			day: d.day() as u8,
		}
	}
}

impl PartialOrd for Date {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Date {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.year, self.month, self.day).cmp(&(
			other.year,
			other.month,
			other.day,
		))
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

impl Serialize for Date {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

struct DateVisitor;

impl Visitor<'_> for DateVisitor {
	type Value = Date;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "a date string in the YYYY-MM-DD format")
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Date, E> {
		Date::from_str(v).map_err(|e| E::custom(format!("{}: {}", e, v)))
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
		deserializer.deserialize_str(DateVisitor)
	}
}

impl Period {
	pub fn new(year: u32, month: u8) -> Result<Period, Error> {
		if year == 0 || !(1..=12).contains(&month) {
			bail!("Invalid month: {:04}-{:02}", year, month);
		}

		Ok(Period { year, month })
	}

	/// Constructor to parse a string in the "YYYY-MM" format
	pub fn from_str(period_str: &str) -> Result<Period, Error> {
		let parts: Vec<&str> = period_str.split('-').collect();
		if parts.len() != 2 || parts[0].len() != 4 || parts[1].len() != 2 {
			bail!("Month format must be YYYY-MM");
		}

		if !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
			bail!("Month format must be YYYY-MM");
		}

		let year = parts[0].parse::<u32>()?;
		let month = parts[1].parse::<u8>()?;

		Period::new(year, month)
	}

	/// The month after this one, rolling December into January.
	pub fn next(&self) -> Period {
		if self.month == 12 {
			Period {
				year: self.year + 1,
				month: 1,
			}
		} else {
			Period {
				year: self.year,
				month: self.month + 1,
			}
		}
	}

	/// The month before this one, rolling January back into December.
	/// Saturates at January of year 1.
	pub fn prev(&self) -> Period {
		match (self.year, self.month) {
			(1, 1) => *self,
			(y, 1) => Period {
				year: y - 1,
				month: 12,
			},
			(y, m) => Period {
				year: y,
				month: m - 1,
			},
		}
	}

	/// Human-readable label such as "January 2025"
	pub fn label(&self) -> String {
		format!("{} {}", MONTH_NAMES[self.month as usize - 1], self.year)
	}
}

impl fmt::Display for Period {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}", self.year, self.month)
	}
}
