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
use crate::expenses::expense::{Category, NewExpense, PaymentMethod};
use crate::util::date::{Date, Period};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
	#[error("missing {0}")]
	Missing(&'static str),

	#[error("invalid date '{0}' (expected YYYY-MM-DD)")]
	InvalidDate(String),

	#[error("invalid month '{0}' (expected YYYY-MM)")]
	InvalidPeriod(String),

	#[error("invalid value '{0}' (expected a positive amount)")]
	InvalidValue(String),

	#[error("value '{0}' is too large (must be below 10000000000000)")]
	ValueTooLarge(String),

	#[error("value '{0}' has more than 2 decimal places")]
	ValueTooPrecise(String),

	#[error("unknown payment method '{0}' (expected credit or debit)")]
	UnknownPaymentMethod(String),

	#[error("unknown category '{0}'")]
	UnknownCategory(String),

	#[error("subcategory '{subcategory}' does not exist in category '{category}'")]
	UnknownSubcategory {
		category: String,
		subcategory: String,
	},

	#[error("card closing day must be between 1 and 31, got {0}")]
	ClosingDayOutOfRange(u8),
}

/// Raw, unchecked expense fields as they arrive from the user. Turning a
/// draft into a `NewExpense` is the only way input reaches the store.
#[derive(Clone, Debug, Default)]
pub struct ExpenseDraft {
	pub value: Option<String>,
	pub payment_method: Option<String>,
	pub date: Option<String>,
	pub category: Option<String>,
	pub subcategory: Option<String>,
	pub description: Option<String>,
}

impl ExpenseDraft {
	/// A draft holding every field of an existing expense.
	pub fn from_expense(data: &NewExpense) -> Self {
		Self {
			value: Some(data.value.to_string()),
			payment_method: Some(data.payment_method.key().to_string()),
			date: Some(data.date.to_string()),
			category: Some(data.category.key().to_string()),
			subcategory: Some(data.subcategory.clone()),
			description: data.description.clone(),
		}
	}

	/// Applies the fields set in `changes` over this draft. Switching to a
	/// different category without naming a subcategory clears the old one,
	/// since it belonged to the previous category.
	pub fn overlay(self, changes: ExpenseDraft) -> Self {
		let category_changed = changes.category.is_some()
			&& changes.category != self.category;

		let subcategory = match changes.subcategory {
			Some(s) => Some(s),
			None if category_changed => None,
			None => self.subcategory,
		};

		Self {
			value: changes.value.or(self.value),
			payment_method: changes.payment_method.or(self.payment_method),
			date: changes.date.or(self.date),
			category: changes.category.or(self.category),
			subcategory,
			description: changes.description.or(self.description),
		}
	}

	/// Applies this draft as an edit of `base`. The subcategory is only
	/// checked against its category when the edit changes either of them,
	/// so records with a subcategory from elsewhere stay editable.
	pub fn apply_to(
		self,
		base: &NewExpense,
	) -> Result<NewExpense, ValidationError> {
		if self.category.is_some() || self.subcategory.is_some() {
			return ExpenseDraft::from_expense(base).overlay(self).validate();
		}

		let mut unchecked = ExpenseDraft::from_expense(base);
		unchecked.subcategory = None;

		let mut data = unchecked.overlay(self).validate()?;
		data.subcategory = base.subcategory.clone();
		Ok(data)
	}

	pub fn validate(self) -> Result<NewExpense, ValidationError> {
		let value = parse_value(
			self.value.as_deref().ok_or(ValidationError::Missing("value"))?,
		)?;

		let method = self
			.payment_method
			.as_deref()
			.ok_or(ValidationError::Missing("payment method"))?;
		let payment_method = PaymentMethod::from_key(method.trim())
			.ok_or_else(|| ValidationError::UnknownPaymentMethod(method.to_string()))?;

		let date =
			parse_date(self.date.as_deref().ok_or(ValidationError::Missing("date"))?)?;

		let cat = self
			.category
			.as_deref()
			.ok_or(ValidationError::Missing("category"))?;
		let category = Category::from_key(cat.trim())
			.ok_or_else(|| ValidationError::UnknownCategory(cat.to_string()))?;

		let subcategory = self.subcategory.unwrap_or_default().trim().to_string();
		if !subcategory.is_empty()
			&& category.subcategory_label(&subcategory).is_none()
		{
			return Err(ValidationError::UnknownSubcategory {
				category: category.key().to_string(),
				subcategory,
			});
		}

		let description = self
			.description
			.map(|d| d.trim().to_string())
			.filter(|d| !d.is_empty());

		Ok(NewExpense {
			value,
			payment_method,
			date,
			category,
			subcategory,
			description,
		})
	}
}

/// Values are stored as JSON numbers, so they are kept to cents and to a
/// magnitude a double holds exactly.
const MAX_VALUE_DECIMALS: u32 = 2;
const VALUE_LIMIT: i64 = 10_000_000_000_000;

/// Parses a strictly positive amount. A lone comma is accepted as the
/// decimal separator ("12,50").
pub fn parse_value(input: &str) -> Result<Decimal, ValidationError> {
	let trimmed = input.trim();
	let normalized = if trimmed.contains('.') {
		trimmed.to_string()
	} else {
		trimmed.replacen(',', ".", 1)
	};

	let value = match Decimal::from_str(&normalized) {
		Ok(v) if v > Decimal::ZERO => v.normalize(),
		_ => return Err(ValidationError::InvalidValue(input.to_string())),
	};

	if value >= Decimal::from(VALUE_LIMIT) {
		return Err(ValidationError::ValueTooLarge(input.to_string()));
	}
	if value.scale() > MAX_VALUE_DECIMALS {
		return Err(ValidationError::ValueTooPrecise(input.to_string()));
	}

	Ok(value)
}

pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
	Date::from_str(input.trim())
		.map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

pub fn parse_period(input: &str) -> Result<Period, ValidationError> {
	Period::from_str(input.trim())
		.map_err(|_| ValidationError::InvalidPeriod(input.to_string()))
}

pub fn check_closing_day(day: u8) -> Result<u8, ValidationError> {
	if (1..=31).contains(&day) {
		Ok(day)
	} else {
		Err(ValidationError::ClosingDayOutOfRange(day))
	}
}
