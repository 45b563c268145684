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
use crate::util::date::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
	Credit,
	Debit,
}

/// The closed set of spending categories. Serialized by key, which is what
/// the stored documents have always used.
#[derive(
	Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Saude,
	Moradia,
	Mercado,
	Transporte,
	Lazer,
}

/// A recorded expense. Only the store hands these out; everything upstream
/// works with a `NewExpense` until an id has been assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
	pub id: String,
	pub value: Decimal,
	pub payment_method: PaymentMethod,
	pub date: Date,
	pub category: Category,
	#[serde(default)]
	pub subcategory: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// An expense that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
	pub value: Decimal,
	pub payment_method: PaymentMethod,
	pub date: Date,
	pub category: Category,
	#[serde(default)]
	pub subcategory: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl Expense {
	pub fn with_id(id: String, data: NewExpense) -> Self {
		Self {
			id,
			value: data.value,
			payment_method: data.payment_method,
			date: data.date,
			category: data.category,
			subcategory: data.subcategory,
			description: data.description,
		}
	}

	/// The record's data without its id, e.g. as a base for edits.
	pub fn to_new(&self) -> NewExpense {
		NewExpense {
			value: self.value,
			payment_method: self.payment_method,
			date: self.date,
			category: self.category,
			subcategory: self.subcategory.clone(),
			description: self.description.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rust_decimal_macros::dec;

	fn sample() -> NewExpense {
		NewExpense {
			value: dec!(42.9),
			payment_method: PaymentMethod::Credit,
			date: Date::from_str("2025-01-06").unwrap(),
			category: Category::Transporte,
			subcategory: "uber-99".to_string(),
			description: None,
		}
	}

	#[test]
	fn test_stored_field_names() {
		let expense = Expense::with_id("abc".to_string(), sample());
		let json = serde_json::to_value(&expense).unwrap();

		assert_eq!(json["id"], "abc");
		assert_eq!(json["paymentMethod"], "credit");
		assert_eq!(json["date"], "2025-01-06");
		assert_eq!(json["category"], "transporte");
		assert_eq!(json["subcategory"], "uber-99");
		assert!(json["value"].is_number());
		assert!(json.get("description").is_none());
	}

	#[test]
	fn test_reads_record_without_subcategory() {
		let json = r#"{
			"id": "1",
			"value": 10.5,
			"paymentMethod": "debit",
			"date": "2025-02-01",
			"category": "mercado"
		}"#;
		let expense: Expense = serde_json::from_str(json).unwrap();

		assert_eq!(expense.value, dec!(10.5));
		assert_eq!(expense.payment_method, PaymentMethod::Debit);
		assert_eq!(expense.category, Category::Mercado);
		assert!(expense.subcategory.is_empty());
		assert!(expense.description.is_none());
	}

	#[test]
	fn test_rejects_unknown_category() {
		let json = r#"{
			"id": "1",
			"value": 10,
			"paymentMethod": "debit",
			"date": "2025-02-01",
			"category": "pets"
		}"#;
		assert!(serde_json::from_str::<Expense>(json).is_err());
	}

	#[test]
	fn test_with_id_and_back() {
		let data = sample();
		let expense = Expense::with_id("xyz".to_string(), data.clone());
		assert_eq!(expense.id, "xyz");
		assert_eq!(expense.to_new(), data);
	}
}
