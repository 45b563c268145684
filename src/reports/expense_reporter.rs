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
use crate::expenses::expense::{Category, Expense};
use crate::reports::table::Table;
use crate::util::amount::Amount;
use crate::util::date::Period;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Spend in one category as a share of a report's total.
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryShare {
	pub category: Category,
	pub total: Decimal,
	/// Percentage of the report total, one decimal place
	pub percent: Decimal,
}

pub struct ExpenseReporter {
	expenses: Vec<Expense>,
	symbol: String,
}

impl ExpenseReporter {
	/// Takes the expenses to report on, ordered newest first. Expenses on
	/// the same date keep the order they were given in.
	pub fn new(mut expenses: Vec<Expense>, symbol: &str) -> Self {
		expenses.sort_by(|a, b| b.date.cmp(&a.date));

		Self {
			expenses,
			symbol: symbol.to_string(),
		}
	}

	pub fn total(&self) -> Amount {
		Amount::sum(self.expenses.iter().map(|e| e.value), &self.symbol)
	}

	/// Totals per category, largest first. Categories without spend are
	/// left out.
	pub fn breakdown(&self) -> Vec<CategoryShare> {
		let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
		for expense in &self.expenses {
			let total = totals.entry(expense.category).or_insert(Decimal::ZERO);
			*total = total.saturating_add(expense.value);
		}

		let grand_total = self.total().value;
		let mut shares: Vec<CategoryShare> = totals
			.into_iter()
			.map(|(category, total)| CategoryShare {
				category,
				total,
				percent: total
					.checked_div(grand_total)
					.and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
					.map(|p| p.round_dp(1))
					.unwrap_or(Decimal::ZERO),
			})
			.collect();

		// stable, so ties stay in category order
		shares.sort_by(|a, b| b.total.cmp(&a.total));
		shares
	}

	/// Every expense, one per line.
	pub fn listing(&self) -> String {
		if self.expenses.is_empty() {
			return "No expenses\n".to_string();
		}

		let mut table = Table::new(6);
		table.right_align(vec![3]);
		table.add_header(vec![
			"Date",
			"Payment",
			"Category",
			"Amount",
			"Description",
			"Id",
		]);
		table.add_separator();

		for expense in &self.expenses {
			table.add_row(vec![
				expense.date.to_string(),
				expense.payment_method.label().to_string(),
				category_cell(expense),
				Amount::new(expense.value, &self.symbol).to_string(),
				expense.description.clone().unwrap_or_default(),
				expense.id.clone(),
			]);
		}

		table.render()
	}

	/// Summary, category breakdown and listing for one billing period.
	/// The reporter is expected to hold that period's expenses only.
	pub fn month_report(&self, period: Period, closing_day: u8) -> String {
		let mut out = format!(
			"{} billing period (card closing day {})\n",
			period.label(),
			closing_day
		);

		if self.expenses.is_empty() {
			out.push_str("No expenses\n");
			return out;
		}

		let count = self.expenses.len();
		out.push_str(&format!(
			"Total: {} ({} {})\n\n",
			self.total(),
			count,
			if count == 1 { "expense" } else { "expenses" }
		));

		let mut table = Table::new(3);
		table.right_align(vec![1, 2]);
		table.add_header(vec!["Category", "Amount", "Share"]);
		table.add_separator();
		for share in self.breakdown() {
			table.add_row(vec![
				share.category.label().to_string(),
				Amount::new(share.total, &self.symbol).to_string(),
				format!("{:.1}%", share.percent),
			]);
		}

		out.push_str(&table.render());
		out.push('\n');
		out.push_str(&self.listing());
		out
	}
}

fn category_cell(expense: &Expense) -> String {
	let category = expense.category.label();
	if expense.subcategory.is_empty() {
		return category.to_string();
	}

	let sub = expense
		.category
		.subcategory_label(&expense.subcategory)
		.unwrap_or(expense.subcategory.as_str());
	format!("{} / {}", category, sub)
}
