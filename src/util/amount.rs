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
use rust_decimal::Decimal;
use std::fmt;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// A decimal value paired with the currency symbol it is displayed with.
/// Always renders with two decimal places.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Amount {
	pub symbol: String,
	pub value: Decimal,
}

impl Amount {
	pub fn new(value: Decimal, symbol: &str) -> Self {
		Self {
			value,
			symbol: symbol.to_string(),
		}
	}

	/// Sums the given values under one symbol. A sum beyond what a decimal
	/// holds is clamped rather than overflowing.
	pub fn sum<I: IntoIterator<Item = Decimal>>(values: I, symbol: &str) -> Self {
		let total = values
			.into_iter()
			.fold(Decimal::ZERO, |acc, v| acc.saturating_add(v));
		Self::new(total, symbol)
	}
}

impl fmt::Display for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {:.2}", self.symbol, self.value.round_dp(2))
	}
}
