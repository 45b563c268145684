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
use crate::expenses::expense::{Expense, PaymentMethod};
use crate::util::date::Period;

/// Returns the month an expense is reported under.
///
/// Debit expenses always belong to the month they happened in. Credit
/// expenses made after the card's closing day land on the following
/// month's bill; those on or before it stay in their own month. The
/// comparison is on raw day numbers, so a closing day past the end of a
/// short month never rolls anything over.
pub fn billing_period(expense: &Expense, closing_day: u8) -> Period {
	let own = expense.date.period();

	match expense.payment_method {
		PaymentMethod::Credit if expense.date.day() > closing_day => own.next(),
		PaymentMethod::Credit | PaymentMethod::Debit => own,
	}
}

/// Selects every expense attributed to the target month. Scans the whole
/// slice each call.
pub fn filter_by_period(
	expenses: &[Expense],
	target: Period,
	closing_day: u8,
) -> Vec<Expense> {
	expenses
		.iter()
		.filter(|e| billing_period(e, closing_day) == target)
		.cloned()
		.collect()
}
