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
use crate::expenses::billing_period;
use crate::expenses::expense::{Expense, NewExpense};
use crate::storage::backend::Storage;
use crate::util::date::Period;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Storage key of the expense collection document
pub const EXPENSES_KEY: &str = "personal-expenses";

type Listener = Rc<dyn Fn(&Rc<[Expense]>)>;

#[derive(Default)]
struct Registry {
	next_id: u64,
	listeners: Vec<(u64, Listener)>,
}

/// The single source of truth for recorded expenses.
///
/// State is held as an immutable snapshot that is swapped out on every
/// mutation. After each mutation the full collection is written back to
/// storage and every subscriber receives the new snapshot, in the order
/// they subscribed. Storage problems never surface as errors: unreadable
/// data loads as an empty collection and failed writes are logged while
/// the in-memory state carries on.
pub struct ExpenseStore {
	storage: Rc<dyn Storage>,
	expenses: Rc<[Expense]>,
	registry: Rc<RefCell<Registry>>,
}

/// Keeps a listener registered for as long as it is alive.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
	registry: Weak<RefCell<Registry>>,
	id: u64,
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(registry) = self.registry.upgrade() {
			registry
				.borrow_mut()
				.listeners
				.retain(|(id, _)| *id != self.id);
		}
	}
}

impl ExpenseStore {
	/// Builds a store from whatever the storage currently holds.
	pub fn load(storage: Rc<dyn Storage>) -> Self {
		let expenses: Vec<Expense> = match storage.get_item(EXPENSES_KEY) {
			Ok(Some(json)) => match serde_json::from_str(&json) {
				Ok(expenses) => expenses,
				Err(e) => {
					warn!("stored expenses are unreadable, starting empty: {}", e);
					Vec::new()
				},
			},
			Ok(None) => {
				debug!("no stored expenses found");
				Vec::new()
			},
			Err(e) => {
				warn!("could not read stored expenses, starting empty: {}", e);
				Vec::new()
			},
		};

		info!(count = expenses.len(), "loaded expenses");

		Self {
			storage,
			expenses: expenses.into(),
			registry: Default::default(),
		}
	}

	// -------------
	// -- QUERIES --
	// -------------

	pub fn list(&self) -> &[Expense] {
		&self.expenses
	}

	pub fn get(&self, id: &str) -> Option<&Expense> {
		self.expenses.iter().find(|e| e.id == id)
	}

	pub fn filter_by_period(
		&self,
		period: Period,
		closing_day: u8,
	) -> Vec<Expense> {
		billing_period::filter_by_period(&self.expenses, period, closing_day)
	}

	// ---------------
	// -- MUTATIONS --
	// ---------------

	/// Records a new expense under a freshly generated id.
	pub fn add(&mut self, data: NewExpense) -> Expense {
		let mut id = Uuid::new_v4().to_string();
		while self.get(&id).is_some() {
			id = Uuid::new_v4().to_string();
		}

		let expense = Expense::with_id(id, data);
		debug!(id = %expense.id, "adding expense");

		let mut next = self.expenses.to_vec();
		next.push(expense.clone());
		self.commit(next);

		expense
	}

	/// Replaces the record with the given id, keeping the id. Returns
	/// false, leaving every record as it was, when no record matches.
	pub fn update(&mut self, id: &str, data: NewExpense) -> bool {
		let mut found = false;

		let next = self
			.expenses
			.iter()
			.map(|e| {
				if !found && e.id == id {
					found = true;
					Expense::with_id(e.id.clone(), data.clone())
				} else {
					e.clone()
				}
			})
			.collect();

		debug!(id, found, "updating expense");
		self.commit(next);
		found
	}

	/// Removes the record with the given id. Returns false when no record
	/// matched.
	pub fn delete(&mut self, id: &str) -> bool {
		let next: Vec<Expense> =
			self.expenses.iter().filter(|e| e.id != id).cloned().collect();
		let found = next.len() != self.expenses.len();

		debug!(id, found, "deleting expense");
		self.commit(next);
		found
	}

	// -------------------
	// -- SUBSCRIPTIONS --
	// -------------------

	/// Registers a listener that receives the full collection after every
	/// mutation. Dropping the returned handle unregisters it.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&Rc<[Expense]>) + 'static,
	{
		let mut registry = self.registry.borrow_mut();
		let id = registry.next_id;
		registry.next_id += 1;
		registry.listeners.push((id, Rc::new(listener)));

		Subscription {
			registry: Rc::downgrade(&self.registry),
			id,
		}
	}

	fn commit(&mut self, next: Vec<Expense>) {
		self.expenses = next.into();
		self.persist();
		self.notify();
	}

	fn persist(&self) {
		let json = match serde_json::to_string(&*self.expenses) {
			Ok(json) => json,
			Err(e) => {
				error!("failed to serialize expenses: {}", e);
				return;
			},
		};

		match self.storage.set_item(EXPENSES_KEY, &json) {
			Ok(()) => debug!(count = self.expenses.len(), "saved expenses"),
			Err(e) => error!("failed to save expenses: {}", e),
		}
	}

	fn notify(&self) {
		// listeners may unsubscribe while being notified, so the registry
		// is not borrowed during the calls
		let listeners: Vec<Listener> = self
			.registry
			.borrow()
			.listeners
			.iter()
			.map(|(_, l)| Rc::clone(l))
			.collect();

		for listener in listeners {
			listener(&self.expenses);
		}
	}
}
