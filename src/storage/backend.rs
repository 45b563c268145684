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
use anyhow::Error;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Durable string storage keyed by name. Each key holds one whole JSON
/// document; writers always replace the full value.
pub trait Storage {
	/// Returns None when nothing has been stored under the key.
	fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

	fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// Keeps documents in memory only.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
	items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}
}

#[cfg(test)]
impl Storage for MemoryStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
		Ok(self.items.borrow().get(key).cloned())
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
		self.items
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}
