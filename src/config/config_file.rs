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
use crate::util::amount::DEFAULT_CURRENCY_SYMBOL;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub storage: Option<StorageConfig>,
	pub report: Option<Report>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
	/// Directory holding the expense and settings documents
	pub data_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Report {
	pub currency_symbol: Option<String>,
}

impl Config {
	pub fn currency_symbol(&self) -> &str {
		self.report
			.as_ref()
			.and_then(|r| r.currency_symbol.as_deref())
			.unwrap_or(DEFAULT_CURRENCY_SYMBOL)
	}
}
