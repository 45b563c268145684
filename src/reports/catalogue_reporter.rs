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
use crate::expenses::expense::Category;
use crate::reports::table::Table;

/// Lists every category and subcategory key accepted on input, with the
/// labels reports show for them.
pub fn catalogue() -> String {
	let mut table = Table::new(3);
	table.add_header(vec!["Category", "Subcategory", "Label"]);
	table.add_separator();

	for category in Category::ALL {
		table.add_row(vec![
			category.key().to_string(),
			String::new(),
			category.label().to_string(),
		]);
		for (key, label) in category.subcategories() {
			table.add_row(vec![String::new(), key.to_string(), label.to_string()]);
		}
	}

	table.render()
}
