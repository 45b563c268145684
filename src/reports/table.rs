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
use std::fmt::Write;

const COLUMN_GAP: &str = "   ";

/// Plain-text table for reports made of many single-line rows. Column
/// widths are measured in characters, so accented labels line up.
pub struct Table {
	column_count: usize,
	rows: Vec<Row>,
	right_align: Vec<bool>, // indicates columns by index
}

enum Row {
	Header(Vec<String>),
	Data(Vec<String>),
	Separator,
}

impl Table {
	pub fn new(column_count: usize) -> Self {
		Self {
			column_count,
			rows: Vec::new(),
			right_align: vec![false; column_count],
		}
	}

	pub fn add_header(&mut self, row: Vec<&str>) {
		self.rows.push(Row::Header(
			row.into_iter().map(|s| s.to_string()).collect(),
		));
	}

	pub fn add_row(&mut self, row: Vec<String>) {
		self.rows.push(Row::Data(row));
	}

	/// Adds a full-width separator row.
	pub fn add_separator(&mut self) {
		self.rows.push(Row::Separator);
	}

	/// Specifies columns that should be right-aligned by index.
	pub fn right_align(&mut self, cols: Vec<usize>) {
		for col in cols {
			self.right_align[col] = true;
		}
	}

	pub fn render(&self) -> String {
		let mut widths = vec![0; self.column_count];
		for row in &self.rows {
			if let Row::Data(cells) | Row::Header(cells) = row {
				for (i, value) in cells.iter().enumerate() {
					widths[i] = widths[i].max(value.chars().count());
				}
			}
		}

		let mut out = String::new();
		for row in &self.rows {
			let line = match row {
				Row::Header(cells) => self.render_header(&widths, cells),
				Row::Data(cells) => self.render_data(&widths, cells),
				Row::Separator => {
					let total = widths.iter().sum::<usize>()
						+ COLUMN_GAP.len() * (self.column_count - 1);
					"-".repeat(total)
				},
			};
			// trailing padding on the last column is noise
			let _ = writeln!(out, "{}", line.trim_end());
		}
		out
	}

	fn render_data(&self, widths: &[usize], cells: &[String]) -> String {
		cells
			.iter()
			.enumerate()
			.map(|(i, value)| {
				if self.right_align[i] {
					format!("{:>width$}", value, width = widths[i])
				} else {
					format!("{:<width$}", value, width = widths[i])
				}
			})
			.collect::<Vec<_>>()
			.join(COLUMN_GAP)
	}

	fn render_header(&self, widths: &[usize], cells: &[String]) -> String {
		cells
			.iter()
			.enumerate()
			.map(|(i, value)| Table::center_align(value, widths[i]))
			.collect::<Vec<_>>()
			.join(COLUMN_GAP)
	}

	fn center_align(value: &str, width: usize) -> String {
		let len = value.chars().count();
		if len >= width {
			return value.to_string();
		}
		let total_padding = width - len;
		let left_padding = total_padding / 2;
		let right_padding = total_padding - left_padding;

		format!(
			"{}{}{}",
			" ".repeat(left_padding),
			value,
			" ".repeat(right_padding)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_alignment() {
		let mut table = Table::new(2);
		table.right_align(vec![1]);
		table.add_header(vec!["Name", "N"]);
		table.add_separator();
		table.add_row(vec!["a".to_string(), "1".to_string()]);
		table.add_row(vec!["Saúde".to_string(), "100".to_string()]);

		let expected = "\
Name     N
-----------
a         1
Saúde   100
";
		assert_eq!(table.render(), expected);
	}

	#[test]
	fn test_center_align() {
		assert_eq!(Table::center_align("ab", 6), "  ab  ");
		assert_eq!(Table::center_align("ab", 5), " ab  ");
		assert_eq!(Table::center_align("abcdef", 3), "abcdef");
	}
}
