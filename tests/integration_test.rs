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
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const EXPENSES_FILE: &str = "personal-expenses.json";
const SETTINGS_FILE: &str = "expense-settings.json";

/// Dynamically collects test cases from a given directory. Inputs are
/// stored expense documents, outputs the expected report.
fn collect_test_cases(subfolder: &str) -> Vec<(String, String)> {
	let dir_path = format!("tests/test_data/{}", subfolder);

	let mut test_cases = vec![];

	if let Ok(entries) = fs::read_dir(&dir_path) {
		let mut inputs = vec![];
		let mut outputs = vec![];

		for entry in entries.flatten() {
			let file_name =
				entry.file_name().into_string().unwrap_or_default();
			if file_name.ends_with("_in.json") {
				inputs.push(file_name);
			} else if file_name.ends_with("_out.txt") {
				outputs.push(file_name);
			}
		}

		inputs.sort();
		outputs.sort();

		// Pair inputs with corresponding outputs
		for input_file in inputs {
			let output_file = input_file.replace("_in.json", "_out.txt");
			if outputs.contains(&output_file) {
				test_cases.push((input_file, output_file));
			}
		}
	}

	assert!(!test_cases.is_empty(), "no test cases in {}", dir_path);
	test_cases
}

/// A throwaway data directory plus an empty config file, so runs never
/// touch the user's real files.
struct Sandbox {
	dir: TempDir,
}

impl Sandbox {
	fn new() -> Self {
		let dir = tempfile::tempdir().expect("Failed to create temp dir");
		fs::write(dir.path().join("config.toml"), "")
			.expect("Failed to write config");
		fs::create_dir(dir.path().join("data")).expect("Failed to create data dir");
		Self { dir }
	}

	fn data_dir(&self) -> std::path::PathBuf {
		self.dir.path().join("data")
	}

	fn seed(&self, expenses_json: &str) {
		fs::write(self.data_dir().join(EXPENSES_FILE), expenses_json)
			.expect("Failed to seed expenses");
	}

	fn run(&self, args: &[&str]) -> Output {
		let data_dir = self.data_dir();
		let config = self.dir.path().join("config.toml");

		Command::new(env!("CARGO_BIN_EXE_spendr"))
			.arg("--data-dir")
			.arg(&data_dir)
			.arg("--config")
			.arg(&config)
			.args(args)
			.output()
			.expect("Failed to execute process")
	}

	/// Runs and insists on success, returning stdout.
	fn ok(&self, args: &[&str]) -> String {
		let output = self.run(args);
		assert!(
			output.status.success(),
			"{:?} failed: {}",
			args,
			String::from_utf8_lossy(&output.stderr)
		);
		String::from_utf8_lossy(&output.stdout).to_string()
	}

	fn add(&self, args: &[&str]) -> String {
		let stdout = self.ok(&[&["add"][..], args].concat());
		stdout
			.trim()
			.strip_prefix("Added ")
			.expect("add did not report an id")
			.to_string()
	}
}

fn execute(subfolder: &str, cmd: &str, args: Vec<&str>) {
	for (input_file, expected_output_file) in collect_test_cases(subfolder) {
		println!("running for {}...", input_file);

		let sandbox = Sandbox::new();
		let input = fs::read_to_string(format!(
			"tests/test_data/{}/{}",
			subfolder, input_file
		))
		.expect("Failed to read input file");
		sandbox.seed(&input);

		let stdout = sandbox.ok(&[vec![cmd], args.clone()].concat());

		let expected_output = fs::read_to_string(format!(
			"tests/test_data/{}/{}",
			subfolder, expected_output_file
		))
		.expect("Failed to read expected output file");

		assert_eq!(
			stdout.trim(),
			expected_output.trim(),
			"Output did not match for {}; expected:\n{}\ngot:\n{}",
			input_file,
			expected_output.trim(),
			stdout.trim()
		);
	}
}

#[test]
fn test_integration_month() {
	execute("month", "month", vec!["-m", "2025-01", "--closing-day", "5"]);
}

#[test]
fn test_integration_next_month() {
	execute("nextmonth", "month", vec!["-m", "2025-01", "--next"]);
}

#[test]
fn test_integration_year_rollover() {
	execute("rollover", "month", vec!["-m", "2026-01"]);
}

#[test]
fn test_integration_listing() {
	execute("listing", "ls", vec![]);
}

#[test]
fn test_add_and_attribute_to_billing_month() {
	let sandbox = Sandbox::new();
	let credit = sandbox.add(&[
		"-v", "59,90", "-p", "credit", "-d", "2025-01-06", "-c", "lazer", "-s",
		"restaurante",
	]);
	let boundary = sandbox.add(&[
		"-v", "10", "-p", "credit", "-d", "2025-01-05", "-c", "mercado",
	]);
	assert_ne!(credit, boundary);

	let january = sandbox.ok(&["month", "-m", "2025-01"]);
	assert!(january.contains(&boundary));
	assert!(!january.contains(&credit));

	let february = sandbox.ok(&["month", "-m", "2025-02"]);
	assert!(february.contains(&credit));
	assert!(february.contains("R$ 59.90"));
	assert!(february.contains("Lazer / Restaurante"));

	// a later closing day keeps the purchase in January
	let january = sandbox.ok(&["month", "-m", "2025-01", "--closing-day", "6"]);
	assert!(january.contains(&credit));

	let stored = fs::read_to_string(sandbox.data_dir().join(EXPENSES_FILE)).unwrap();
	assert!(stored.contains("\"paymentMethod\":\"credit\""));
	assert!(stored.contains("\"date\":\"2025-01-06\""));
}

#[test]
fn test_settings_persist_closing_day() {
	let sandbox = Sandbox::new();
	assert_eq!(sandbox.ok(&["settings"]).trim(), "Card closing day: 5");

	let credit = sandbox.add(&[
		"-v", "100", "-p", "credit", "-d", "2025-03-15", "-c", "saude",
	]);
	assert!(sandbox.ok(&["month", "-m", "2025-04"]).contains(&credit));

	assert_eq!(
		sandbox.ok(&["settings", "--closing-day", "20"]).trim(),
		"Card closing day: 20"
	);
	assert_eq!(sandbox.ok(&["settings"]).trim(), "Card closing day: 20");

	let settings =
		fs::read_to_string(sandbox.data_dir().join(SETTINGS_FILE)).unwrap();
	assert_eq!(settings, r#"{"cardClosingDay":20}"#);

	let march = sandbox.ok(&["month", "-m", "2025-03"]);
	assert!(march.contains("card closing day 20"));
	assert!(march.contains(&credit));
}

#[test]
fn test_edit_and_remove() {
	let sandbox = Sandbox::new();
	let id = sandbox.add(&[
		"-v", "20", "-p", "debit", "-d", "2025-05-02", "-c", "transporte", "-s",
		"gasolina", "--desc", "Posto",
	]);
	let other = sandbox.add(&[
		"-v", "5", "-p", "debit", "-d", "2025-05-03", "-c", "mercado",
	]);

	let stdout = sandbox.ok(&["edit", id.as_str(), "-v", "25.5", "-c", "lazer"]);
	assert_eq!(stdout.trim(), format!("Updated {}", id));

	let listing = sandbox.ok(&["ls"]);
	assert!(listing.contains("R$ 25.50"));
	assert!(listing.contains("Posto"));
	assert!(!listing.contains("Gasolina"));
	assert!(listing.contains(&other));

	assert_eq!(
		sandbox.ok(&["rm", id.as_str()]).trim(),
		format!("Removed {}", id)
	);
	let listing = sandbox.ok(&["ls"]);
	assert!(!listing.contains(&id));
	assert!(listing.contains(&other));

	// removing again changes nothing but is reported
	assert!(!sandbox.run(&["rm", id.as_str()]).status.success());
	assert!(sandbox.ok(&["ls"]).contains(&other));

	assert!(!sandbox.run(&["edit", "missing", "-v", "1"]).status.success());
}

#[test]
fn test_rejects_invalid_input() {
	let sandbox = Sandbox::new();
	let base = ["add", "-v", "10", "-p", "debit", "-c", "lazer"];

	for bad in [
		vec!["-d", "2025-02-30"],
		vec!["-d", "30/01/2025"],
		vec!["-d", "2025-01-01", "-s", "gasolina"],
	] {
		let output = sandbox.run(&[&base[..], &bad[..]].concat());
		assert!(!output.status.success(), "{:?} unexpectedly succeeded", bad);
	}

	assert!(!sandbox
		.run(&["add", "-v", "0", "-p", "debit", "-c", "lazer"])
		.status
		.success());
	assert!(!sandbox
		.run(&["add", "-v", "10", "-p", "cash", "-c", "lazer"])
		.status
		.success());
	for value in ["79228162514264337593543950335", "10000000000000", "1.234"] {
		assert!(
			!sandbox
				.run(&["add", "-v", value, "-p", "debit", "-c", "lazer"])
				.status
				.success(),
			"{} unexpectedly accepted",
			value
		);
	}
	assert!(!sandbox.run(&["settings", "--closing-day", "32"]).status.success());
	assert!(!sandbox.run(&["month", "-m", "2025-13"]).status.success());
	assert!(!sandbox.run(&["month", "-m", "+202-01"]).status.success());
	assert!(!sandbox.run(&["rm"]).status.success());

	assert!(!Path::new(&sandbox.data_dir().join(EXPENSES_FILE)).exists());
	assert!(!Path::new(&sandbox.data_dir().join(SETTINGS_FILE)).exists());
}

#[test]
fn test_unreadable_store_starts_empty() {
	let sandbox = Sandbox::new();
	sandbox.seed("[{ this is not json");

	assert_eq!(sandbox.ok(&["ls"]).trim(), "No expenses");

	let id = sandbox.add(&[
		"-v", "1", "-p", "debit", "-d", "2025-01-01", "-c", "mercado",
	]);
	let listing = sandbox.ok(&["ls"]);
	assert!(listing.contains(&id));
}

#[test]
fn test_month_navigation() {
	let sandbox = Sandbox::new();
	let id = sandbox.add(&[
		"-v", "9", "-p", "debit", "-d", "2024-12-24", "-c", "lazer",
	]);

	assert!(sandbox.ok(&["month", "-m", "2025-01", "--prev"]).contains(&id));
	assert!(sandbox.ok(&["month", "-m", "2024-11", "--next"]).contains(&id));
	assert!(!sandbox.run(&["month", "--prev", "--next"]).status.success());
}

#[test]
fn test_categories() {
	let sandbox = Sandbox::new();
	let stdout = sandbox.ok(&["cats"]);
	assert!(stdout.contains("transporte"));
	assert!(stdout.contains("uber-99"));
	assert!(stdout.contains("99/Uber"));
}

#[test]
fn test_largest_value_reports_exactly() {
	let sandbox = Sandbox::new();
	let id = sandbox.add(&[
		"-v", "9999999999999.99", "-p", "debit", "-d", "2025-01-10", "-c", "moradia",
	]);
	sandbox.add(&["-v", "0.01", "-p", "debit", "-d", "2025-01-11", "-c", "moradia"]);

	let january = sandbox.ok(&["month", "-m", "2025-01"]);
	assert!(january.contains(&id));
	assert!(january.contains("Total: R$ 10000000000000.00 (2 expenses)"));
	assert!(january.contains("R$ 9999999999999.99"));
}

#[test]
fn test_invalid_stored_closing_day_falls_back() {
	let sandbox = Sandbox::new();
	fs::write(
		sandbox.data_dir().join(SETTINGS_FILE),
		r#"{"cardClosingDay":0}"#,
	)
	.unwrap();

	assert_eq!(sandbox.ok(&["settings"]).trim(), "Card closing day: 5");
}

#[test]
fn test_edit_record_with_foreign_subcategory() {
	let sandbox = Sandbox::new();
	sandbox.seed(
		r#"[{"id":"imp1","value":42,"paymentMethod":"debit","date":"2025-02-03",
		"category":"mercado","subcategory":"importado"}]"#,
	);

	let stdout = sandbox.ok(&["edit", "imp1", "--desc", "Atacado"]);
	assert_eq!(stdout.trim(), "Updated imp1");

	let stored = fs::read_to_string(sandbox.data_dir().join(EXPENSES_FILE)).unwrap();
	assert!(stored.contains("\"subcategory\":\"importado\""));
	assert!(stored.contains("\"description\":\"Atacado\""));

	assert!(!sandbox
		.run(&["edit", "imp1", "-s", "importado"])
		.status
		.success());
}
