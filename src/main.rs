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
use crate::expenses::expense_store::ExpenseStore;
use crate::input::validation::{check_closing_day, parse_period, ExpenseDraft};
use crate::reports::catalogue_reporter::catalogue;
use crate::reports::expense_reporter::ExpenseReporter;
use crate::settings::settings_store::{SettingsPatch, SettingsStore};
use crate::storage::backend::Storage;
use crate::storage::filesystem::{FileStorage, Filesystem};
use crate::util::date::{Date, Period};
use anyhow::{anyhow, bail, Error};
use clap::{Parser, ValueEnum};
use std::rc::Rc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod expenses;
mod input;
mod reports;
mod settings;
mod storage;
mod util;

#[derive(Parser)]
#[command(name = "spendr", version, about = "Personal expense tracker")]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	/// Expense id for the edit and rm commands
	#[arg(required = false)]
	term: Option<String>,

	// -------------
	// -- STORAGE --
	// -------------
	/// Directory holding the expense and settings files
	#[arg(long)]
	data_dir: Option<String>,

	/// Custom config file location (default: ~/.config/spendr/config.toml)
	#[arg(long)]
	config: Option<String>,

	// --------------------
	// -- EXPENSE FIELDS --
	// --------------------
	/// Amount spent, e.g. 12.50 (a comma also works as decimal separator)
	#[arg(short, long)]
	value: Option<String>,

	/// Payment method: credit or debit
	#[arg(short, long)]
	payment: Option<String>,

	/// Date of the expense, YYYY-MM-DD (add defaults to today)
	#[arg(short, long)]
	date: Option<String>,

	/// Category key; see the cats command
	#[arg(short, long)]
	category: Option<String>,

	/// Subcategory key within the category
	#[arg(short, long)]
	subcategory: Option<String>,

	/// Free text description
	#[arg(long)]
	desc: Option<String>,

	// -------------
	// -- REPORTS --
	// -------------
	/// Billing month to report, YYYY-MM (default: current month)
	#[arg(short, long)]
	month: Option<String>,

	/// Report the month before the selected one
	#[arg(long)]
	prev: bool,

	/// Report the month after the selected one
	#[arg(long)]
	next: bool,

	/// Card closing day (1-31). Saved by the settings command; for any
	/// other command it only applies to this run
	#[arg(long)]
	closing_day: Option<u8>,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if self.prev && self.next {
			bail!("Only one of --prev and --next may be given");
		}

		if let Some(day) = self.closing_day {
			check_closing_day(day)?;
		}

		if matches!(self.command, Directive::Edit | Directive::Rm)
			&& self.term.is_none()
		{
			bail!("No expense id specified");
		}

		Ok(())
	}

	fn draft(&self) -> ExpenseDraft {
		ExpenseDraft {
			value: self.value.clone(),
			payment_method: self.payment.clone(),
			date: self.date.clone(),
			category: self.category.clone(),
			subcategory: self.subcategory.clone(),
			description: self.desc.clone(),
		}
	}

	/// The billing month selected by --month, --prev and --next.
	fn period(&self) -> Result<Period, Error> {
		let base = match &self.month {
			Some(m) => parse_period(m)?,
			None => Date::today().period(),
		};

		Ok(if self.prev {
			base.prev()
		} else if self.next {
			base.next()
		} else {
			base
		})
	}
}

#[derive(ValueEnum, Clone, Debug, PartialEq)]
enum Directive {
	Add,  // record an expense
	Edit, // replace fields of an expense
	Rm,   // remove an expense

	Ls,    // list every expense
	Month, // billing period report

	Cats,     // category and subcategory keys
	Settings, // show or change the card closing day
}

fn main() -> Result<(), Error> {
	init_tracing();

	let args = Cli::parse();
	args.validate()?;

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;
	let data_dir = fs.data_dir(args.data_dir.as_ref(), &config)?;
	debug!(data_dir = %data_dir.display(), "using data directory");

	let storage: Rc<dyn Storage> = Rc::new(FileStorage::new(data_dir));
	let mut settings = SettingsStore::load(Rc::clone(&storage));
	let mut store = ExpenseStore::load(Rc::clone(&storage));

	let _trace = store.subscribe(|expenses| {
		debug!(count = expenses.len(), "expense collection changed")
	});

	let symbol = config.currency_symbol();
	let closing_day =
		args.closing_day.unwrap_or(settings.get().card_closing_day);

	match args.command {
		Directive::Add => {
			let mut draft = args.draft();
			if draft.date.is_none() {
				draft.date = Some(Date::today().to_string());
			}

			let expense = store.add(draft.validate()?);
			println!("Added {}", expense.id);
		},
		Directive::Edit => {
			let id = expense_id(&args)?;
			let existing = match store.get(id) {
				Some(e) => e.to_new(),
				None => bail!("No expense with id {}", id),
			};

			let data = args.draft().apply_to(&existing)?;
			store.update(id, data);
			println!("Updated {}", id);
		},
		Directive::Rm => {
			let id = expense_id(&args)?;
			if !store.delete(id) {
				bail!("No expense with id {}", id);
			}
			println!("Removed {}", id);
		},
		Directive::Ls => {
			let reporter = ExpenseReporter::new(store.list().to_vec(), symbol);
			print!("{}", reporter.listing());
		},
		Directive::Month => {
			let period = args.period()?;
			let reporter = ExpenseReporter::new(
				store.filter_by_period(period, closing_day),
				symbol,
			);
			print!("{}", reporter.month_report(period, closing_day));
		},
		Directive::Cats => {
			print!("{}", catalogue());
		},
		Directive::Settings => {
			if let Some(day) = args.closing_day {
				settings.update(SettingsPatch {
					card_closing_day: Some(day),
				})?;
			}
			println!("Card closing day: {}", settings.get().card_closing_day);
		},
	}

	Ok(())
}

fn expense_id(args: &Cli) -> Result<&str, Error> {
	args.term
		.as_deref()
		.ok_or_else(|| anyhow!("No expense id specified"))
}

/// Logs go to stderr so report output stays clean. Verbosity comes from
/// RUST_LOG and defaults to warnings only.
fn init_tracing() {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.init();
}
