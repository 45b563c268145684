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
use crate::input::validation::{check_closing_day, ValidationError};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, error, warn};

/// Storage key of the settings document
pub const SETTINGS_KEY: &str = "expense-settings";

/// Closing day used until the user picks one
pub const DEFAULT_CLOSING_DAY: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
	/// Credit expenses after this day of the month go on the next bill
	pub card_closing_day: u8,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			card_closing_day: DEFAULT_CLOSING_DAY,
		}
	}
}

/// A partial settings update; None fields keep their current value.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettingsPatch {
	pub card_closing_day: Option<u8>,
}

pub struct SettingsStore {
	storage: Rc<dyn Storage>,
	settings: Settings,
}

impl SettingsStore {
	/// Reads persisted settings, falling back to defaults when there are
	/// none or they cannot be read.
	pub fn load(storage: Rc<dyn Storage>) -> Self {
		let settings = match storage.get_item(SETTINGS_KEY) {
			Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
				Ok(settings) => match check_closing_day(settings.card_closing_day) {
					Ok(_) => settings,
					Err(e) => {
						warn!("stored settings are invalid, using defaults: {}", e);
						Settings::default()
					},
				},
				Err(e) => {
					warn!("stored settings are unreadable, using defaults: {}", e);
					Settings::default()
				},
			},
			Ok(None) => Settings::default(),
			Err(e) => {
				warn!("could not read stored settings, using defaults: {}", e);
				Settings::default()
			},
		};

		debug!(?settings, "loaded settings");
		Self { storage, settings }
	}

	pub fn get(&self) -> Settings {
		self.settings
	}

	/// Merges the patch into the current settings and saves the result.
	/// An out-of-range patch is rejected and nothing changes.
	pub fn update(
		&mut self,
		patch: SettingsPatch,
	) -> Result<(), ValidationError> {
		if let Some(day) = patch.card_closing_day {
			self.settings.card_closing_day = check_closing_day(day)?;
		}

		match serde_json::to_string(&self.settings) {
			Ok(json) => {
				if let Err(e) = self.storage.set_item(SETTINGS_KEY, &json) {
					error!("failed to save settings: {}", e);
				}
			},
			Err(e) => error!("failed to serialize settings: {}", e),
		}

		Ok(())
	}
}
