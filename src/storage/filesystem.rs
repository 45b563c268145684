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
use crate::config::config_file::Config;
use crate::storage::backend::Storage;
use anyhow::{anyhow, bail, Error};
use dirs::{data_dir, home_dir};
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const APP_DIR: &str = "spendr";

/// Locates the config file and the data directory on disk.
pub struct Filesystem;

impl Filesystem {
	pub fn new() -> Self {
		Self
	}

	/// Fetches the config from the given path, or default path if none.
	/// The default file is created empty when missing; a custom path must
	/// already exist.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => match home_dir() {
				Some(home) => home.join(".config").join(APP_DIR).join("config.toml"),
				None => bail!("Unable to determine home directory"),
			},
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("failed to read config {}: {}", config_path.display(), e)
		})?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		Ok(config)
	}

	/// Picks the data directory: the command-line flag wins, then the
	/// config file, then the platform data directory.
	pub fn data_dir(
		&self,
		flag: Option<&String>,
		config: &Config,
	) -> Result<PathBuf, Error> {
		if let Some(dir) = flag {
			return Ok(PathBuf::from(dir));
		}

		if let Some(dir) = config.storage.as_ref().and_then(|s| s.data_dir.as_ref())
		{
			return Ok(PathBuf::from(dir));
		}

		match data_dir() {
			Some(dir) => Ok(dir.join(APP_DIR)),
			None => bail!("Unable to determine data directory; pass --data-dir"),
		}
	}
}

/// Stores each key as `<key>.json` inside one directory. The directory is
/// created on first write. Documents are written to a temporary file and
/// renamed into place, so a failed write leaves the previous document
/// untouched.
pub struct FileStorage {
	dir: PathBuf,
}

impl FileStorage {
	pub fn new(dir: PathBuf) -> Self {
		Self { dir }
	}

	fn path_for(&self, key: &str) -> PathBuf {
		self.dir.join(format!("{}.json", key))
	}
}

impl Storage for FileStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
		let path = self.path_for(key);
		if !path.exists() {
			return Ok(None);
		}

		let content = fs::read_to_string(&path)
			.map_err(|e| anyhow!("failed to read {}: {}", path.display(), e))?;
		Ok(Some(content))
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
		fs::create_dir_all(&self.dir).map_err(|e| {
			anyhow!("failed to create {}: {}", self.dir.display(), e)
		})?;

		let path = self.path_for(key);
		let write_err =
			|e: std::io::Error| anyhow!("failed to write {}: {}", path.display(), e);

		let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
		tmp.write_all(value.as_bytes()).map_err(write_err)?;
		tmp.as_file().sync_all().map_err(write_err)?;
		tmp.persist(&path).map_err(|e| write_err(e.error))?;
		Ok(())
	}
}
